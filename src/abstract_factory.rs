//! Abstract Factory
//!
//! Produces families of related objects without naming their concrete types.
//!
//! Products: [`HtmlRenderer`], [`MarkdownRenderer`]
//! Families: italic, bold
//!
//! Adding a family means one new [`RendererFactory`] and two new renderers;
//! [`RendererClient`] stays untouched.

use serde::Deserialize;

// ============================================================================
// Abstract products
// ============================================================================

pub trait HtmlRenderer: Send + Sync {
    fn render_html(&self, text: &str) -> String;
}

pub trait MarkdownRenderer: Send + Sync {
    fn render_markdown(&self, text: &str) -> String;
}

// ============================================================================
// Concrete products
// ============================================================================

pub struct ItalicHtmlRenderer;

impl HtmlRenderer for ItalicHtmlRenderer {
    fn render_html(&self, text: &str) -> String {
        format!("<i>{}</i>", text)
    }
}

pub struct ItalicMarkdownRenderer;

impl MarkdownRenderer for ItalicMarkdownRenderer {
    fn render_markdown(&self, text: &str) -> String {
        format!("*{}*", text)
    }
}

pub struct BoldHtmlRenderer;

impl HtmlRenderer for BoldHtmlRenderer {
    fn render_html(&self, text: &str) -> String {
        format!("<b>{}</b>", text)
    }
}

pub struct BoldMarkdownRenderer;

impl MarkdownRenderer for BoldMarkdownRenderer {
    fn render_markdown(&self, text: &str) -> String {
        format!("**{}**", text)
    }
}

// ============================================================================
// Abstract factory and concrete factories
// ============================================================================

/// Creates one renderer of each product kind, all from the same family.
pub trait RendererFactory: Send + Sync {
    fn create_html_renderer(&self) -> Box<dyn HtmlRenderer>;
    fn create_markdown_renderer(&self) -> Box<dyn MarkdownRenderer>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ItalicRendererFactory;

impl RendererFactory for ItalicRendererFactory {
    fn create_html_renderer(&self) -> Box<dyn HtmlRenderer> {
        Box::new(ItalicHtmlRenderer)
    }

    fn create_markdown_renderer(&self) -> Box<dyn MarkdownRenderer> {
        Box::new(ItalicMarkdownRenderer)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BoldRendererFactory;

impl RendererFactory for BoldRendererFactory {
    fn create_html_renderer(&self) -> Box<dyn HtmlRenderer> {
        Box::new(BoldHtmlRenderer)
    }

    fn create_markdown_renderer(&self) -> Box<dyn MarkdownRenderer> {
        Box::new(BoldMarkdownRenderer)
    }
}

/// Runtime selector for a renderer family, e.g. from configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererStyle {
    #[default]
    Italic,
    Bold,
}

impl RendererStyle {
    pub fn factory(self) -> Box<dyn RendererFactory> {
        match self {
            RendererStyle::Italic => Box::new(ItalicRendererFactory),
            RendererStyle::Bold => Box::new(BoldRendererFactory),
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// Holds one family's renderers for its whole lifetime.
pub struct RendererClient {
    html_renderer: Box<dyn HtmlRenderer>,
    markdown_renderer: Box<dyn MarkdownRenderer>,
}

impl RendererClient {
    pub fn new(factory: &dyn RendererFactory) -> Self {
        RendererClient {
            html_renderer: factory.create_html_renderer(),
            markdown_renderer: factory.create_markdown_renderer(),
        }
    }

    pub fn for_style(style: RendererStyle) -> Self {
        Self::new(style.factory().as_ref())
    }

    pub fn render_html(&self, text: &str) -> String {
        self.html_renderer.render_html(text)
    }

    pub fn render_markdown(&self, text: &str) -> String {
        self.markdown_renderer.render_markdown(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn italic_client_renders_italic() {
        let client = RendererClient::new(&ItalicRendererFactory);

        assert_eq!(client.render_html("text"), "<i>text</i>");
        assert_eq!(client.render_markdown("text"), "*text*");
    }

    #[test]
    fn bold_client_renders_bold() {
        let client = RendererClient::new(&BoldRendererFactory);

        assert_eq!(client.render_html("text"), "<b>text</b>");
        assert_eq!(client.render_markdown("text"), "**text**");
    }

    #[test]
    fn families_never_mix() {
        let samples = ["", "text", "two words", "<already>", "*starred*"];

        for text in samples {
            let italic = RendererClient::for_style(RendererStyle::Italic);
            assert_eq!(italic.render_html(text), format!("<i>{}</i>", text));
            assert_eq!(italic.render_markdown(text), format!("*{}*", text));
            assert!(!italic.render_html(text).starts_with("<b>"));

            let bold = RendererClient::for_style(RendererStyle::Bold);
            assert_eq!(bold.render_html(text), format!("<b>{}</b>", text));
            assert_eq!(bold.render_markdown(text), format!("**{}**", text));
            assert!(!bold.render_html(text).starts_with("<i>"));
        }
    }

    #[test]
    fn client_accepts_boxed_factories() {
        let factories: Vec<Box<dyn RendererFactory>> =
            vec![Box::new(ItalicRendererFactory), Box::new(BoldRendererFactory)];

        let rendered: Vec<String> = factories
            .iter()
            .map(|factory| RendererClient::new(factory.as_ref()).render_markdown("x"))
            .collect();

        assert_eq!(rendered, vec!["*x*", "**x**"]);
    }

    #[test]
    fn style_deserializes_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            style: RendererStyle,
        }

        let parsed: Wrapper = toml::from_str(r#"style = "bold""#).unwrap();
        assert_eq!(parsed.style, RendererStyle::Bold);
        assert_eq!(RendererStyle::default(), RendererStyle::Italic);
    }

    fn assert_send_sync<T: Send + Sync + ?Sized>() {}

    #[test]
    fn clients_and_factories_are_thread_safe() {
        assert_send_sync::<RendererClient>();
        assert_send_sync::<dyn RendererFactory>();
        assert_send_sync::<Box<dyn RendererFactory>>();

        let client = RendererClient::for_style(RendererStyle::Bold);
        let rendered = std::thread::spawn(move || client.render_html("text"))
            .join()
            .unwrap();

        assert_eq!(rendered, "<b>text</b>");
    }
}
