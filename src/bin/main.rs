use colored::Colorize;
use creational_patterns::{
    DemoConfig, RendererClient, TailCommandBuilder, TailCommandDirector,
};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn banner(title: &str) {
    println!("\n{}", format!("=== {} ===", title).bold().cyan());
}

fn abstract_factory_demo(config: &DemoConfig) {
    banner("Abstract Factory");
    let client = RendererClient::for_style(config.renderer.style);
    let text = &config.renderer.text;

    println!("style:    {:?}", config.renderer.style);
    println!("html:     {}", client.render_html(text));
    println!("markdown: {}", client.render_markdown(text));
}

fn builder_demo(config: &DemoConfig) {
    banner("Builder");
    let path = config.command.file_path.as_str();

    let mut builder = TailCommandBuilder::new();
    if let Some(lines) = config.command.last_lines {
        builder.with_last_lines(lines);
    }
    builder.with_follow().with_verbose().with_file_path(path);
    print_command("builder", &builder);

    let director = TailCommandDirector;
    let mut builder = TailCommandBuilder::new();
    director.build_with_follow(&mut builder, path);
    print_command("with-follow", &builder);

    builder.reset();
    director.build_with_follow_and_verbose(&mut builder, path);
    print_command("with-follow-and-verbose", &builder);

    builder.reset();
    print_command("unconfigured", &builder);
}

fn print_command(label: &str, builder: &TailCommandBuilder) {
    match builder.build() {
        Ok(command) => println!("{:<24} {}", label, command.green()),
        Err(err) => println!("{:<24} {}", label, err.to_string().red()),
    }
}

fn factory_method_demo(config: &DemoConfig) {
    banner("Factory Method");
    for settings in &config.payment.gateways {
        let provider = settings.provider();
        let factory = settings.clone().into_factory();
        let result = factory.process_and_log_payment(config.payment.amount);
        println!("{:<8} {}", provider.yellow(), result);
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "creational_patterns=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = env::args().nth(1).map(PathBuf::from);
    let config = match DemoConfig::load(path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "error:".bold().red(), err);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "loaded demo configuration");

    abstract_factory_demo(&config);
    builder_demo(&config);
    factory_method_demo(&config);

    ExitCode::SUCCESS
}
