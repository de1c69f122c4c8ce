//! # Creational Design Patterns
//!
//! Three independent examples of polymorphic object creation.
//!
//! ## Patterns Covered
//!
//! 1. **Abstract Factory** ([`abstract_factory`])
//!    - Families of related renderers (HTML + Markdown)
//!    - One factory per style, never mixing families
//!
//! 2. **Builder** ([`builder`])
//!    - Non-consuming `&mut self` builder for a `tail` command line
//!    - Runtime validation of the required file path
//!    - Director with canned construction recipes
//!
//! 3. **Factory Method** ([`factory_method`])
//!    - Creator trait with one required creation method
//!    - Provided workflow method shared by every creator
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run --bin creational-demo
//! cargo run --bin creational-demo -- demo.toml
//! RUST_LOG=creational_patterns=debug cargo run --bin creational-demo
//! ```

pub mod abstract_factory;
pub mod builder;
pub mod config;
pub mod error;
pub mod factory_method;

pub use abstract_factory::{
    BoldRendererFactory, HtmlRenderer, ItalicRendererFactory, MarkdownRenderer, RendererClient,
    RendererFactory, RendererStyle,
};
pub use builder::{TailCommandBuilder, TailCommandDirector};
pub use config::DemoConfig;
pub use error::{BuildError, ConfigError};
pub use factory_method::{
    format_amount, GatewaySettings, PayPalFactory, PayPalGateway, PaymentGateway,
    PaymentGatewayFactory, PaymentLog, StripeFactory, StripeGateway, TracingPaymentLog,
};
