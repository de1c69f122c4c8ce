//! TOML configuration for the demo binary.
//!
//! ```toml
//! [renderer]
//! style = "bold"
//! text = "hello"
//!
//! [command]
//! file_path = "/var/log/syslog"
//! last_lines = 20
//!
//! [payment]
//! amount = 42.5
//!
//! [[payment.gateways]]
//! provider = "stripe"
//! api_key = "sk_test"
//! ```
//!
//! Every section and field is optional.

use crate::abstract_factory::RendererStyle;
use crate::error::ConfigError;
use crate::factory_method::GatewaySettings;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub renderer: RendererSection,
    pub command: CommandSection,
    pub payment: PaymentSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RendererSection {
    pub style: RendererStyle,
    pub text: String,
}

impl Default for RendererSection {
    fn default() -> Self {
        RendererSection {
            style: RendererStyle::Italic,
            text: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CommandSection {
    pub file_path: String,
    pub last_lines: Option<u32>,
}

impl Default for CommandSection {
    fn default() -> Self {
        CommandSection {
            file_path: "file.txt".to_string(),
            last_lines: Some(10),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaymentSection {
    pub amount: f64,
    pub gateways: Vec<GatewaySettings>,
}

impl Default for PaymentSection {
    fn default() -> Self {
        PaymentSection {
            amount: 100.0,
            gateways: vec![
                GatewaySettings::Stripe {
                    api_key: "mock-api-key".to_string(),
                },
                GatewaySettings::PayPal {
                    client_id: "mock-client-id".to_string(),
                    client_secret: "mock-client-secret".to_string(),
                },
            ],
        }
    }
}

impl DemoConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::read(path, err))?;
        Self::from_toml(&content)
    }

    /// Loads `path` when given, otherwise falls back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
