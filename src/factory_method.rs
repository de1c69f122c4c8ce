//! Factory Method
//!
//! [`PaymentGatewayFactory`] declares one required creation method and one
//! provided workflow that every creator shares. Implementors only decide which
//! [`PaymentGateway`] to build; the workflow (create, process, log) never
//! changes.

use serde::Deserialize;
use std::fmt;

// ============================================================================
// Products
// ============================================================================

pub trait PaymentGateway: Send + Sync {
    fn process_payment(&self, amount: f64) -> String;
}

/// Renders an amount with shortest round-trip digits. Negative zero is `0`,
/// non-finite values are `Infinity`/`-Infinity`/`NaN`, and magnitudes outside
/// `[1e-6, 1e21)` use exponent form with an explicit sign (`1e+21`, `1e-7`).
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if amount == 0.0 {
        return "0".to_string();
    }

    let magnitude = amount.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return amount.to_string();
    }

    let exponential = format!("{:e}", amount);
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exponential,
    }
}

#[derive(Debug, Clone)]
pub struct StripeGateway {
    api_key: String,
}

impl StripeGateway {
    pub fn new(api_key: impl Into<String>) -> Self {
        StripeGateway {
            api_key: api_key.into(),
        }
    }
}

impl PaymentGateway for StripeGateway {
    fn process_payment(&self, amount: f64) -> String {
        format!(
            "Processed payment of ${} through Stripe using API Key: {}.",
            format_amount(amount),
            self.api_key
        )
    }
}

#[derive(Clone)]
pub struct PayPalGateway {
    client_id: String,
    // Never rendered into output.
    #[allow(dead_code)]
    client_secret: String,
}

impl PayPalGateway {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        PayPalGateway {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for PayPalGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayPalGateway")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl PaymentGateway for PayPalGateway {
    fn process_payment(&self, amount: f64) -> String {
        format!(
            "Processed payment of ${} through PayPal using Client ID: {}.",
            format_amount(amount),
            self.client_id
        )
    }
}

// ============================================================================
// Log sink
// ============================================================================

const LOG_TARGET: &str = "creational_patterns::payment";

/// Fire-and-forget destination for payment log lines.
pub trait PaymentLog {
    fn record(&self, entry: &str);
}

/// Routes payment log lines to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPaymentLog;

impl PaymentLog for TracingPaymentLog {
    fn record(&self, entry: &str) {
        tracing::info!(target: LOG_TARGET, "{}", entry);
    }
}

// ============================================================================
// Creators
// ============================================================================

pub trait PaymentGatewayFactory: Send + Sync {
    fn create_payment_gateway(&self) -> Box<dyn PaymentGateway>;

    fn process_and_log_payment(&self, amount: f64) -> String {
        self.process_and_log_payment_with(amount, &TracingPaymentLog)
    }

    /// Creates exactly one gateway, processes `amount` and records the result.
    fn process_and_log_payment_with(&self, amount: f64, log: &dyn PaymentLog) -> String {
        let gateway = self.create_payment_gateway();
        let result = gateway.process_payment(amount);
        log.record(&format!("Payment log: {}", result));
        result
    }
}

#[derive(Debug, Clone)]
pub struct StripeFactory {
    api_key: String,
}

impl StripeFactory {
    pub fn new(api_key: impl Into<String>) -> Self {
        StripeFactory {
            api_key: api_key.into(),
        }
    }
}

impl PaymentGatewayFactory for StripeFactory {
    fn create_payment_gateway(&self) -> Box<dyn PaymentGateway> {
        tracing::debug!("creating Stripe gateway");
        Box::new(StripeGateway::new(self.api_key.clone()))
    }
}

#[derive(Clone)]
pub struct PayPalFactory {
    client_id: String,
    client_secret: String,
}

impl PayPalFactory {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        PayPalFactory {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for PayPalFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayPalFactory")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl PaymentGatewayFactory for PayPalFactory {
    fn create_payment_gateway(&self) -> Box<dyn PaymentGateway> {
        tracing::debug!(client_id = %self.client_id, "creating PayPal gateway");
        Box::new(PayPalGateway::new(
            self.client_id.clone(),
            self.client_secret.clone(),
        ))
    }
}

/// Credentials for one creator, as written in configuration.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum GatewaySettings {
    Stripe {
        api_key: String,
    },
    PayPal {
        client_id: String,
        client_secret: String,
    },
}

impl GatewaySettings {
    pub fn into_factory(self) -> Box<dyn PaymentGatewayFactory> {
        match self {
            GatewaySettings::Stripe { api_key } => Box::new(StripeFactory::new(api_key)),
            GatewaySettings::PayPal {
                client_id,
                client_secret,
            } => Box::new(PayPalFactory::new(client_id, client_secret)),
        }
    }

    pub fn provider(&self) -> &'static str {
        match self {
            GatewaySettings::Stripe { .. } => "stripe",
            GatewaySettings::PayPal { .. } => "paypal",
        }
    }
}

impl fmt::Debug for GatewaySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewaySettings::Stripe { api_key } => {
                f.debug_struct("Stripe").field("api_key", api_key).finish()
            }
            GatewaySettings::PayPal { client_id, .. } => f
                .debug_struct("PayPal")
                .field("client_id", client_id)
                .finish_non_exhaustive(),
        }
    }
}
