use std::fmt;

/// Outcome of one `place_order` attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderResult {
    Success {
        order_id: String,
        client_id: Option<String>,
    },
    /// Broker was reached and refused or failed the order.
    BrokerError(String),
    /// No usable response: network failure or a body we could not read.
    TransportError(String),
}

impl OrderResult {
    pub fn is_success(&self) -> bool {
        matches!(self, OrderResult::Success { .. })
    }
}

impl fmt::Display for OrderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderResult::Success { order_id, .. } => write!(f, "order placed: {order_id}"),
            OrderResult::BrokerError(msg) => write!(f, "Bitunix API error: {msg}"),
            OrderResult::TransportError(msg) => write!(f, "Bitunix request failed: {msg}"),
        }
    }
}
