use axum::http::StatusCode;
use thiserror::Error;

use crate::models::{Alert, OrderRequest, Side};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertRejection {
    #[error("Invalid token")]
    Unauthorized,

    #[error("Missing required fields: {}", .missing.join(", "))]
    MissingFields { missing: Vec<&'static str> },

    #[error("Invalid side: {0} (expected BUY or SELL)")]
    InvalidSide(String),
}

impl AlertRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            AlertRejection::Unauthorized => StatusCode::FORBIDDEN,
            AlertRejection::MissingFields { .. } | AlertRejection::InvalidSide(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

/// An alert that passed both the token and the completeness checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAlert {
    pub symbol: String,
    pub side: Side,
    pub quantity: String,
}

impl ValidatedAlert {
    pub fn into_order(self) -> OrderRequest {
        OrderRequest::open_market(self.symbol, self.side, self.quantity)
    }
}

// Blank means missing; a present value is forwarded untouched.
fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.trim().is_empty())
}

/// Exact match against the configured secret. An absent token never matches.
pub fn authorize(token: Option<&str>, secret: &str) -> Result<(), AlertRejection> {
    if token != Some(secret) {
        return Err(AlertRejection::Unauthorized);
    }
    Ok(())
}

/// Token first, then required fields. A bad token never reveals which
/// fields were missing.
pub fn validate(alert: &Alert, secret: &str) -> Result<ValidatedAlert, AlertRejection> {
    authorize(alert.token.as_deref(), secret)?;

    let symbol = present(&alert.symbol);
    let side = present(&alert.side);
    let quantity = present(&alert.quantity);

    let mut missing = Vec::new();
    if symbol.is_none() {
        missing.push("symbol");
    }
    if side.is_none() {
        missing.push("side");
    }
    if quantity.is_none() {
        missing.push("quantity");
    }

    let (Some(symbol), Some(side), Some(quantity)) = (symbol, side, quantity) else {
        return Err(AlertRejection::MissingFields { missing });
    };

    let side: Side = side
        .trim()
        .parse()
        .map_err(|_| AlertRejection::InvalidSide(side.to_string()))?;

    Ok(ValidatedAlert {
        symbol: symbol.to_string(),
        side,
        quantity: quantity.to_string(),
    })
}
