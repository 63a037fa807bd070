use serde::Serialize;

use super::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Market,
}

/// Body of `place_order`. Field order here is the wire order, and the
/// signature is computed over exactly those bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    pub symbol: String,
    pub qty: String,
    pub side: Side,
    #[serde(rename = "tradeSide")]
    pub trade_side: TradeSide,
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
}

impl OrderRequest {
    /// Market order that opens a position.
    pub fn open_market(symbol: impl Into<String>, side: Side, qty: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            qty: qty.into(),
            side,
            trade_side: TradeSide::Open,
            order_type: OrderType::Market,
        }
    }

    /// Compact JSON, the bytes that are both signed and sent.
    pub fn to_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
