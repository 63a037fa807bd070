use serde::Deserialize;

use super::de::opt_string_or_number;

/// Envelope every Bitunix endpoint answers with. `code == 0` is success.
#[derive(Debug, Clone, Deserialize)]
pub struct BitunixResponse {
    pub code: i64,

    #[serde(default)]
    pub msg: Option<String>,

    #[serde(default)]
    pub data: Option<OrderData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderData {
    #[serde(rename = "orderId", default, deserialize_with = "opt_string_or_number")]
    pub order_id: Option<String>,

    #[serde(rename = "clientId", default, deserialize_with = "opt_string_or_number")]
    pub client_id: Option<String>,
}

/// Error bodies don't always carry a code, so this one is lenient.
#[derive(Debug, Clone, Deserialize)]
pub struct BitunixErrorBody {
    #[serde(default)]
    pub code: Option<i64>,

    #[serde(default)]
    pub msg: Option<String>,
}
