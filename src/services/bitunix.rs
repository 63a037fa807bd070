use reqwest::{Client, StatusCode};
use tracing::{info, warn};

use crate::config::BitunixConfig;
use crate::models::{BitunixErrorBody, BitunixResponse, OrderRequest, OrderResult};

use super::signature::{generate_nonce, generate_signature, timestamp_millis};

pub const PLACE_ORDER_PATH: &str = "/api/v1/futures/trade/place_order";

#[derive(Clone)]
pub struct BitunixClient {
    http: Client,
    config: BitunixConfig,
}

impl BitunixClient {
    pub fn new(config: BitunixConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Signs and submits one order. Exactly one attempt; nothing is retried.
    pub async fn place_order(&self, order: &OrderRequest) -> OrderResult {
        let body = match order.to_body() {
            Ok(b) => b,
            Err(e) => return OrderResult::TransportError(format!("could not encode order: {e}")),
        };

        let nonce = generate_nonce();
        let timestamp = timestamp_millis();
        // this integration never sends query parameters
        let sign = generate_signature(
            &nonce,
            &timestamp,
            &self.config.api_key,
            "",
            &body,
            &self.config.secret_key,
        );

        let url = format!("{}{}", self.config.base_url, PLACE_ORDER_PATH);
        let res = self
            .http
            .post(&url)
            .header("api-key", &self.config.api_key)
            .header("nonce", &nonce)
            .header("timestamp", &timestamp)
            .header("sign", &sign)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await;

        let res = match res {
            Ok(r) => r,
            Err(e) => {
                warn!(symbol = %order.symbol, error = %e, "bitunix unreachable");
                return OrderResult::TransportError(e.to_string());
            }
        };

        let status = res.status();
        let text = match res.text().await {
            Ok(t) => t,
            Err(e) => return OrderResult::TransportError(e.to_string()),
        };

        let result = map_response(status, &text);
        match &result {
            OrderResult::Success { order_id, .. } => info!(
                symbol = %order.symbol,
                side = %order.side,
                qty = %order.qty,
                order_id = %order_id,
                "bitunix accepted order"
            ),
            other => warn!(
                symbol = %order.symbol,
                side = %order.side,
                qty = %order.qty,
                %status,
                outcome = %other,
                "bitunix did not place order"
            ),
        }
        result
    }
}

fn with_code(msg: &str, code: i64) -> String {
    format!("{msg} (code: {code})")
}

/// Turns a received HTTP response into an outcome. Split out so the
/// mapping can be checked without a server.
pub fn map_response(status: StatusCode, body: &str) -> OrderResult {
    if !status.is_success() {
        // the broker's own message beats the generic status text
        if let Ok(err) = serde_json::from_str::<BitunixErrorBody>(body) {
            if let Some(msg) = err.msg.filter(|m| !m.trim().is_empty()) {
                return OrderResult::BrokerError(match err.code {
                    Some(code) => with_code(&msg, code),
                    None => msg,
                });
            }
        }
        return OrderResult::BrokerError(format!("request failed with status {status}"));
    }

    let parsed: BitunixResponse = match serde_json::from_str(body) {
        Ok(p) => p,
        Err(e) => return OrderResult::TransportError(format!("malformed broker response: {e}")),
    };

    if parsed.code != 0 {
        let msg = parsed.msg.unwrap_or_default();
        return OrderResult::BrokerError(with_code(&msg, parsed.code));
    }

    let Some(data) = parsed.data else {
        return OrderResult::TransportError("malformed broker response: missing data".to_string());
    };
    let Some(order_id) = data.order_id else {
        return OrderResult::TransportError(
            "malformed broker response: missing data.orderId".to_string(),
        );
    };

    OrderResult::Success {
        order_id,
        client_id: data.client_id,
    }
}
