use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::{
    models::{Alert, OrderResult},
    services::alert_validator,
    AppState,
};

fn rejected(rejection: alert_validator::AlertRejection) -> Response {
    warn!(reason = %rejection, "alert rejected");
    (
        rejection.status(),
        Json(json!({ "error": rejection.to_string() })),
    )
        .into_response()
}

// POST /webhook
//
// The body is read untyped so the token is checked before anything about
// the payload's shape is reported.
pub async fn post_webhook(State(state): State<AppState>, body: Bytes) -> Response {
    let raw: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let token = raw.get("token").and_then(Value::as_str);
    if let Err(rejection) = alert_validator::authorize(token, &state.settings.webhook_token) {
        return rejected(rejection);
    }

    let alert: Alert = match serde_json::from_value(raw) {
        Ok(a) => a,
        Err(e) => {
            warn!(error = %e, "webhook body rejected");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid JSON body" })),
            )
                .into_response();
        }
    };

    let validated = match alert_validator::validate(&alert, &state.settings.webhook_token) {
        Ok(v) => v,
        Err(rejection) => return rejected(rejection),
    };

    let order = validated.into_order();

    match state.bitunix.place_order(&order).await {
        OrderResult::Success { order_id, .. } => {
            info!(symbol = %order.symbol, side = %order.side, %order_id, "Order placed successfully");
            (
                StatusCode::OK,
                Json(json!({ "status": "Order placed", "orderId": order_id })),
            )
                .into_response()
        }
        failure => {
            error!(symbol = %order.symbol, details = %failure, "Error processing webhook");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to place order",
                    "details": failure.to_string(),
                })),
            )
                .into_response()
        }
    }
}
