use bitunix_relay::config::BitunixConfig;
use bitunix_relay::models::{OrderRequest, OrderResult, Side};
use bitunix_relay::services::bitunix::{BitunixClient, PLACE_ORDER_PATH};
use bitunix_relay::services::signature::generate_signature;
use serde_json::json;
use wiremock::matchers::{body_string, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";
const SECRET: &str = "test-secret-key";

fn client_for(base_url: &str) -> BitunixClient {
    BitunixClient::new(BitunixConfig {
        api_key: API_KEY.to_string(),
        secret_key: SECRET.to_string(),
        base_url: base_url.to_string(),
    })
}

fn btc_order() -> OrderRequest {
    OrderRequest::open_market("BTCUSDT", Side::Buy, "0.001")
}

fn header_str<'a>(req: &'a wiremock::Request, name: &str) -> &'a str {
    req.headers.get(name).unwrap().to_str().unwrap()
}

#[tokio::test]
async fn place_order_success_returns_order_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PLACE_ORDER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "Success",
            "data": { "orderId": "X", "clientId": "client-7" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server.uri()).place_order(&btc_order()).await;

    assert_eq!(
        result,
        OrderResult::Success {
            order_id: "X".into(),
            client_id: Some("client-7".into()),
        }
    );
}

#[tokio::test]
async fn place_order_sends_signed_headers_and_canonical_body() {
    let server = MockServer::start().await;
    let expected_body =
        r#"{"symbol":"BTCUSDT","qty":"0.001","side":"BUY","tradeSide":"OPEN","orderType":"MARKET"}"#;

    Mock::given(method("POST"))
        .and(path(PLACE_ORDER_PATH))
        .and(header("api-key", API_KEY))
        .and(header("content-type", "application/json"))
        .and(header_exists("nonce"))
        .and(header_exists("timestamp"))
        .and(header_exists("sign"))
        .and(body_string(expected_body))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "code": 0, "data": { "orderId": "1" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server.uri()).place_order(&btc_order()).await;
    assert!(result.is_success());

    let received = server.received_requests().await.unwrap();
    let req = &received[0];
    let nonce = header_str(req, "nonce");
    let timestamp = header_str(req, "timestamp");
    let body = std::str::from_utf8(&req.body).unwrap();

    assert_eq!(nonce.len(), 32);
    assert!(timestamp.parse::<i64>().is_ok());
    assert_eq!(
        header_str(req, "sign"),
        generate_signature(nonce, timestamp, API_KEY, "", body, SECRET)
    );
}

#[tokio::test]
async fn each_call_uses_a_fresh_nonce() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PLACE_ORDER_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "code": 0, "data": { "orderId": "1" } })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    client.place_order(&btc_order()).await;
    client.place_order(&btc_order()).await;

    let received = server.received_requests().await.unwrap();
    assert_ne!(header_str(&received[0], "nonce"), header_str(&received[1], "nonce"));
    assert_ne!(header_str(&received[0], "sign"), header_str(&received[1], "sign"));
}

#[tokio::test]
async fn non_zero_code_is_broker_error_with_message_and_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PLACE_ORDER_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "code": 5, "msg": "Insufficient balance" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server.uri()).place_order(&btc_order()).await;

    let OrderResult::BrokerError(msg) = result else {
        panic!("expected broker error, got {result:?}");
    };
    assert!(msg.contains("Insufficient balance"));
    assert!(msg.contains('5'));
}

#[tokio::test]
async fn http_error_uses_broker_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PLACE_ORDER_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "code": 10003, "msg": "Signature error" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server.uri()).place_order(&btc_order()).await;

    assert_eq!(
        result,
        OrderResult::BrokerError("Signature error (code: 10003)".into())
    );
}

#[tokio::test]
async fn malformed_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PLACE_ORDER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server.uri()).place_order(&btc_order()).await;

    assert!(matches!(result, OrderResult::TransportError(_)));
}

#[tokio::test]
async fn unreachable_broker_is_transport_error() {
    // nothing listens on port 1
    let result = client_for("http://127.0.0.1:1").place_order(&btc_order()).await;

    let OrderResult::TransportError(msg) = &result else {
        panic!("expected transport error, got {result:?}");
    };
    assert!(!msg.is_empty());
    assert!(result.to_string().starts_with("Bitunix request failed"));
}
