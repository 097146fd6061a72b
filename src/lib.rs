use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod logging;
pub mod plugin;
pub mod provider;

#[cfg(test)]
mod testing;

use api::Site24x7Client;
use provider::Provider;

#[derive(Clone)]
pub struct AppState {
    pub plugin_token: Arc<str>,
    pub provider: Arc<Provider>,
    /// Set by `provider/configure`.
    pub client: Arc<RwLock<Option<Site24x7Client>>>,
}

impl AppState {
    pub fn new(plugin_token: String, provider: Arc<Provider>) -> Self {
        Self {
            plugin_token: Arc::<str>::from(plugin_token),
            provider,
            client: Arc::new(RwLock::new(None)),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/plugin", post(http::handlers::plugin_endpoint))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer_token,
        ));

    Router::new()
        .route("/health", get(http::handlers::health))
        .route(
            "/.well-known/terraform-provider",
            get(http::handlers::discovery),
        )
        .merge(protected)
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use reqwest::Method;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::testing::{fake_client, FakeTransport};

    use super::*;

    const TOKEN: &str = "token-1234567890ab";

    fn state() -> AppState {
        AppState::new(TOKEN.to_string(), Arc::new(Provider::new()))
    }

    async fn configured_state() -> (Arc<FakeTransport>, AppState) {
        let state = state();
        let (transport, client) = fake_client();
        *state.client.write().await = Some(client);
        (transport, state)
    }

    fn plugin_request(body: Value) -> Request<Body> {
        Request::builder()
            .uri("/plugin")
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"))
            .body(Body::from(body.to_string()))
            .expect("request build")
    }

    async fn call(state: AppState, method: &str, params: Value) -> Value {
        let response = build_app(state)
            .oneshot(plugin_request(
                json!({"jsonrpc": "2.0", "id": 1, "method": method, "params": params}),
            ))
            .await
            .expect("request execution");

        assert_eq!(response.status(), StatusCode::OK);
        let body = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        serde_json::from_slice(&body).expect("valid json response")
    }

    #[tokio::test]
    async fn health_is_public() {
        let response = build_app(state())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .method("GET")
                    .body(Body::empty())
                    .expect("request build"),
            )
            .await
            .expect("request execution");

        assert_eq!(response.status(), StatusCode::OK);
        let body = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        assert_eq!(body, "{\"status\":\"ok\"}");
    }

    #[tokio::test]
    async fn discovery_is_public() {
        let response = build_app(state())
            .oneshot(
                Request::builder()
                    .uri("/.well-known/terraform-provider")
                    .method("GET")
                    .body(Body::empty())
                    .expect("request build"),
            )
            .await
            .expect("request execution");

        assert_eq!(response.status(), StatusCode::OK);
        let body = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        let body_json: Value = serde_json::from_slice(&body).expect("valid json response");
        assert_eq!(body_json["plugin_endpoint"], "/plugin");
        assert_eq!(body_json["name"], env!("CARGO_PKG_NAME"));
    }

    #[tokio::test]
    async fn plugin_requires_token() {
        let response = build_app(state())
            .oneshot(
                Request::builder()
                    .uri("/plugin")
                    .method("POST")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#))
                    .expect("request build"),
            )
            .await
            .expect("request execution");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn plugin_rejects_wrong_token() {
        let response = build_app(state())
            .oneshot(
                Request::builder()
                    .uri("/plugin")
                    .method("POST")
                    .header(header::AUTHORIZATION, "Bearer nope")
                    .body(Body::from(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#))
                    .expect("request build"),
            )
            .await
            .expect("request execution");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_method_returns_method_not_found() {
        let body = call(state(), "tools/list", json!({})).await;

        assert_eq!(
            body,
            json!({"jsonrpc": "2.0", "id": 1, "error": {"code": -32601, "message": "Method not found"}})
        );
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let response = build_app(state())
            .oneshot(
                Request::builder()
                    .uri("/plugin")
                    .method("POST")
                    .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"))
                    .body(Body::from("{not json"))
                    .expect("request build"),
            )
            .await
            .expect("request execution");

        let body = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        let body_json: Value = serde_json::from_slice(&body).expect("valid json response");
        assert_eq!(body_json["error"]["code"], -32700);
    }

    #[tokio::test]
    async fn initialize_reports_server_info() {
        let body = call(state(), "initialize", json!({})).await;

        assert_eq!(body["result"]["serverInfo"]["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(body["result"]["serverInfo"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["result"]["protocolVersion"].is_string());
    }

    #[tokio::test]
    async fn get_schema_lists_resources_and_data_sources() {
        let body = call(state(), "provider/getSchema", json!({})).await;

        assert!(body["result"]["provider"]["oauth2_client_id"].is_object());
        assert!(body["result"]["resource_schemas"]["site24x7_website_monitor"].is_object());
        assert!(body["result"]["data_source_schemas"]["site24x7_monitors"].is_object());
    }

    #[tokio::test]
    async fn resource_calls_need_a_configured_provider() {
        let body = call(
            state(),
            "resource/read",
            json!({"type_name": "site24x7_tag", "id": "1"}),
        )
        .await;

        assert_eq!(body["error"]["code"], -32000);
        assert_eq!(body["error"]["data"]["message"], "provider is not configured");
    }

    #[tokio::test]
    async fn configure_stores_a_client() {
        let state = state();
        let body = call(
            state.clone(),
            "provider/configure",
            json!({"config": {
                "oauth2_client_id": "id",
                "oauth2_client_secret": "secret",
                "oauth2_refresh_token": "refresh",
                "oauth2_access_token": "access",
                "access_token_expiry": "3600",
                "data_center": "US"
            }}),
        )
        .await;

        assert_eq!(body["result"], json!({}));
        assert!(state.client.read().await.is_some());
    }

    #[tokio::test]
    async fn configure_rejects_unknown_data_center() {
        let state = state();
        let body = call(
            state.clone(),
            "provider/configure",
            json!({"config": {
                "oauth2_client_id": "id",
                "oauth2_client_secret": "secret",
                "oauth2_refresh_token": "refresh",
                "data_center": "MARS"
            }}),
        )
        .await;

        assert_eq!(body["error"]["code"], -32602);
        assert!(state.client.read().await.is_none());
    }

    #[tokio::test]
    async fn unknown_resource_type_is_invalid_params() {
        let (_transport, state) = configured_state().await;

        let body = call(
            state,
            "resource/create",
            json!({"type_name": "site24x7_bogus", "config": {}}),
        )
        .await;

        assert_eq!(body["error"]["code"], -32602);
        assert_eq!(
            body["error"]["data"]["message"],
            "unknown resource type \"site24x7_bogus\""
        );
    }

    #[tokio::test]
    async fn validate_reports_missing_required_fields() {
        let body = call(
            state(),
            "resource/validate",
            json!({"type_name": "site24x7_tag", "config": {"tag_name": "env"}}),
        )
        .await;

        assert_eq!(body["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn create_returns_id_and_state() {
        let (transport, state) = configured_state().await;
        transport.respond_data(
            Method::POST,
            "tags",
            json!({"tag_id": "t1", "tag_name": "env", "tag_value": "prod", "tag_type": 1, "tag_color": "#B7DA9E"}),
        );

        let body = call(
            state,
            "resource/create",
            json!({"type_name": "site24x7_tag", "config": {
                "tag_name": "env",
                "tag_value": "prod",
                "tag_color": "#B7DA9E"
            }}),
        )
        .await;

        assert_eq!(body["result"]["id"], "t1");
        assert_eq!(body["result"]["state"]["tag_type"], 1);
        assert_eq!(transport.last_body(Method::POST, "tags")["tag_name"], "env");
    }

    #[tokio::test]
    async fn exists_is_false_for_missing_objects() {
        let (transport, state) = configured_state().await;
        transport.respond(
            Method::GET,
            "tags/t9",
            404,
            json!({"code": 404, "message": "not found"}),
        );

        let body = call(
            state,
            "resource/exists",
            json!({"type_name": "site24x7_tag", "id": "t9"}),
        )
        .await;

        assert_eq!(body["result"], json!({"exists": false}));
    }

    #[tokio::test]
    async fn import_reads_the_remote_object() {
        let (transport, state) = configured_state().await;
        transport.respond_data(
            Method::GET,
            "tags/t1",
            json!({"tag_id": "t1", "tag_name": "env", "tag_value": "prod", "tag_type": 1, "tag_color": "#B7DA9E"}),
        );

        let body = call(
            state,
            "resource/import",
            json!({"type_name": "site24x7_tag", "id": "t1"}),
        )
        .await;

        assert_eq!(body["result"]["id"], "t1");
        assert_eq!(body["result"]["state"]["tag_value"], "prod");
    }

    #[tokio::test]
    async fn data_source_read_passes_no_match_message_through() {
        let (transport, state) = configured_state().await;
        transport.respond_data(Method::GET, "tags", json!([]));

        let body = call(
            state,
            "dataSource/read",
            json!({"type_name": "site24x7_tag", "config": {"tag_name_regex": "env"}}),
        )
        .await;

        assert_eq!(body["error"]["code"], -32000);
        assert_eq!(
            body["error"]["data"]["message"],
            "Unable to find tag matching the name : \"env"
        );
    }

    #[tokio::test]
    async fn notification_returns_no_content() {
        let response = build_app(state())
            .oneshot(plugin_request(json!({"jsonrpc": "2.0", "method": "ping"})))
            .await
            .expect("request execution");

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn batch_replies_in_order() {
        let response = build_app(state())
            .oneshot(plugin_request(json!([
                {"jsonrpc": "2.0", "id": 1, "method": "ping"},
                {"jsonrpc": "2.0", "method": "ping"},
                {"jsonrpc": "2.0", "id": 2, "method": "nope"}
            ])))
            .await
            .expect("request execution");

        let body = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        let body_json: Value = serde_json::from_slice(&body).expect("valid json response");
        assert_eq!(body_json[0]["id"], 1);
        assert_eq!(body_json[0]["result"], json!({}));
        assert_eq!(body_json[1]["error"]["code"], -32601);
        assert_eq!(body_json.as_array().map(Vec::len), Some(2));
    }
}
