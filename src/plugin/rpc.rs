//! JSON-RPC envelopes and error mapping

use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;

pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;
pub const PARSE_ERROR: i32 = -32700;
pub const PROVIDER_ERROR: i32 = -32000;
pub const UNAUTHORIZED: i32 = -32001;

/// A request or notification. Notifications carry no id.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn is_valid(&self) -> bool {
        self.jsonrpc == "2.0"
            && !self.method.trim().is_empty()
            && self.id.as_ref().map_or(true, is_valid_id)
            && self
                .params
                .as_ref()
                .map_or(true, |params| params.is_object() || params.is_null())
    }
}

fn is_valid_id(id: &Value) -> bool {
    id.is_string() || id.is_i64() || id.is_u64()
}

pub fn is_json_rpc_error(value: &Value) -> bool {
    value.get("error").is_some()
}

pub fn app_error_to_json_rpc(id: Option<Value>, err: AppError) -> Value {
    match err {
        AppError::BadRequest { code, message } => json_rpc_error_with_data(
            id,
            INVALID_PARAMS,
            "Invalid params",
            Some(json!({ "code": code, "message": message })),
        ),
        AppError::Unauthorized { code, message } => json_rpc_error_with_data(
            id,
            UNAUTHORIZED,
            "Unauthorized",
            Some(json!({ "code": code, "message": message })),
        ),
        AppError::Provider(err) if err.is_invalid_input() => json_rpc_error_with_data(
            id,
            INVALID_PARAMS,
            "Invalid params",
            Some(json!({ "code": "invalid_input", "message": err.to_string() })),
        ),
        AppError::Provider(err) => json_rpc_error_with_data(
            id,
            PROVIDER_ERROR,
            "Provider error",
            Some(json!({ "code": "provider_error", "message": err.to_string() })),
        ),
        AppError::Internal { message, .. } => {
            tracing::error!(error = %message, "plugin call failed with internal error");
            json_rpc_error(id, INTERNAL_ERROR, "Internal error")
        }
    }
}

pub fn json_rpc_error(id: Option<Value>, code: i32, message: &str) -> Value {
    json_rpc_error_with_data(id, code, message, None)
}

pub fn json_rpc_error_with_data(
    id: Option<Value>,
    code: i32,
    message: &str,
    data: Option<Value>,
) -> Value {
    let mut error = json!({ "code": code, "message": message });
    if let Some(data) = data {
        error["data"] = data;
    }

    json!({
        "jsonrpc": "2.0",
        "id": id.unwrap_or(Value::Null),
        "error": error
    })
}

pub fn json_rpc_result(id: Option<Value>, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id.unwrap_or(Value::Null),
        "result": result
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderError;

    #[test]
    fn provider_message_is_passed_through() {
        let err = AppError::from(ProviderError::not_found(
            "Unable to find tag matching the name : \"env",
        ));

        let response = app_error_to_json_rpc(Some(json!(4)), err);

        assert_eq!(response["id"], 4);
        assert_eq!(response["error"]["code"], PROVIDER_ERROR);
        assert_eq!(response["error"]["message"], "Provider error");
        assert_eq!(
            response["error"]["data"]["message"],
            "Unable to find tag matching the name : \"env"
        );
    }

    #[test]
    fn validation_errors_are_invalid_params() {
        let err = AppError::from(ProviderError::Validation("tag_name is required".into()));

        let response = app_error_to_json_rpc(Some(json!("a")), err);

        assert_eq!(response["error"]["code"], INVALID_PARAMS);
        assert_eq!(response["error"]["data"]["message"], "tag_name is required");
    }

    #[test]
    fn request_shape_is_checked() {
        let valid: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "method": "ping"}))
                .expect("request");
        let wrong_version: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "1.0", "id": 1, "method": "ping"}))
                .expect("request");
        let array_params: JsonRpcRequest = serde_json::from_value(
            json!({"jsonrpc": "2.0", "id": 1, "method": "ping", "params": [1]}),
        )
        .expect("request");

        assert!(valid.is_valid());
        assert!(!wrong_version.is_valid());
        assert!(!array_params.is_valid());
    }
}
