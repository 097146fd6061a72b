//! Plugin method dispatch
//!
//! Resource calls carry `{type_name, id?, config}` and answer with the
//! resulting `{id, state}`. Everything except `initialize`, `ping` and the
//! provider methods needs a client stored by `provider/configure`.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    api::Site24x7Client,
    errors::AppError,
    logging::audit_plugin_call,
    plugin::rpc::{
        app_error_to_json_rpc, is_json_rpc_error, json_rpc_error, json_rpc_result, JsonRpcRequest,
        INVALID_REQUEST, METHOD_NOT_FOUND,
    },
    provider::{resource_data::ResourceData, ProviderError},
    AppState,
};

pub const PLUGIN_PROTOCOL_VERSION: &str = "1.0";

#[derive(Debug, Deserialize)]
struct ConfigureParams {
    #[serde(default)]
    config: Value,
}

#[derive(Debug, Deserialize)]
struct TypedParams {
    type_name: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    config: Value,
}

impl TypedParams {
    fn id(&self) -> Result<&str, AppError> {
        self.id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::bad_request("missing_id", "params.id is required"))
    }
}

fn parse_params<T: for<'de> Deserialize<'de>>(params: Option<Value>) -> Result<T, AppError> {
    serde_json::from_value(params.unwrap_or_else(|| json!({})))
        .map_err(|err| AppError::bad_request("invalid_params", err.to_string()))
}

fn resource_reply(d: &ResourceData) -> Value {
    json!({ "id": d.id(), "state": d.state() })
}

pub async fn handle_json_rpc_value(state: &AppState, payload: Value) -> Option<Value> {
    if !payload.is_object() {
        return Some(json_rpc_error(None, INVALID_REQUEST, "Invalid Request"));
    }

    let request_id = payload.get("id").cloned();
    let request: JsonRpcRequest = match serde_json::from_value(payload) {
        Ok(request) => request,
        Err(_) => return Some(json_rpc_error(request_id, INVALID_REQUEST, "Invalid Request")),
    };

    if !request.is_valid() {
        return match request.id {
            Some(id) => Some(json_rpc_error(Some(id), INVALID_REQUEST, "Invalid Request")),
            None => None,
        };
    }

    let response =
        handle_json_rpc_request(state, request.id.clone(), &request.method, request.params).await;
    request.id.map(|_| response)
}

pub async fn handle_json_rpc_request(
    state: &AppState,
    id: Option<Value>,
    method: &str,
    params: Option<Value>,
) -> Value {
    let audit_params = redact_audit_params(params.as_ref());
    let type_name = params
        .as_ref()
        .and_then(|params| params.get("type_name"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let response = match dispatch(state, method, params).await {
        Ok(Some(result)) => json_rpc_result(id, result),
        Ok(None) => json_rpc_error(id, METHOD_NOT_FOUND, "Method not found"),
        Err(err) => app_error_to_json_rpc(id, err),
    };

    audit_plugin_call(
        method,
        type_name.as_deref(),
        &audit_params,
        is_json_rpc_error(&response),
    );
    response
}

/// `Ok(None)` for an unknown method.
async fn dispatch(
    state: &AppState,
    method: &str,
    params: Option<Value>,
) -> Result<Option<Value>, AppError> {
    let result = match method {
        "initialize" => json!({
            "protocolVersion": PLUGIN_PROTOCOL_VERSION,
            "serverInfo": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
            },
        }),
        "ping" => json!({}),
        "provider/getSchema" => state.provider.schema_descriptor(),
        "provider/configure" => {
            let params: ConfigureParams = parse_params(params)?;
            let client = state.provider.configure(&params.config)?;
            *state.client.write().await = Some(client);
            json!({})
        }
        "resource/validate" => {
            let params: TypedParams = parse_params(params)?;
            let resource = state.provider.resource(&params.type_name)?;
            ResourceData::from_config(resource.schema(), &params.config)?;
            json!({ "valid": true })
        }
        "resource/create" => {
            let params: TypedParams = parse_params(params)?;
            let resource = state.provider.resource(&params.type_name)?;
            let client = configured_client(state).await?;
            let mut d = ResourceData::from_config(resource.schema(), &params.config)?;
            resource.create(&client, &mut d).await?;
            resource_reply(&d)
        }
        "resource/read" => {
            let params: TypedParams = parse_params(params)?;
            let resource = state.provider.resource(&params.type_name)?;
            let client = configured_client(state).await?;
            let mut d = ResourceData::with_id(params.id()?);
            resource.read(&client, &mut d).await?;
            resource_reply(&d)
        }
        "resource/update" => {
            let params: TypedParams = parse_params(params)?;
            let resource = state.provider.resource(&params.type_name)?;
            let client = configured_client(state).await?;
            let mut d = ResourceData::from_config(resource.schema(), &params.config)?;
            d.set_id(params.id()?);
            resource.update(&client, &mut d).await?;
            resource_reply(&d)
        }
        "resource/delete" => {
            let params: TypedParams = parse_params(params)?;
            let resource = state.provider.resource(&params.type_name)?;
            let client = configured_client(state).await?;
            resource
                .delete(&client, &ResourceData::with_id(params.id()?))
                .await?;
            json!({})
        }
        "resource/exists" => {
            let params: TypedParams = parse_params(params)?;
            let resource = state.provider.resource(&params.type_name)?;
            let client = configured_client(state).await?;
            let exists = resource
                .exists(&client, &ResourceData::with_id(params.id()?))
                .await?;
            json!({ "exists": exists })
        }
        "resource/import" => {
            let params: TypedParams = parse_params(params)?;
            let resource = state.provider.resource(&params.type_name)?;
            let client = configured_client(state).await?;
            let d = resource.import(&client, params.id()?).await?;
            resource_reply(&d)
        }
        "dataSource/read" => {
            let params: TypedParams = parse_params(params)?;
            let data_source = state.provider.data_source(&params.type_name)?;
            let client = configured_client(state).await?;
            let mut d = ResourceData::from_config(data_source.schema(), &params.config)?;
            data_source.read(&client, &mut d).await?;
            resource_reply(&d)
        }
        _ => return Ok(None),
    };

    Ok(Some(result))
}

async fn configured_client(state: &AppState) -> Result<Site24x7Client, ProviderError> {
    state
        .client
        .read()
        .await
        .clone()
        .ok_or(ProviderError::NotConfigured)
}

pub fn redact_audit_params(params: Option<&Value>) -> Value {
    params.map(redact_audit_value).unwrap_or(Value::Null)
}

pub fn redact_audit_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| {
                    if is_sensitive_key(key) {
                        (key.clone(), Value::String("[REDACTED]".to_string()))
                    } else {
                        (key.clone(), redact_audit_value(item))
                    }
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(redact_audit_value).collect()),
        _ => value.clone(),
    }
}

pub fn is_sensitive_key(key: &str) -> bool {
    let normalized = key.trim().to_ascii_lowercase();
    matches!(normalized.as_str(), "authorization" | "api_key" | "apikey")
        || ["token", "secret", "password", "credential", "private_key"]
            .iter()
            .any(|fragment| normalized.contains(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_credentials_in_provider_config() {
        let params = json!({
            "config": {
                "oauth2_client_id": "client",
                "oauth2_client_secret": "should-not-appear",
                "oauth2_refresh_token": "should-not-appear",
                "data_center": "US",
                "headers": [{"password": "should-not-appear"}],
                "gcp": {"private_key": "should-not-appear"}
            }
        });

        let redacted = redact_audit_params(Some(&params));

        assert_eq!(redacted["config"]["oauth2_client_id"], json!("client"));
        assert_eq!(redacted["config"]["data_center"], json!("US"));
        assert_eq!(redacted["config"]["oauth2_client_secret"], json!("[REDACTED]"));
        assert_eq!(redacted["config"]["oauth2_refresh_token"], json!("[REDACTED]"));
        assert_eq!(redacted["config"]["headers"][0]["password"], json!("[REDACTED]"));
        assert_eq!(redacted["config"]["gcp"]["private_key"], json!("[REDACTED]"));
    }

    #[test]
    fn missing_id_is_invalid_params() {
        let params: TypedParams =
            parse_params(Some(json!({"type_name": "site24x7_tag", "id": " "}))).expect("params");

        let err = params.id().expect_err("blank id");

        assert!(matches!(err, AppError::BadRequest { code: "missing_id", .. }));
    }

    #[test]
    fn type_name_is_required() {
        let err = parse_params::<TypedParams>(Some(json!({"id": "1"}))).expect_err("no type");

        assert!(matches!(err, AppError::BadRequest { code: "invalid_params", .. }));
    }
}
