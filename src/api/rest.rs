//! Thin REST layer over the Site24x7 API
//!
//! Builds requests against `base_url/resource[/id]`, attaches the default
//! headers and the MSP cookie, and decodes the `{code, message, data}`
//! envelope or the `{error_code, message, error_info}` error body.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::api::errors::ApiError;

pub const ACCEPT: &str = "application/json; version=2.1";
pub const USER_AGENT: &str = "S24x7TerraformProvider/1.0.0";
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .rev()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Sends a fully built request. Implementations decide about authentication
/// and retries; the REST layer only interprets the reply.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error_code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    error_info: Option<Map<String, Value>>,
}

#[derive(Clone)]
pub struct RestClient {
    transport: Arc<dyn HttpTransport>,
    base_url: Arc<str>,
    zaaid: Option<Arc<str>>,
}

impl RestClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: impl Into<String>,
        zaaid: Option<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            transport,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            zaaid: zaaid
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(Arc::from),
        }
    }

    pub fn get(&self) -> Request<'_> {
        Request::new(self, Method::GET)
    }

    pub fn post(&self) -> Request<'_> {
        Request::new(self, Method::POST)
    }

    pub fn put(&self) -> Request<'_> {
        Request::new(self, Method::PUT)
    }

    pub fn delete(&self) -> Request<'_> {
        Request::new(self, Method::DELETE)
    }
}

pub struct Request<'a> {
    client: &'a RestClient,
    method: Method,
    resource: String,
    resource_id: Option<String>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    err: Option<ApiError>,
}

impl<'a> Request<'a> {
    fn new(client: &'a RestClient, method: Method) -> Self {
        let mut request = Self {
            client,
            method,
            resource: String::new(),
            resource_id: None,
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            err: None,
        };
        request = request
            .add_header("Accept", ACCEPT)
            .add_header("User-Agent", USER_AGENT);
        if let Some(zaaid) = client.zaaid.as_deref() {
            request = request.add_header("Cookie", &format!("zaaid={zaaid}"));
        }
        request
    }

    pub fn resource(mut self, resource: &str) -> Self {
        self.resource = resource.to_string();
        self
    }

    pub fn resource_id(mut self, resource_id: &str) -> Self {
        if !resource_id.is_empty() {
            self.resource_id = Some(resource_id.to_string());
        }
        self
    }

    pub fn query_param(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn add_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    /// Replaces any header with the same name instead of appending.
    pub fn set_header(mut self, key: &str, value: &str) -> Self {
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(key));
        self.add_header(key, value)
    }

    pub fn body<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => self.body = Some(body),
            Err(err) => self.err = Some(ApiError::Decode(err)),
        }
        self
    }

    fn build_url(&self) -> Result<String, ApiError> {
        let mut raw_url = format!("{}/{}", self.client.base_url, self.resource);
        if let Some(resource_id) = &self.resource_id {
            raw_url.push('/');
            raw_url.push_str(resource_id);
        }

        let mut url = Url::parse(&raw_url).map_err(|_| ApiError::InvalidUrl {
            url: raw_url.clone(),
        })?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url.to_string())
    }

    pub async fn send(self) -> Result<Response, ApiError> {
        if let Some(err) = self.err {
            return Err(err);
        }

        let request = HttpRequest {
            url: self.build_url()?,
            method: self.method,
            headers: self.headers,
            body: self.body,
        };

        debug!(
            method = %request.method,
            url = %request.url,
            accept = request.header("Accept").unwrap_or_default(),
            body = %String::from_utf8_lossy(request.body.as_deref().unwrap_or_default()),
            "api request"
        );

        let response = self.client.transport.execute(request).await?;

        debug!(
            status = response.status,
            body = %String::from_utf8_lossy(&response.body),
            "api response"
        );

        if response.status > 0 && response.status < 400 {
            return Ok(Response {
                body: response.body,
            });
        }

        Err(status_error(response.status, &response.body))
    }
}

pub fn status_error(status: u16, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => ApiError::extended_status(
            status,
            envelope.message,
            envelope.error_code,
            envelope.error_info.unwrap_or_default(),
        ),
        Err(err) => {
            let body = String::from_utf8_lossy(body);
            error!(body = %body, error = %err, "received bad error response body");
            ApiError::status(status, format!("server replied with: {body}"))
        }
    }
}

#[derive(Debug)]
pub struct Response {
    body: Vec<u8>,
}

impl Response {
    /// Decodes the `data` member of the response envelope into `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let envelope: Envelope = serde_json::from_slice(&self.body)?;
        Ok(serde_json::from_value(envelope.data)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::FakeTransport;

    fn client(transport: Arc<FakeTransport>, zaaid: Option<&str>) -> RestClient {
        RestClient::new(
            transport,
            "https://www.site24x7.com/api/",
            zaaid.map(str::to_string),
        )
    }

    #[tokio::test]
    async fn builds_resource_urls_with_default_headers() {
        let transport = Arc::new(FakeTransport::new());
        transport.respond(Method::GET, "monitors/123", 200, json!({"code": 0, "data": {}}));

        client(transport.clone(), None)
            .get()
            .resource("monitors")
            .resource_id("123")
            .send()
            .await
            .expect("request succeeds");

        let request = transport.last_request().expect("request recorded");
        assert_eq!(request.url, "https://www.site24x7.com/api/monitors/123");
        assert_eq!(request.header("Accept"), Some(ACCEPT));
        assert_eq!(request.header("User-Agent"), Some(USER_AGENT));
        assert_eq!(request.header("Cookie"), None);
    }

    #[tokio::test]
    async fn msp_requests_carry_zaaid_cookie() {
        let transport = Arc::new(FakeTransport::new());
        transport.respond(Method::GET, "monitors", 200, json!({"code": 0, "data": []}));

        client(transport.clone(), Some("778899"))
            .get()
            .resource("monitors")
            .send()
            .await
            .expect("request succeeds");

        let request = transport.last_request().expect("request recorded");
        assert_eq!(request.header("Cookie"), Some("zaaid=778899"));
    }

    #[tokio::test]
    async fn encodes_query_parameters() {
        let transport = Arc::new(FakeTransport::new());
        transport.respond(Method::GET, "current_status", 200, json!({"data": {}}));

        client(transport.clone(), None)
            .get()
            .resource("current_status")
            .query_param("status_required", "0,2")
            .send()
            .await
            .expect("request succeeds");

        let request = transport.last_request().expect("request recorded");
        assert_eq!(
            request.url,
            "https://www.site24x7.com/api/current_status?status_required=0%2C2"
        );
    }

    #[tokio::test]
    async fn parses_data_member_of_envelope() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Thing {
            name: String,
        }

        let transport = Arc::new(FakeTransport::new());
        transport.respond(
            Method::GET,
            "things",
            200,
            json!({"code": 0, "message": "success", "data": {"name": "foo"}}),
        );

        let thing: Thing = client(transport, None)
            .get()
            .resource("things")
            .send()
            .await
            .expect("request succeeds")
            .parse()
            .expect("valid envelope");

        assert_eq!(thing, Thing { name: "foo".to_string() });
    }

    #[tokio::test]
    async fn structured_error_body_becomes_extended_status_error() {
        let transport = Arc::new(FakeTransport::new());
        transport.respond(
            Method::GET,
            "monitors/1",
            404,
            json!({"error_code": 101, "message": "monitor not found", "error_info": {"id": "1"}}),
        );

        let err = client(transport, None)
            .get()
            .resource("monitors")
            .resource_id("1")
            .send()
            .await
            .expect_err("404 must fail");

        assert!(err.is_not_found());
        assert_eq!(err.error_code(), Some(101));
        assert_eq!(err.to_string(), "monitor not found");
    }

    #[tokio::test]
    async fn unparsable_error_body_is_reported_verbatim() {
        let transport = Arc::new(FakeTransport::new());
        transport.respond_raw(Method::DELETE, "monitors/1", 502, "bad gateway");

        let err = client(transport, None)
            .delete()
            .resource("monitors")
            .resource_id("1")
            .send()
            .await
            .expect_err("502 must fail");

        assert!(!err.is_extended_status_error());
        assert_eq!(err.status_code(), Some(502));
        assert_eq!(err.to_string(), "server replied with: bad gateway");
    }

    #[test]
    fn set_header_replaces_existing_values() {
        let transport = Arc::new(FakeTransport::new());
        let client = client(transport, None);
        let request = client
            .get()
            .set_header("Accept", "application/json; version=2");

        let accepts = request
            .headers
            .iter()
            .filter(|(key, _)| key == "Accept")
            .count();
        assert_eq!(accepts, 1);
        assert_eq!(
            find_header(&request.headers, "accept"),
            Some("application/json; version=2")
        );
    }
}
