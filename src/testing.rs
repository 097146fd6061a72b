//! In-memory stand-in for the Site24x7 API used by unit tests

use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use async_trait::async_trait;
use reqwest::{Method, Url};
use serde_json::Value;

use crate::api::{
    errors::ApiError,
    rest::{HttpRequest, HttpResponse, HttpTransport},
    Site24x7Client,
};

pub const BASE_URL: &str = "https://www.site24x7.com/api";

type Route = (Method, String);

/// Replies with canned responses keyed by method and resource path. The last
/// queued response of a route is sticky so repeated calls keep succeeding.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<Route, VecDeque<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.push(method, path, HttpResponse::new(status, body.to_string()));
    }

    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        self.push(method, path, HttpResponse::new(status, body));
    }

    /// Wraps `data` into the success envelope.
    pub fn respond_data(&self, method: Method, path: &str, data: Value) {
        self.respond(
            method,
            path,
            200,
            serde_json::json!({"code": 0, "message": "success", "data": data}),
        );
    }

    pub fn push(&self, method: Method, path: &str, response: HttpResponse) {
        self.routes
            .lock()
            .expect("routes lock")
            .entry((method, path.to_string()))
            .or_default()
            .push_back(response);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests().pop()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == method && resource_path(&request.url) == path)
            .collect()
    }

    /// Decoded JSON body of the last request sent to `method path`.
    pub fn last_body(&self, method: Method, path: &str) -> Value {
        let request = self
            .requests_to(method.clone(), path)
            .pop()
            .unwrap_or_else(|| panic!("no {method} request to {path}"));
        serde_json::from_slice(request.body.as_deref().expect("request body"))
            .expect("json request body")
    }
}

fn resource_path(url: &str) -> String {
    let url = Url::parse(url).expect("valid request url");
    url.path()
        .trim_start_matches('/')
        .trim_start_matches("api/")
        .to_string()
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let route = (request.method.clone(), resource_path(&request.url));
        self.requests.lock().expect("requests lock").push(request);

        let mut routes = self.routes.lock().expect("routes lock");
        let queue = routes
            .get_mut(&route)
            .unwrap_or_else(|| panic!("unexpected request {} {}", route.0, route.1));
        let response = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        Ok(response.expect("queued response"))
    }
}

pub fn fake_client() -> (std::sync::Arc<FakeTransport>, Site24x7Client) {
    let transport = std::sync::Arc::new(FakeTransport::new());
    let client = Site24x7Client::with_transport(transport.clone(), BASE_URL, None);
    (transport, client)
}
