//! Retry policy for Site24x7 API requests
//!
//! Connection failures, throttling (429) and server errors other than 501 are
//! retried with capped exponential backoff. A `Retry-After` header in seconds
//! takes precedence over the computed wait.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::api::{
    errors::ApiError,
    rest::{HttpRequest, HttpResponse, HttpTransport},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    pub min_wait: Duration,
    pub max_wait: Duration,
    pub max_retries: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            min_wait: Duration::from_secs(1),
            max_wait: Duration::from_secs(30),
            max_retries: 4,
        }
    }
}

impl RetryConfig {
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.min_wait.is_zero() {
            self.min_wait = defaults.min_wait;
        }
        if self.max_wait.is_zero() {
            self.max_wait = defaults.max_wait;
        }
        self
    }
}

pub fn is_retryable_status(status: u16) -> bool {
    status == 0 || status == 429 || (status >= 500 && status != 501)
}

pub fn should_retry(result: &Result<HttpResponse, ApiError>) -> bool {
    match result {
        Ok(response) => is_retryable_status(response.status),
        Err(ApiError::Transport { .. }) => true,
        Err(_) => false,
    }
}

pub fn retry_after(response: Option<&HttpResponse>) -> Option<Duration> {
    response
        .and_then(|response| response.header("Retry-After"))
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Wait before retry number `attempt` (zero based).
pub fn backoff(config: &RetryConfig, attempt: u32, response: Option<&HttpResponse>) -> Duration {
    if let Some(wait) = retry_after(response).filter(|wait| !wait.is_zero()) {
        return wait.min(config.max_wait);
    }

    2u32.checked_pow(attempt)
        .and_then(|factor| config.min_wait.checked_mul(factor))
        .map_or(config.max_wait, |wait| wait.min(config.max_wait))
}

pub struct RetryTransport<T> {
    inner: T,
    config: RetryConfig,
}

impl<T: HttpTransport> RetryTransport<T> {
    pub fn new(inner: T, config: RetryConfig) -> Self {
        Self {
            inner,
            config: config.with_defaults(),
        }
    }
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for RetryTransport<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let attempts = self.config.max_retries + 1;
        let mut attempt = 0;

        loop {
            let result = self.inner.execute(request.clone()).await;
            attempt += 1;

            if !should_retry(&result) {
                return result;
            }

            if attempt >= attempts {
                return match result {
                    Ok(response) => Ok(response),
                    Err(err) => Err(ApiError::RetriesExhausted {
                        attempts: attempt,
                        source: Box::new(err),
                    }),
                };
            }

            let wait = backoff(&self.config, attempt - 1, result.as_ref().ok());
            match &result {
                Ok(response) => warn!(
                    method = %request.method,
                    url = %request.url,
                    status = response.status,
                    attempt,
                    wait_ms = wait.as_millis() as u64,
                    "retrying api request"
                ),
                Err(err) => warn!(
                    method = %request.method,
                    url = %request.url,
                    error = %err,
                    attempt,
                    wait_ms = wait.as_millis() as u64,
                    "retrying api request"
                ),
            }
            tokio::time::sleep(wait).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    };

    use reqwest::Method;

    use super::*;

    struct Scripted {
        statuses: Vec<u16>,
        calls: Arc<AtomicU32>,
    }

    #[async_trait]
    impl HttpTransport for Scripted {
        async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) as usize;
            let status = self.statuses[call.min(self.statuses.len() - 1)];
            Ok(HttpResponse::new(status, "{}"))
        }
    }

    // Connects to a port that was just released, so every call fails to connect.
    struct Unreachable {
        url: String,
        calls: Arc<AtomicU32>,
    }

    impl Unreachable {
        async fn new(calls: Arc<AtomicU32>) -> Self {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind");
            let addr = listener.local_addr().expect("local addr");
            drop(listener);
            Self {
                url: format!("http://{addr}/api/monitors"),
                calls,
            }
        }
    }

    #[async_trait]
    impl HttpTransport for Unreachable {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let source = reqwest::Client::new()
                .get(&self.url)
                .send()
                .await
                .expect_err("nothing listens on the port");
            Err(ApiError::Transport {
                method: request.method.to_string(),
                url: self.url.clone(),
                source,
            })
        }
    }

    fn fast_config(max_retries: u32) -> RetryConfig {
        RetryConfig {
            min_wait: Duration::from_millis(1),
            max_wait: Duration::from_millis(5),
            max_retries,
        }
    }

    fn request() -> HttpRequest {
        HttpRequest {
            method: Method::GET,
            url: "https://www.site24x7.com/api/monitors".to_string(),
            headers: vec![],
            body: None,
        }
    }

    #[test]
    fn retry_policy_matches_throttling_and_server_errors() {
        for status in [0, 429, 500, 502, 503, 504] {
            assert!(is_retryable_status(status), "{status} should retry");
        }
        for status in [200, 201, 400, 401, 404, 501] {
            assert!(!is_retryable_status(status), "{status} should not retry");
        }
    }

    #[test]
    fn backoff_grows_exponentially_up_to_max_wait() {
        let config = RetryConfig::default();

        assert_eq!(backoff(&config, 0, None), Duration::from_secs(1));
        assert_eq!(backoff(&config, 1, None), Duration::from_secs(2));
        assert_eq!(backoff(&config, 3, None), Duration::from_secs(8));
        assert_eq!(backoff(&config, 5, None), Duration::from_secs(30));
        assert_eq!(backoff(&config, 64, None), Duration::from_secs(30));
    }

    #[test]
    fn retry_after_header_overrides_backoff_but_is_capped() {
        let config = RetryConfig::default();
        let throttled = HttpResponse::new(429, "").with_header("Retry-After", "7");
        let too_long = HttpResponse::new(429, "").with_header("Retry-After", "120");
        let garbage = HttpResponse::new(429, "").with_header("Retry-After", "soon");

        assert_eq!(backoff(&config, 0, Some(&throttled)), Duration::from_secs(7));
        assert_eq!(backoff(&config, 0, Some(&too_long)), Duration::from_secs(30));
        assert_eq!(backoff(&config, 2, Some(&garbage)), Duration::from_secs(4));
    }

    #[test]
    fn zero_durations_fall_back_to_defaults() {
        let config = RetryConfig {
            min_wait: Duration::ZERO,
            max_wait: Duration::ZERO,
            max_retries: 2,
        }
        .with_defaults();

        assert_eq!(config.min_wait, Duration::from_secs(1));
        assert_eq!(config.max_wait, Duration::from_secs(30));
        assert_eq!(config.max_retries, 2);
    }

    #[tokio::test]
    async fn retries_until_success() {
        let calls = Arc::new(AtomicU32::new(0));
        let transport = RetryTransport::new(
            Scripted {
                statuses: vec![503, 429, 200],
                calls: calls.clone(),
            },
            fast_config(4),
        );

        let response = transport.execute(request()).await.expect("eventual success");

        assert_eq!(response.status, 200);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn returns_last_response_when_retries_are_exhausted() {
        let calls = Arc::new(AtomicU32::new(0));
        let transport = RetryTransport::new(
            Scripted {
                statuses: vec![500],
                calls: calls.clone(),
            },
            fast_config(2),
        );

        let response = transport.execute(request()).await.expect("response returned");

        assert_eq!(response.status, 500);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn client_errors_are_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let transport = RetryTransport::new(
            Scripted {
                statuses: vec![404, 200],
                calls: calls.clone(),
            },
            fast_config(4),
        );

        let response = transport.execute(request()).await.expect("response returned");

        assert_eq!(response.status, 404);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn transport_errors_give_up_after_every_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let transport = RetryTransport::new(Unreachable::new(calls.clone()).await, fast_config(2));

        let err = transport.execute(request()).await.expect_err("unreachable");

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        let ApiError::RetriesExhausted { attempts, source } = &err else {
            panic!("expected RetriesExhausted, got {err:?}");
        };
        assert_eq!(*attempts, 3);
        assert!(matches!(**source, ApiError::Transport { .. }));
        assert_eq!(
            err.to_string(),
            format!("giving up after 3 attempts due to: {source}")
        );
        assert!(err.to_string().starts_with("giving up after 3 attempts due to: GET http://127.0.0.1:"));
    }
}
