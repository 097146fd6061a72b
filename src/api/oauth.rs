//! OAuth2 access for the Site24x7 API
//!
//! Access tokens are obtained from the Zoho accounts server with a refresh
//! token grant and attached as `Authorization: Zoho-oauthtoken <token>`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::api::{
    errors::ApiError,
    rest::{HttpRequest, HttpResponse, HttpTransport},
};

pub const TOKEN_URL: &str = "https://accounts.zoho.com/oauth/v2/token";
pub const TOKEN_TYPE: &str = "Zoho-oauthtoken";

/// The accounts server reports `expires_in` in milliseconds, so no token is
/// trusted for longer than an hour.
const MAX_EXPIRES_IN_SECS: i64 = 3_600;
const EXPIRY_DELTA_SECS: i64 = 10;

#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub access_token: Option<String>,
    /// Lifetime of `access_token` in seconds.
    pub expiry: Option<String>,
    pub token_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub access_token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Token {
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        if self.access_token.is_empty() {
            return false;
        }

        match self.expires_at {
            Some(expires_at) => expires_at - Duration::seconds(EXPIRY_DELTA_SECS) > now,
            None => true,
        }
    }

    pub fn authorization(&self) -> String {
        format!("{TOKEN_TYPE} {}", self.access_token)
    }

    fn clamped(mut self, now: DateTime<Utc>) -> Self {
        let latest = now + Duration::seconds(MAX_EXPIRES_IN_SECS);
        if let Some(expires_at) = self.expires_at {
            if expires_at > latest {
                self.expires_at = Some(latest);
            }
        }
        self
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    error: Option<String>,
}

pub struct TokenSource {
    config: OAuthConfig,
    http: reqwest::Client,
    current: Mutex<Option<Token>>,
}

impl TokenSource {
    pub fn new(config: OAuthConfig, http: reqwest::Client) -> Self {
        let now = Utc::now();
        let preset = config
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| Token {
                access_token: token.to_string(),
                expires_at: config
                    .expiry
                    .as_deref()
                    .and_then(|expiry| expiry.trim().parse::<i64>().ok())
                    .map(|seconds| now + Duration::seconds(seconds)),
            });

        Self {
            config,
            http,
            current: Mutex::new(preset),
        }
    }

    pub async fn token(&self) -> Result<Token, ApiError> {
        let mut current = self.current.lock().await;
        let now = Utc::now();

        if let Some(token) = current.as_ref().filter(|token| token.is_valid_at(now)) {
            return Ok(token.clone().clamped(now));
        }

        let token = self.refresh(now).await?;
        *current = Some(token.clone());
        Ok(token)
    }

    async fn refresh(&self, now: DateTime<Utc>) -> Result<Token, ApiError> {
        debug!(token_url = %self.config.token_url, "refreshing access token");

        let response = self
            .http
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.config.refresh_token.as_str()),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                method: "POST".to_string(),
                url: self.config.token_url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|source| ApiError::Transport {
            method: "POST".to_string(),
            url: self.config.token_url.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(ApiError::OAuth(format!(
                "cannot fetch token: {status}, response: {}",
                String::from_utf8_lossy(&body)
            )));
        }

        let parsed: TokenResponse = serde_json::from_slice(&body)?;
        if let Some(error) = parsed.error.filter(|error| !error.is_empty()) {
            return Err(ApiError::OAuth(format!("cannot fetch token: {error}")));
        }
        if parsed.access_token.is_empty() {
            return Err(ApiError::OAuth(
                "server response missing access_token".to_string(),
            ));
        }

        info!("obtained new access token");

        Ok(Token {
            access_token: parsed.access_token,
            expires_at: parsed
                .expires_in
                .filter(|seconds| *seconds > 0)
                .map(|seconds| now + Duration::seconds(seconds)),
        }
        .clamped(now))
    }
}

/// Executes requests with reqwest and signs them with the current access token.
pub struct OAuthTransport {
    http: reqwest::Client,
    tokens: Arc<TokenSource>,
}

impl OAuthTransport {
    pub fn new(http: reqwest::Client, tokens: Arc<TokenSource>) -> Self {
        Self { http, tokens }
    }
}

#[async_trait]
impl HttpTransport for OAuthTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let token = self.tokens.token().await?;
        let transport_error = |source| ApiError::Transport {
            method: request.method.to_string(),
            url: request.url.clone(),
            source,
        };

        let mut builder = self.http.request(request.method.clone(), &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        builder = builder.header("Authorization", token.authorization());
        if let Some(body) = request.body.clone() {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(key, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (key.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.bytes().await.map_err(transport_error)?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;
    use wiremock::{
        matchers::{body_string_contains, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn config(token_url: String) -> OAuthConfig {
        OAuthConfig {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            refresh_token: "refresh-token".to_string(),
            access_token: None,
            expiry: None,
            token_url,
        }
    }

    #[test]
    fn token_expires_ahead_of_deadline() {
        let now = Utc::now();
        let token = Token {
            access_token: "abc".to_string(),
            expires_at: Some(now + Duration::seconds(5)),
        };

        assert!(!token.is_valid_at(now));
        assert!(Token {
            expires_at: None,
            ..token.clone()
        }
        .is_valid_at(now));
        assert!(!Token {
            access_token: String::new(),
            expires_at: None,
        }
        .is_valid_at(now));
    }

    #[tokio::test]
    async fn preset_access_token_is_used_without_refresh() {
        let mut config = config("http://127.0.0.1:1/oauth/v2/token".to_string());
        config.access_token = Some("preset".to_string());
        config.expiry = Some("120".to_string());

        let source = TokenSource::new(config, reqwest::Client::new());
        let token = source.token().await.expect("preset token");

        assert_eq!(token.access_token, "preset");
        assert_eq!(token.authorization(), "Zoho-oauthtoken preset");
    }

    #[tokio::test]
    async fn refresh_grant_clamps_expiry_to_one_hour() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/token"))
            .and(body_string_contains("grant_type=refresh_token"))
            .and(body_string_contains("client_id=client-id"))
            .and(body_string_contains("client_secret=client-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "fresh",
                "expires_in": 3_600_000,
                "token_type": "Bearer"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let source = TokenSource::new(
            config(format!("{}/oauth/v2/token", server.uri())),
            reqwest::Client::new(),
        );
        let before = Utc::now();
        let token = source.token().await.expect("token refresh");
        let cached = source.token().await.expect("cached token");

        assert_eq!(token.access_token, "fresh");
        assert_eq!(cached.access_token, "fresh");
        let expires_at = token.expires_at.expect("expiry set");
        assert!(expires_at <= Utc::now() + Duration::seconds(MAX_EXPIRES_IN_SECS));
        assert!(expires_at > before + Duration::seconds(MAX_EXPIRES_IN_SECS - 60));
    }

    #[tokio::test]
    async fn error_member_in_token_response_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "invalid_code"
            })))
            .mount(&server)
            .await;

        let source = TokenSource::new(
            config(format!("{}/oauth/v2/token", server.uri())),
            reqwest::Client::new(),
        );
        let err = source.token().await.expect_err("invalid refresh token");

        assert_eq!(err.to_string(), "oauth2: cannot fetch token: invalid_code");
    }

    #[tokio::test]
    async fn transport_signs_requests_with_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "signed",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/monitors"))
            .and(header("Authorization", "Zoho-oauthtoken signed"))
            .and(header("Accept", "application/json; version=2.1"))
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("Retry-After", "3")
                    .set_body_string("{}"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let http = reqwest::Client::new();
        let tokens = Arc::new(TokenSource::new(
            config(format!("{}/oauth/v2/token", server.uri())),
            http.clone(),
        ));
        let transport = OAuthTransport::new(http, tokens);

        let response = transport
            .execute(HttpRequest {
                method: Method::GET,
                url: format!("{}/api/monitors", server.uri()),
                headers: vec![(
                    "Accept".to_string(),
                    "application/json; version=2.1".to_string(),
                )],
                body: None,
            })
            .await
            .expect("request executes");

        assert_eq!(response.status, 429);
        assert_eq!(response.header("retry-after"), Some("3"));
    }
}
