//
//  bitbucket-repos
//  transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # The Transport Seam
//!
//! Everything network-shaped lives behind the [`Transport`] trait: the
//! resource binding builds paths, query parameters, and bodies, then hands
//! them to whatever transport it was composed with. The trait has exactly the
//! three operations the binding needs.
//!
//! [`HttpTransport`] is the default implementation, a reqwest wrapper for
//! Bitbucket Cloud adapted to this crate's needs:
//!
//! - Base URL handling (`https://api.bitbucket.org/2.0` by default)
//! - Authentication header injection via [`Credentials`]
//! - JSON response decoding into [`serde_json::Value`]
//! - Error-body extraction for non-success statuses
//! - Custom User-Agent header
//!
//! Connection pooling, TLS, and timeouts are reqwest's business; retries,
//! caching, and rate limiting are nobody's business here at all.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;

/// Base URL of the Bitbucket Cloud API v2.0.
pub const CLOUD_BASE_URL: &str = "https://api.bitbucket.org/2.0";

/// The collaborator contract for performing HTTP exchanges.
///
/// The resource binding requires exactly three operations. Paths arrive with
/// their segments already percent-encoded (see
/// [`crate::query::encode_segment`]); implementations must not re-encode
/// them. Query parameters arrive as ordered pairs and may repeat a key.
///
/// Implementations decide their own concurrency, timeout, and cancellation
/// semantics; the binding simply awaits whatever future the transport
/// returns.
///
/// # Example
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use bitbucket_repos::{Error, Transport};
/// use serde_json::{json, Value};
///
/// struct CannedTransport;
///
/// #[async_trait]
/// impl Transport for CannedTransport {
///     async fn get(&self, _path: &str, _params: &[(String, String)]) -> Result<Value, Error> {
///         Ok(json!({"values": []}))
///     }
///
///     async fn post(&self, _path: &str, _body: &Value) -> Result<Value, Error> {
///         Ok(json!({}))
///     }
///
///     async fn send_prebuilt(&self, _url: &str) -> Result<Value, Error> {
///         Ok(json!({}))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a GET request against `path` relative to the API base.
    ///
    /// `params` are serialized as the query string in the given order.
    async fn get(&self, path: &str, params: &[(String, String)]) -> Result<Value, Error>;

    /// Performs a POST request against `path` with a JSON `body`.
    async fn post(&self, path: &str, body: &Value) -> Result<Value, Error>;

    /// Dereferences a pre-built URL exactly as the remote API handed it back.
    ///
    /// Used for HATEOAS links (`links.forks.href` and friends); no base URL
    /// joining or re-encoding is applied.
    async fn send_prebuilt(&self, url: &str) -> Result<Value, Error>;
}

/// Authentication credentials applied to outgoing requests.
///
/// # Example
///
/// ```rust
/// use bitbucket_repos::Credentials;
///
/// let app_password = Credentials::basic("username", "app-password");
/// let oauth = Credentials::bearer("access-token");
/// # let _ = (app_password, oauth);
/// ```
#[derive(Debug, Clone)]
pub enum Credentials {
    /// HTTP Basic authentication with a username and app password.
    Basic {
        /// The Bitbucket username.
        username: String,
        /// The app password or token used as the Basic password.
        password: String,
    },
    /// Bearer token authentication (OAuth 2.0 access token).
    Bearer(String),
}

impl Credentials {
    /// Creates Basic credentials from a username and app password.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates Bearer credentials from an OAuth access token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    /// Applies these credentials to a request.
    fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
            Self::Bearer(token) => request.bearer_auth(token),
        }
    }
}

/// Parses a Bitbucket Cloud API error response into an [`Error::Api`].
///
/// Bitbucket Cloud returns errors in the format:
/// ```json
/// {"type": "error", "error": {"message": "Human readable message"}}
/// ```
///
/// This function extracts the message from that shape, falling back to the
/// `error.detail` and bare `message` variants some endpoints use, and finally
/// to the raw body text when nothing parses.
pub fn format_api_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            // Standard Cloud format: {"error": {"message": "..."}}
            json.pointer("/error/message")
                .or_else(|| json.pointer("/error/detail"))
                .or_else(|| json.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string());

    Error::Api { status, message }
}

/// The default reqwest-backed transport for Bitbucket Cloud.
///
/// # Creating a Transport
///
/// ```rust,no_run
/// use bitbucket_repos::{Credentials, HttpTransport};
///
/// let transport = HttpTransport::cloud()?
///     .with_credentials(Credentials::bearer("your-token"));
/// # Ok::<(), bitbucket_repos::Error>(())
/// ```
///
/// Point it elsewhere (a mock server, a proxy) by constructing it with an
/// explicit base URL:
///
/// ```rust,no_run
/// use bitbucket_repos::HttpTransport;
///
/// let transport = HttpTransport::new("http://localhost:8080/2.0")?;
/// # Ok::<(), bitbucket_repos::Error>(())
/// ```
pub struct HttpTransport {
    /// The underlying HTTP client.
    http: Client,
    /// The API base URL, without a trailing slash.
    base_url: String,
    /// Optional authentication credentials.
    credentials: Option<Credentials>,
}

impl HttpTransport {
    /// Creates a transport targeting the Bitbucket Cloud API v2.0.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn cloud() -> Result<Self, Error> {
        Self::new(CLOUD_BASE_URL)
    }

    /// Creates a transport targeting an arbitrary base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base_url` does not parse, or a
    /// network error if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        // Parse up front so a bad base fails here, not on the first request.
        Url::parse(base_url)?;

        Ok(Self {
            http: Client::builder()
                .user_agent(format!("bitbucket-repos/{}", crate::VERSION))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: None,
        })
    }

    /// Sets the authentication credentials for this transport.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Returns the base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(credentials) => credentials.apply_to_request(request),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Value, Error> {
        let response = self.authorize(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(format_api_error(status, &text));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, params: &[(String, String)]) -> Result<Value, Error> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, params = params.len(), "GET");

        let mut request = self.http.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }

        self.execute(request).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, Error> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");

        self.execute(self.http.post(&url).json(body)).await
    }

    async fn send_prebuilt(&self, url: &str) -> Result<Value, Error> {
        // The URL came out of a response body; validate before dispatch.
        let url = Url::parse(url)?;
        debug!(%url, "GET (prebuilt)");

        self.execute(self.http.get(url)).await
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
