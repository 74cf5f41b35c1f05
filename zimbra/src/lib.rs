use reqwest::Url;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

mod error;
pub mod soap;

pub mod auth;
pub mod dl;

pub use error::{Error, Result};
pub use soap::Fault;

/// The default timeout for admin API requests
pub const DEFAULT_TIMEOUT: u64 = 20;

/// Opaque session credential minted by [`auth::authenticate`]. It must
/// accompany every subsequent admin request and is never persisted.
#[derive(Debug, Clone)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    endpoint: Url,
    client: reqwest::Client,
}

impl Client {
    /// Create a new client for a given admin SOAP endpoint, e.g.
    /// `https://mail.example.net:7071/service/admin/soap`, with the default
    /// request timeout.
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::new_with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a new client for a given admin SOAP endpoint and request
    /// timeout value.
    pub fn new_with_timeout(endpoint: &str, timeout: u64) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = reqwest::Client::builder()
            .gzip(true)
            .timeout(Duration::from_secs(timeout))
            .build()?;
        Ok(Self { endpoint, client })
    }

    /// Post a single request element and unwrap the matching response
    /// element. The response body is decoded before the HTTP status is
    /// consulted: the server reports faults with a non-success status and a
    /// `Fault` envelope carrying the detail.
    pub(crate) async fn send<T, R>(
        &self,
        token: Option<&AuthToken>,
        name: &str,
        body: &T,
    ) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let envelope = soap::request_envelope(name, body, token)?;
        tracing::debug!(request = name, "sending admin request");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&envelope)
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let envelope: soap::ResponseEnvelope = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(Error::Status(status)),
            Err(e) => return Err(e.into()),
        };
        let payload = envelope.into_response(&soap::response_name(name))?;
        serde_json::from_value(payload).map_err(Error::from)
    }
}
