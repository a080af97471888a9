// HTTP plumbing for the TrustLens backend.
//
// A thin reqwest wrapper with generic JSON GET/POST helpers. Every call
// carries a client-side timeout; a timed-out request surfaces as a
// Transport error, recoverable by retry. Nothing here retries
// automatically — retries are user-initiated.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::{ApiError, Session};

/// Default client-side timeout for backend calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 12;

/// Typed client for the TrustLens backend.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session: Session,
}

/// The backend's standard success envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
}

impl ApiClient {
    /// Create a client for the given base URL with the given timeout.
    pub fn new(base_url: &str, timeout_secs: u64, session: Session) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent("trustlens/0.1")
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method, &url);
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// POST a JSON body and deserialize the JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path = path, "POST");
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::read_json(response).await
    }

    /// GET with query parameters and deserialize the JSON response.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        debug!(path = path, "GET");
        let response = self
            .request(reqwest::Method::GET, path)
            .query(query)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        response.json().await.map_err(|_| ApiError::UnexpectedPayload)
    }

    /// POST returning the standard envelope, unwrapped.
    ///
    /// A 2xx with `success=false` or a missing `data` field is a contract
    /// mismatch, not a transient failure.
    pub async fn post_enveloped<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let envelope: Envelope<T> = self.post_json(path, body).await?;
        match envelope {
            Envelope {
                success: true,
                data: Some(data),
            } => Ok(data),
            _ => Err(ApiError::UnexpectedPayload),
        }
    }

    /// GET returning the standard envelope, unwrapped.
    pub async fn get_enveloped<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let envelope: Envelope<T> = self.get_json(path, query).await?;
        match envelope {
            Envelope {
                success: true,
                data: Some(data),
            } => Ok(data),
            _ => Err(ApiError::UnexpectedPayload),
        }
    }
}
