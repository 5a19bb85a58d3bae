mod access_key;
mod api_auth;
mod error;
mod traits;

pub use error::ApiClientError;

pub(crate) use access_key::AccessKey;
pub(crate) use api_auth::ApiAuth;
pub(crate) use traits::{ApiRequest, FromReqwestResponse};

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client as RClient, Url};
use serde::Deserialize;

/// Production endpoint of the hosted Airtable service.
pub const DEFAULT_API_URL: &str = "https://api.airtable.com";

pub struct ApiClient {
    auth: Option<ApiAuth>,
    base_url: Url,
    client: RClient,
}

impl ApiClient {
    pub fn anonymous(base_url: &str) -> Result<Self, ApiClientError> {
        let client = default_reqwest_client()?;
        let base_url = Url::parse(base_url)?;

        Ok(Self {
            auth: None,
            base_url,
            client,
        })
    }

    pub fn authenticated(base_url: &str, api_key: &str) -> Result<Self, ApiClientError> {
        if api_key.trim().is_empty() {
            return Err(ApiClientError::MissingKey);
        }

        let base_url = Url::parse(base_url)?;
        let auth = Some(ApiAuth::new(api_key));
        let client = default_reqwest_client()?;

        Ok(Self {
            auth,
            base_url,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) async fn send_request<R: ApiRequest>(
        &self,
        request: &R,
    ) -> Result<R::Response, ApiError> {
        let full_url = self.base_url.join(&request.path())?;
        let mut req = self.client.request(request.method(), full_url);

        let query = request.query();
        if !query.is_empty() {
            req = req.query(&query);
        }

        if request.requires_auth() {
            match &self.auth {
                Some(auth) => req = req.header(AUTHORIZATION, auth.bearer_header()?),
                None => return Err(ApiError::RequiresAuth),
            }
        }

        tracing::debug!("issuing API request to {}", request.path());
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            return R::Response::from_response(response).await;
        }

        let message = match response.bytes().await {
            Ok(body) => match serde_json::from_slice::<RawApiError>(&body) {
                Ok(raw_error) => raw_error.into_message(),
                Err(_) => fallback_status_message(status),
            },
            Err(_) => fallback_status_message(status),
        };

        tracing::warn!("API request failed with status {status}: {message}");

        Err(ApiError::Message {
            status_code: status.as_u16(),
            message,
        })
    }
}

fn default_reqwest_client() -> Result<RClient, ApiClientError> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert("Content-Type", HeaderValue::from_static("application/json"));

    let user_agent = format!("airtable-client/{}", crate::version::minimal_version());

    let client = RClient::builder()
        .default_headers(default_headers)
        .user_agent(user_agent)
        .build()?;

    Ok(client)
}

fn fallback_status_message(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unrecognized error response")
        .to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API returned {status_code} response with message: {message}")]
    Message { status_code: u16, message: String },

    #[error("API request requires authentication but client is not authenticated")]
    RequiresAuth,

    #[error("request URL is invalid: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("API key can't be carried in an authorization header: {0}")]
    InvalidKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("communication failure while talking to the API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API response couldn't be decoded: {0}")]
    CorruptResponse(#[from] serde_json::Error),
}

/// Error envelope the service wraps failures in. Most failures carry a structured body with a
/// machine tag and a human message, a handful of endpoints degrade to a bare string code.
#[derive(Debug, Deserialize)]
pub(crate) struct RawApiError {
    error: RawErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawErrorDetail {
    Envelope {
        #[serde(rename = "type")]
        kind: String,
        message: Option<String>,
    },
    Code(String),
}

impl RawApiError {
    pub(crate) fn into_message(self) -> String {
        match self.error {
            RawErrorDetail::Envelope {
                kind,
                message: Some(message),
            } => format!("{kind}: {message}"),
            RawErrorDetail::Envelope { kind, message: None } => kind,
            RawErrorDetail::Code(code) => code,
        }
    }
}
