#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("provided URL wasn't valid: {0}")]
    BadUrl(#[from] url::ParseError),

    #[error("an API key is required to build an authenticated client")]
    MissingKey,

    #[error("underlying HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
