use std::sync::Arc;

use reqwest::header::HeaderValue;

use crate::api::client::{AccessKey, ApiError};

#[derive(Clone)]
pub(crate) struct ApiAuth {
    key: Arc<AccessKey>,
}

impl ApiAuth {
    pub(crate) fn new(api_key: impl Into<String>) -> Self {
        let key = Arc::new(AccessKey::new(api_key));

        Self { key }
    }

    /// Produces the Authorization header for an outgoing request. The header is marked sensitive
    /// so intermediate layers don't log it.
    pub(crate) fn bearer_header(&self) -> Result<HeaderValue, ApiError> {
        let mut header = HeaderValue::from_str(&format!("Bearer {}", self.key.reveal()))?;
        header.set_sensitive(true);

        Ok(header)
    }
}
