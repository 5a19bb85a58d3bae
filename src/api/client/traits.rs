use async_trait::async_trait;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;

use crate::api::client::ApiError;

pub(crate) trait ApiRequest {
    type Response: FromReqwestResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String;

    fn query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn requires_auth(&self) -> bool {
        true
    }
}

#[async_trait]
pub(crate) trait FromReqwestResponse: Sized {
    async fn from_response(response: Response) -> Result<Self, ApiError>;
}

#[async_trait]
impl<T> FromReqwestResponse for T
where
    T: DeserializeOwned,
{
    async fn from_response(response: Response) -> Result<Self, ApiError> {
        let body = response.bytes().await?;
        let parsed = serde_json::from_slice(&body)?;

        Ok(parsed)
    }
}
