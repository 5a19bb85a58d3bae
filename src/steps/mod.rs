//! Step-shaped entry points for automation hosts. A step receives a plain configuration value,
//! performs one complete operation against the API, and hands the host a single return value or a
//! single terminal failure. No partial results, no local retries.

mod step_config;

pub use step_config::StepConfig;

use serde_json::Value;

use crate::api::models::ApiRecord;
use crate::api::{records, ApiClient, ApiClientError, ApiError, DEFAULT_API_URL};

/// Retrieves every record of the configured table and returns them as raw JSON objects in service
/// order, which is the shape automation hosts pass between steps.
pub async fn get_records(config: &StepConfig) -> Result<Vec<Value>, StepError> {
    get_records_at(DEFAULT_API_URL, config).await
}

/// Same as [`get_records`] but against a caller-chosen endpoint.
pub async fn get_records_at(api_url: &str, config: &StepConfig) -> Result<Vec<Value>, StepError> {
    config.validate()?;

    let client = ApiClient::authenticated(api_url, config.api_key())?;
    let records = records::list_all(&client, config.base_id(), config.table_id()).await?;

    tracing::info!(
        "retrieved {} records from table {}",
        records.len(),
        config.table_id()
    );

    Ok(records.into_iter().map(ApiRecord::into_raw).collect())
}

#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("step configuration is incomplete: {0} must not be empty")]
    EmptyField(&'static str),

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("failed to construct the API client: {0}")]
    Client(#[from] ApiClientError),

    #[error("record retrieval failed: {0}")]
    Api(#[from] ApiError),
}
