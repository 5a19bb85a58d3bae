use std::fmt::{self, Debug, Formatter};

use serde::Deserialize;

use crate::steps::StepError;

const API_KEY_VAR: &str = "AIRTABLE_API_KEY";
const BASE_ID_VAR: &str = "AIRTABLE_BASE_ID";
const TABLE_ID_VAR: &str = "AIRTABLE_TABLE_ID";

/// The configuration a host platform hands to the step: a credential plus the base and table the
/// credential should be used against. The table is scoped under the base, the base under the
/// account the key belongs to, and only the service itself can judge whether the three line up.
#[derive(Clone, Deserialize)]
pub struct StepConfig {
    api_key: String,
    base_id: String,
    table_id: String,
}

impl StepConfig {
    pub fn new(
        api_key: impl Into<String>,
        base_id: impl Into<String>,
        table_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_id: base_id.into(),
            table_id: table_id.into(),
        }
    }

    /// Resolves the configuration from the environment, which is how host platforms inject step
    /// settings when running the bundled binary.
    pub fn from_env() -> Result<Self, StepError> {
        Ok(Self {
            api_key: required_var(API_KEY_VAR)?,
            base_id: required_var(BASE_ID_VAR)?,
            table_id: required_var(TABLE_ID_VAR)?,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_id(&self) -> &str {
        &self.base_id
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub(crate) fn validate(&self) -> Result<(), StepError> {
        if self.api_key.trim().is_empty() {
            return Err(StepError::EmptyField("api_key"));
        }

        if self.base_id.trim().is_empty() {
            return Err(StepError::EmptyField("base_id"));
        }

        if self.table_id.trim().is_empty() {
            return Err(StepError::EmptyField("table_id"));
        }

        Ok(())
    }
}

fn required_var(name: &'static str) -> Result<String, StepError> {
    std::env::var(name).map_err(|_| StepError::MissingEnv(name))
}

impl Debug for StepConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepConfig")
            .field("api_key", &"*redacted*")
            .field("base_id", &self.base_id)
            .field("table_id", &self.table_id)
            .finish()
    }
}
