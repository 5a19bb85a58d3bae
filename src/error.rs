use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub struct AirtableError(String);

impl From<&'static str> for AirtableError {
    fn from(val: &'static str) -> Self {
        Self(val.to_string())
    }
}

impl From<String> for AirtableError {
    fn from(val: String) -> Self {
        Self(val)
    }
}

impl Display for AirtableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<crate::api::ApiClientError> for AirtableError {
    fn from(error: crate::api::ApiClientError) -> Self {
        Self(error.to_string())
    }
}

impl From<crate::api::ApiError> for AirtableError {
    fn from(error: crate::api::ApiError) -> Self {
        Self(error.to_string())
    }
}

impl From<crate::steps::StepError> for AirtableError {
    fn from(error: crate::steps::StepError) -> Self {
        Self(error.to_string())
    }
}

impl From<serde_json::Error> for AirtableError {
    fn from(error: serde_json::Error) -> Self {
        Self(error.to_string())
    }
}

pub type AirtableResult<T> = Result<T, AirtableError>;
