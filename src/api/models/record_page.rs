use serde::Deserialize;

use crate::api::models::ApiRecord;

/// One bounded batch from the list endpoint. The service includes an opaque `offset` cursor on
/// every page except the last one.
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "strict", serde(deny_unknown_fields))]
pub struct RecordPage {
    records: Vec<ApiRecord>,
    offset: Option<String>,
}

impl RecordPage {
    pub fn records(&self) -> &[ApiRecord] {
        &self.records
    }

    pub fn offset(&self) -> Option<&str> {
        self.offset.as_deref()
    }

    pub(crate) fn into_parts(self) -> (Vec<ApiRecord>, Option<String>) {
        (self.records, self.offset)
    }
}
