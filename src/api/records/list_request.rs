use crate::api::client::ApiRequest;
use crate::api::models::{RecordPage, SelectOptions};

pub(crate) struct ListRecordsRequest {
    base_id: String,
    table_id: String,
    options: SelectOptions,
    offset: Option<String>,
}

impl ListRecordsRequest {
    pub(crate) fn new(
        base_id: impl Into<String>,
        table_id: impl Into<String>,
        options: SelectOptions,
    ) -> Self {
        Self {
            base_id: base_id.into(),
            table_id: table_id.into(),
            options,
            offset: None,
        }
    }

    pub(crate) fn set_offset(&mut self, offset: String) {
        self.offset = Some(offset);
    }
}

impl ApiRequest for ListRecordsRequest {
    type Response = RecordPage;

    fn path(&self) -> String {
        format!("/v0/{}/{}", self.base_id, self.table_id)
    }

    fn query(&self) -> Vec<(String, String)> {
        let mut params = self.options.to_query();

        if let Some(offset) = &self.offset {
            params.push(("offset".to_string(), offset.clone()));
        }

        params
    }
}
