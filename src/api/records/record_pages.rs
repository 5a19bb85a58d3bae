use crate::api::client::{ApiClient, ApiError};
use crate::api::models::ApiRecord;
use crate::api::records::list_request::ListRecordsRequest;

/// A lazy, finite, forward-only walk over the pages of one table. Each page is requested only
/// when asked for, and page n+1 is never requested before page n has been handed back.
pub struct RecordPages<'a> {
    client: &'a ApiClient,
    request: ListRecordsRequest,
    exhausted: bool,
}

impl<'a> RecordPages<'a> {
    pub(crate) fn new(client: &'a ApiClient, request: ListRecordsRequest) -> Self {
        Self {
            client,
            request,
            exhausted: false,
        }
    }

    /// Retrieves the next page of records, or `None` once the service has signaled that no pages
    /// remain. After exhaustion this keeps returning `None` without touching the network.
    pub async fn next_page(&mut self) -> Result<Option<Vec<ApiRecord>>, ApiError> {
        if self.exhausted {
            return Ok(None);
        }

        let page = self.client.send_request(&self.request).await?;
        let (records, offset) = page.into_parts();

        match offset {
            Some(cursor) => self.request.set_offset(cursor),
            None => self.exhausted = true,
        }

        tracing::debug!("retrieved page of {} records", records.len());

        Ok(Some(records))
    }
}
