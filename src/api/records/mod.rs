mod list_request;
mod record_pages;

use list_request::ListRecordsRequest;
pub use record_pages::RecordPages;

use crate::api::client::{ApiClient, ApiError};
use crate::api::models::{ApiRecord, SelectOptions};

/// Begins a paged walk over the records of one table. Nothing is requested until the first call
/// to [`RecordPages::next_page`].
pub fn select<'a>(
    client: &'a ApiClient,
    base_id: &str,
    table_id: &str,
    options: SelectOptions,
) -> RecordPages<'a> {
    let request = ListRecordsRequest::new(base_id, table_id, options);
    RecordPages::new(client, request)
}

/// Retrieves every record of one table as a single ordered collection, in the order the service
/// returns them. Either the whole table comes back or the first failed page request surfaces as
/// the error, partial accumulations never escape.
pub async fn list_all(
    client: &ApiClient,
    base_id: &str,
    table_id: &str,
) -> Result<Vec<ApiRecord>, ApiError> {
    let mut pages = select(client, base_id, table_id, SelectOptions::default());
    let mut records = Vec::new();

    while let Some(page) = pages.next_page().await? {
        records.extend(page);
    }

    Ok(records)
}
