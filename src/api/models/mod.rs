mod api_record;
mod record_page;
mod select_options;

pub use api_record::{ApiRecord, ApiRecordId};
pub use record_page::RecordPage;
pub use select_options::{CellFormat, SelectOptions, SortDirection, SortField};
