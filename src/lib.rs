pub mod api;
pub mod error;
pub mod steps;
pub mod version;

pub mod prelude {
    pub use crate::api::*;
    pub use crate::error::*;
    pub use crate::steps::*;
    pub use crate::version::*;

    pub use crate::api::models::{ApiRecord, RecordPage, SelectOptions};
    pub use crate::api::records::RecordPages;
}
