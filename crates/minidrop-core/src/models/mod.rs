pub mod metadata;
pub mod report;
pub mod responses;

pub use metadata::ReportMetadata;
pub use report::{report_extension, ReportId};
pub use responses::{HealthResponse, SubmitReportResponse};
