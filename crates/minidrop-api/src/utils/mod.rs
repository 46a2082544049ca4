pub mod multipart;

pub use multipart::{extract_report_form, ReportSubmission};
