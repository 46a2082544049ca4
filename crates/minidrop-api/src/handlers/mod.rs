pub mod health;
pub mod report_submit;

pub use health::health_check;
pub use report_submit::submit_report;
