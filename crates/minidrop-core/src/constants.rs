//! Wire-level and storage-level constants.

/// Multipart field carrying the crash report (Crashpad's field name).
pub const REPORT_FILE_FIELD: &str = "upload_file_minidump";

/// Extension used when the uploaded filename has none.
pub const DEFAULT_REPORT_EXTENSION: &str = ".dmp";

/// Suffix appended to a report file name to form its metadata sidecar.
pub const METADATA_SUFFIX: &str = ".meta";

/// Prefix of every generated report identifier.
pub const REPORT_ID_PREFIX: &str = "crash";

/// Length of the random component of a report identifier.
pub const REPORT_ID_RANDOM_LEN: usize = 8;

/// `strftime` layout of the timestamp component of a report identifier.
pub const REPORT_ID_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully";
pub const HEALTH_STATUS_OK: &str = "ok";

pub const SUBMIT_PATH: &str = "/submit";
pub const HEALTH_PATH: &str = "/health";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";
