//! Crash report identifiers.
//!
//! A report is stored under `crash_<YYYYMMDD_HHMMSS>_<8 hex chars><ext>`. The
//! identifier is the only handle a client gets back, and it is also the file
//! name of the report inside the upload directory.

use crate::constants::{
    DEFAULT_REPORT_EXTENSION, METADATA_SUFFIX, REPORT_ID_PREFIX, REPORT_ID_RANDOM_LEN,
    REPORT_ID_TIMESTAMP_FORMAT,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Generated identifier of a stored crash report
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    /// Generate a fresh identifier for a report received at `received_at`.
    ///
    /// The random component is the first eight characters of a v4 UUID, so two
    /// reports received within the same second are told apart with high probability
    /// but not with certainty.
    pub fn generate(original_filename: &str, received_at: NaiveDateTime) -> Self {
        let token = Uuid::new_v4().simple().to_string();
        let random = &token[..REPORT_ID_RANDOM_LEN];
        Self::from_parts(received_at, random, &report_extension(original_filename))
    }

    /// Assemble an identifier from already chosen components.
    pub fn from_parts(received_at: NaiveDateTime, random: &str, extension: &str) -> Self {
        ReportId(format!(
            "{}_{}_{}{}",
            REPORT_ID_PREFIX,
            received_at.format(REPORT_ID_TIMESTAMP_FORMAT),
            random,
            extension
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the metadata sidecar belonging to this report.
    pub fn metadata_file_name(&self) -> String {
        format!("{}{}", self.0, METADATA_SUFFIX)
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the stored extension (leading dot included) from a client-supplied filename.
///
/// Only the last path component is considered, with both `/` and `\` treated as
/// separators. Leading dots of that component do not start an extension, so
/// `.bashrc` has none. Extensions that are not a plain word (`[A-Za-z0-9_]+`) are
/// replaced by the default `.dmp`, which keeps the generated name a flat file name.
pub fn report_extension(original_filename: &str) -> String {
    let base = original_filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_filename);
    let stem_start = base.len() - base.trim_start_matches('.').len();

    let extension = base[stem_start..]
        .rfind('.')
        .map(|dot| &base[stem_start + dot..]);

    match extension {
        Some(ext) if is_plain_extension(ext) => ext.to_string(),
        _ => DEFAULT_REPORT_EXTENSION.to_string(),
    }
}

fn is_plain_extension(ext: &str) -> bool {
    let word = &ext[1..];
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use regex::Regex;

    fn received_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 42)
            .unwrap()
    }

    #[test]
    fn test_from_parts_layout() {
        let id = ReportId::from_parts(received_at(), "0a1b2c3d", ".log");
        assert_eq!(id.as_str(), "crash_20240309_070542_0a1b2c3d.log");
        assert_eq!(
            id.metadata_file_name(),
            "crash_20240309_070542_0a1b2c3d.log.meta"
        );
    }

    #[test]
    fn test_generate_matches_documented_pattern() {
        let pattern = Regex::new(r"^crash_\d{8}_\d{6}_[0-9a-f]{8}(\.\w+)?$").unwrap();
        for name in ["report", "report.log", "minidump.dmp", "trace.txt", ""] {
            let id = ReportId::generate(name, received_at());
            assert!(pattern.is_match(id.as_str()), "unexpected id {}", id);
        }
    }

    #[test]
    fn test_generate_uses_fresh_random_component() {
        let a = ReportId::generate("report.dmp", received_at());
        let b = ReportId::generate("report.dmp", received_at());
        assert_ne!(a, b);
    }

    #[test]
    fn test_extension_defaults_when_missing() {
        assert_eq!(report_extension("report"), ".dmp");
        assert_eq!(report_extension("report."), ".dmp");
        assert_eq!(report_extension(".bashrc"), ".dmp");
        assert_eq!(report_extension("dir.d/report"), ".dmp");
    }

    #[test]
    fn test_extension_preserved() {
        assert_eq!(report_extension("report.log"), ".log");
        assert_eq!(report_extension("flutter_crash.txt"), ".txt");
        assert_eq!(report_extension("archive.tar.gz"), ".gz");
        assert_eq!(report_extension("..hidden.dmp"), ".dmp");
        assert_eq!(report_extension("C:\\crashes\\app.DMP"), ".DMP");
    }

    #[test]
    fn test_extension_rejects_path_like_suffixes() {
        assert_eq!(report_extension("a.b\\..\\..\\etc"), ".dmp");
        assert_eq!(report_extension("report.l og"), ".dmp");
        assert_eq!(report_extension("report.lo/g"), ".dmp");
    }
}
