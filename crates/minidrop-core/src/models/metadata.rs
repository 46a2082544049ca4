//! Report metadata (Crashpad annotations and any other form fields).

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Write;

/// Ordered key/value annotations submitted alongside a report.
///
/// Keys are unique; the first value submitted for a key wins and keeps its
/// position. Iteration follows submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportMetadata {
    entries: Vec<(String, String)>,
    /// Key to position in `entries`, for the first-value-wins check.
    index: HashMap<String, usize>,
}

impl ReportMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. Returns `false` if the key was already present, in which
    /// case the existing value is kept.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        match self.index.entry(key.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                self.entries.push((slot.key().clone(), value.into()));
                slot.insert(self.entries.len() - 1);
                true
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the sidecar file contents: one `key=value` line per field.
    pub fn to_sidecar_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            // Writing into a String cannot fail
            let _ = writeln!(out, "{}={}", key, value);
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for ReportMetadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = ReportMetadata::new();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidecar_preserves_submission_order() {
        let metadata: ReportMetadata = [
            ("platform", "android"),
            ("format", "minidump"),
            ("ver", "1.4.2"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            metadata.to_sidecar_string(),
            "platform=android\nformat=minidump\nver=1.4.2\n"
        );
    }

    #[test]
    fn test_first_value_wins_for_duplicate_keys() {
        let mut metadata = ReportMetadata::new();
        assert!(metadata.insert("prod", "app"));
        assert!(metadata.insert("ver", "1"));
        assert!(!metadata.insert("prod", "other"));

        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata.to_sidecar_string(), "prod=app\nver=1\n");
    }

    #[test]
    fn test_empty_metadata_renders_empty_sidecar() {
        let metadata = ReportMetadata::new();
        assert!(metadata.is_empty());
        assert_eq!(metadata.to_sidecar_string(), "");
    }

    #[test]
    fn test_many_fields_keep_order_and_first_value() {
        let mut metadata = ReportMetadata::new();
        for i in 0..50_000 {
            assert!(metadata.insert(format!("annotation_{}", i), i.to_string()));
        }
        for i in 0..50_000 {
            assert!(!metadata.insert(format!("annotation_{}", i), "late"));
        }

        assert_eq!(metadata.len(), 50_000);
        let first: Vec<(&str, &str)> = metadata.iter().take(2).collect();
        assert_eq!(first, [("annotation_0", "0"), ("annotation_1", "1")]);
        assert_eq!(metadata.iter().last(), Some(("annotation_49999", "49999")));
    }

    #[test]
    fn test_values_are_written_verbatim() {
        let mut metadata = ReportMetadata::new();
        metadata.insert("guid", "a=b=c");
        metadata.insert("empty", "");
        assert_eq!(metadata.to_sidecar_string(), "guid=a=b=c\nempty=\n");
    }
}
