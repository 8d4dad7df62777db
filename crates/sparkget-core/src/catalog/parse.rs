//! Catalog JSON parsing. One bad entry is skipped, not fatal.

use serde::Deserialize;

use super::CatalogRecord;
use crate::error::ResolveError;

/// Raw catalog entry as published. Kept separate from `CatalogRecord` so the
/// loose wire shape never leaks past this module.
#[derive(Debug, Deserialize)]
struct RawEntry {
    spark_version: String,
    hadoop_version: String,
    archive_pattern: String,
    base_url: String,
    #[serde(default)]
    default: bool,
    #[serde(default)]
    hadoop_default: bool,
}

/// Parses the published catalog document. Entries that fail to deserialize
/// are skipped with a warning so one bad row cannot block every install; a
/// document that is not a JSON array at all leaves nothing usable.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<CatalogRecord>, ResolveError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_slice(bytes).map_err(|err| ResolveError::CatalogUnavailable {
            reason: format!("catalog is not a JSON array: {}", err),
        })?;

    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<RawEntry>(value) {
            Ok(raw) => records.push(CatalogRecord {
                spark_version: raw.spark_version,
                hadoop_version: raw.hadoop_version,
                archive_pattern: raw.archive_pattern,
                base_url: raw.base_url,
                default: raw.default,
                hadoop_default: raw.hadoop_default,
                installed: false,
            }),
            Err(err) => {
                tracing::warn!("skipping malformed catalog entry #{}: {}", index, err);
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_entry() {
        let json = br#"[{
            "spark_version": "2.1.0",
            "hadoop_version": "2.7",
            "archive_pattern": "spark-%s-bin-hadoop%s",
            "base_url": "https://archive.apache.org/dist/spark/spark-2.1.0/",
            "default": true,
            "hadoop_default": true
        }]"#;
        let records = parse_catalog(json).unwrap();
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.spark_version, "2.1.0");
        assert_eq!(rec.hadoop_version, "2.7");
        assert_eq!(rec.archive_pattern, "spark-%s-bin-hadoop%s");
        assert!(rec.default);
        assert!(rec.hadoop_default);
        assert!(!rec.installed);
    }

    #[test]
    fn default_flags_are_optional() {
        let json = br#"[{
            "spark_version": "1.6.2",
            "hadoop_version": "cdh4",
            "archive_pattern": "spark-%s-bin-%s",
            "base_url": "https://archive.apache.org/dist/spark/spark-1.6.2/"
        }]"#;
        let records = parse_catalog(json).unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].default);
        assert!(!records[0].hadoop_default);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let json = br#"[
            {"spark_version": "2.0.1", "hadoop_version": "2.7",
             "archive_pattern": "spark-%s-bin-hadoop%s", "base_url": "https://example.com/"},
            {"spark_version": 42, "hadoop_version": "2.7"},
            "not even an object"
        ]"#;
        let records = parse_catalog(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].spark_version, "2.0.1");
    }

    #[test]
    fn non_array_document_is_unavailable() {
        let err = parse_catalog(b"{\"oops\": true}").unwrap_err();
        assert!(matches!(err, ResolveError::CatalogUnavailable { .. }));
    }
}
