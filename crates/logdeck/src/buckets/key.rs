//! Source identity derivation for bucketing.

use crate::record::RecordInfo;

/// Derive the bucket identity for a record: `info.path` if present, else
/// `info.entrypoint`. Names whose final path segment has no extension are
/// function units and get the configured synthetic suffix appended, so
/// `pages/index` and `pages/index.js` stay distinct buckets.
///
/// Returns `None` when neither field is present; the caller routes such
/// records to a reserved bucket.
pub fn source_key(info: &RecordInfo, function_suffix: &str) -> Option<String> {
    let name = info
        .path
        .as_deref()
        .filter(|p| !p.is_empty())
        .or_else(|| info.entrypoint.as_deref().filter(|e| !e.is_empty()))?;

    if has_extension(name) {
        Some(name.to_string())
    } else {
        Some(format!("{name}{function_suffix}"))
    }
}

fn has_extension(name: &str) -> bool {
    let segment = name.rsplit(['/', '\\']).next().unwrap_or(name);
    matches!(segment.rsplit_once('.'), Some((_, ext)) if !ext.is_empty())
}
