//! Request-lifecycle report detector.
//!
//! Serverless runtimes emit fixed-format lifecycle lines such as
//! `REPORT RequestId: abc\tDuration: 120 ms\tMemory Size: 128 MB`.
//! These parse into an ordered key/value report instead of running the
//! pattern rule chain.

use super::model::StructuredReport;

/// Lifecycle markers emitted by the serverless runtime, in match priority.
const LIFECYCLE_MARKERS: [&str; 3] = ["REPORT", "START", "END"];

/// Parse a lifecycle report out of sanitized text.
///
/// Returns `None` when no `<marker> RequestId:` token is present, handing the
/// text to the rule chain. A marker with no parseable fields yields a report
/// with an empty field list rather than a failure.
pub fn try_parse_report(text: &str) -> Option<StructuredReport> {
    let marker = LIFECYCLE_MARKERS
        .iter()
        .copied()
        .find(|m| text.contains(&format!("{m} RequestId:")))?;

    // Strip the marker, flatten embedded newlines, then split fields.
    // Tab delimiters take precedence; token scanning is the fallback for
    // space-delimited reports.
    let stripped = text.replacen(&format!("{marker} "), "", 1);
    let flat = stripped.replace('\n', "");
    let fields = if flat.contains('\t') {
        split_tabbed(&flat)
    } else {
        split_tokens(&flat)
    };

    tracing::trace!(marker, fields = fields.len(), "parsed lifecycle report");
    Some(StructuredReport {
        marker: marker.to_string(),
        fields,
    })
}

/// Tab-delimited pairs: each piece splits on its first `:`, both sides
/// trimmed; pieces missing a key or value are dropped.
fn split_tabbed(flat: &str) -> Vec<(String, String)> {
    flat.split('\t')
        .filter_map(|piece| {
            let (key, value) = piece.split_once(':')?;
            let key = key.trim();
            let value = value.trim();
            if key.is_empty() || value.is_empty() {
                return None;
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Whitespace-token scan: a token ending in `:` opens a new key, following
/// tokens accumulate into its value until the next key token.
fn split_tokens(flat: &str) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    let mut key: Option<String> = None;
    let mut value = String::new();

    for token in flat.split_whitespace() {
        if token.len() > 1 && token.ends_with(':') {
            flush(&mut fields, key.take(), &value);
            value.clear();
            key = Some(token[..token.len() - 1].to_string());
        } else {
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(token);
        }
    }
    flush(&mut fields, key, &value);
    fields
}

fn flush(fields: &mut Vec<(String, String)>, key: Option<String>, value: &str) {
    if let Some(key) = key {
        if !key.is_empty() && !value.is_empty() {
            fields.push((key, value.to_string()));
        }
    }
}
