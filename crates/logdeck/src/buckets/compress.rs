//! Temporal compression: grouping records under formatted-timestamp keys.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::conf::PresenterConfig;
use crate::record::LogRecord;

/// Records grouped by display timestamp, keys in first-occurrence order.
///
/// Keys are never re-sorted: the remote log source delivers records in
/// non-decreasing time order, so first-occurrence order is chronological
/// display order.
#[derive(Debug, Default)]
pub struct TimeGroup<'a> {
    groups: IndexMap<String, Vec<&'a LogRecord>>,
}

impl<'a> TimeGroup<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a LogRecord])> {
        self.groups
            .iter()
            .map(|(key, records)| (key.as_str(), records.as_slice()))
    }

    pub fn get(&self, key: &str) -> Option<&[&'a LogRecord]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Number of distinct timestamp keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total records across all timestamp groups.
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Group records by their formatted timestamp, preserving arrival order
/// within each key. Records without a usable date land under the configured
/// unknown-time label. An empty input yields an empty mapping.
pub fn compress<'a, I>(records: I, conf: &PresenterConfig) -> TimeGroup<'a>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let mut groups: IndexMap<String, Vec<&'a LogRecord>> = IndexMap::new();

    for record in records {
        let key = timestamp_key(record.date, conf);
        groups.entry(key).or_default().push(record);
    }

    TimeGroup { groups }
}

fn timestamp_key(date: Option<DateTime<Utc>>, conf: &PresenterConfig) -> String {
    let Some(date) = date else {
        return conf.unknown_time_label.clone();
    };

    // chrono surfaces an invalid format string as a fmt error at render
    // time; degrade to the unknown-time label instead of panicking.
    let mut key = String::new();
    match write!(key, "{}", date.format(&conf.timestamp_format)) {
        Ok(()) => key,
        Err(_) => conf.unknown_time_label.clone(),
    }
}
