//! Record bucketing by source identity.
//!
//! Each call builds a fresh `BucketSet`; nothing is accumulated across
//! batches, so two dashboard refreshes can never see each other's records.

use indexmap::IndexMap;
use tracing::debug;

use super::key::source_key;
use crate::conf::PresenterConfig;
use crate::record::{LogRecord, RecordRole};

/// Reserved bucket for output-role records with no derivable source.
pub const OUTPUT_BUCKET: &str = "output";

/// Reserved bucket for records with no source identity at all.
pub const OTHERS_BUCKET: &str = "others";

/// The two record sequences of one bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketLogs {
    pub primary: Vec<LogRecord>,
    pub output: Vec<LogRecord>,
}

impl BucketLogs {
    pub fn len(&self) -> usize {
        self.primary.len() + self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.output.is_empty()
    }
}

/// Buckets keyed by source identity, iterated in first-seen order.
///
/// The reserved `output` and `others` buckets are seeded up front so they
/// always exist and lead the display order.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketSet {
    buckets: IndexMap<String, BucketLogs>,
}

impl BucketSet {
    pub fn new() -> Self {
        let mut buckets = IndexMap::new();
        buckets.insert(OUTPUT_BUCKET.to_string(), BucketLogs::default());
        buckets.insert(OTHERS_BUCKET.to_string(), BucketLogs::default());
        Self { buckets }
    }

    pub fn get(&self, name: &str) -> Option<&BucketLogs> {
        self.buckets.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BucketLogs)> {
        self.buckets.iter().map(|(name, logs)| (name.as_str(), logs))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Number of buckets, reserved ones included.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total records across every bucket and sub-sequence.
    pub fn record_count(&self) -> usize {
        self.buckets.values().map(BucketLogs::len).sum()
    }

    fn entry(&mut self, name: String) -> &mut BucketLogs {
        self.buckets.entry(name).or_default()
    }
}

impl Default for BucketSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Group records into named buckets by source identity and role.
///
/// Every record lands in exactly one bucket and one sub-sequence, in input
/// order; non-reserved buckets are created lazily on first reference. An
/// empty batch yields the seeded-but-empty set.
pub fn bucketize(records: Vec<LogRecord>, conf: &PresenterConfig) -> BucketSet {
    let mut set = BucketSet::new();

    for record in records {
        let key = source_key(&record.info, &conf.function_suffix);
        let is_output = record.info.role == RecordRole::Output;

        match (is_output, key) {
            (true, Some(key)) => set.entry(key).output.push(record),
            (true, None) => set.entry(OUTPUT_BUCKET.to_string()).primary.push(record),
            (false, Some(key)) => set.entry(key).primary.push(record),
            (false, None) => set.entry(OTHERS_BUCKET.to_string()).primary.push(record),
        }
    }

    debug!(
        buckets = set.len(),
        records = set.record_count(),
        "bucketized log batch"
    );
    set
}
