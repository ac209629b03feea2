//! Bucketing and temporal grouping of log records.

pub mod bucket;
pub mod compress;
pub mod key;

pub use bucket::{bucketize, BucketLogs, BucketSet, OTHERS_BUCKET, OUTPUT_BUCKET};
pub use compress::{compress, TimeGroup};
pub use key::source_key;
