//! Presentation assembly: the end-to-end pass over one record batch.

use tracing::debug;

use crate::buckets::{bucketize, compress};
use crate::classify::classify_raw;
use crate::conf::PresenterConfig;
use crate::record::LogRecord;

use super::format::format_line;
use super::model::{RenderGroup, RenderRequest};

/// Assemble render requests for one batch of deployment log records.
///
/// Buckets by source identity, groups each bucket by display timestamp
/// (primary records ahead of output records), then classifies and formats
/// every record's text. Buckets that received no records are skipped.
/// Each call is independent; no state survives between batches.
pub fn present(records: Vec<LogRecord>, conf: &PresenterConfig) -> Vec<RenderRequest> {
    let buckets = bucketize(records, conf);
    let mut requests = Vec::new();

    for (name, logs) in buckets.iter() {
        if logs.is_empty() {
            continue;
        }

        let groups = compress(logs.primary.iter().chain(logs.output.iter()), conf);
        let render_groups: Vec<RenderGroup> = groups
            .iter()
            .map(|(timestamp, records)| RenderGroup {
                timestamp: timestamp.to_string(),
                nodes: records
                    .iter()
                    .flat_map(|record| format_line(&classify_raw(&record.text), timestamp))
                    .collect(),
            })
            .collect();

        requests.push(RenderRequest {
            bucket: name.to_string(),
            groups: render_groups,
        });
    }

    debug!(requests = requests.len(), "assembled render requests");
    requests
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::present::model::INFO_COLOR;
    use crate::record::{RecordInfo, RecordRole};

    fn record(
        text: &str,
        role: RecordRole,
        entrypoint: Option<&str>,
        path: Option<&str>,
        second: u32,
    ) -> LogRecord {
        LogRecord::stdout(
            text,
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, second).single(),
            RecordInfo {
                role,
                entrypoint: entrypoint.map(str::to_string),
                path: path.map(str::to_string),
                name: None,
            },
        )
    }

    #[test]
    fn test_empty_batch_yields_no_requests() {
        let requests = present(Vec::new(), &PresenterConfig::default());
        assert!(requests.is_empty());
    }

    #[test]
    fn test_every_record_becomes_exactly_one_node() {
        let records = vec![
            record("info build started", RecordRole::Build, Some("pages/index.js"), None, 0),
            record("GET /api/hello 200", RecordRole::Output, None, Some("api/hello.js"), 1),
            record("stray line", RecordRole::Unknown, None, None, 2),
            record("REPORT RequestId: abc\tDuration: 5 ms", RecordRole::Output, None, None, 3),
        ];
        let total = records.len();

        let requests = present(records, &PresenterConfig::default());
        let nodes: usize = requests
            .iter()
            .flat_map(|r| r.groups.iter())
            .map(|g| g.nodes.len())
            .sum();
        assert_eq!(nodes, total);
    }

    #[test]
    fn test_empty_buckets_skipped() {
        let records = vec![record(
            "info hello",
            RecordRole::Build,
            Some("pages/index.js"),
            None,
            0,
        )];

        let requests = present(records, &PresenterConfig::default());
        let buckets: Vec<&str> = requests.iter().map(|r| r.bucket.as_str()).collect();
        // The reserved buckets got nothing and are not rendered.
        assert_eq!(buckets, vec!["pages/index.js"]);
    }

    #[test]
    fn test_groups_keyed_by_second() {
        let records = vec![
            record("one", RecordRole::Build, Some("a.js"), None, 0),
            record("two", RecordRole::Build, Some("a.js"), None, 0),
            record("three", RecordRole::Build, Some("a.js"), None, 5),
        ];

        let requests = present(records, &PresenterConfig::default());
        assert_eq!(requests.len(), 1);
        let groups = &requests[0].groups;
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].timestamp, "01.01.2024 - 10:00:00");
        assert_eq!(groups[0].nodes.len(), 2);
        assert_eq!(groups[1].timestamp, "01.01.2024 - 10:00:05");
        assert_eq!(groups[1].nodes.len(), 1);
    }

    #[test]
    fn test_classification_flows_into_nodes() {
        let records = vec![record(
            "\u{1b}[36minfo\u{1b}[0m Compiled successfully",
            RecordRole::Build,
            Some("pages/index.js"),
            None,
            0,
        )];

        let requests = present(records, &PresenterConfig::default());
        let node = &requests[0].groups[0].nodes[0];
        assert_eq!(node.color, Some(INFO_COLOR));
        assert_eq!(node.body, vec!["Compiled successfully".to_string()]);
        assert_eq!(node.timestamp, "01.01.2024 - 10:00:00");
    }

    #[test]
    fn test_primary_precedes_output_within_bucket() {
        let records = vec![
            record("from output", RecordRole::Output, None, Some("api/hello.js"), 0),
            record("from build", RecordRole::Build, None, Some("api/hello.js"), 0),
        ];

        let requests = present(records, &PresenterConfig::default());
        let nodes = &requests[0].groups[0].nodes;
        assert_eq!(nodes[0].body, vec!["from build".to_string()]);
        assert_eq!(nodes[1].body, vec!["from output".to_string()]);
    }
}
