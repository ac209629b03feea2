//! Log line classification and structuring.
//!
//! Converts raw log text into tagged structured variants.
//!
//! # Architecture
//!
//! - `ansi.rs`: control-sequence sanitizer
//! - `report.rs`: request-lifecycle report detector
//! - `rules.rs`: ordered pattern rule chain
//! - `model.rs`: classified line model
//!
//! # Guarantees
//!
//! - Total: every text block yields exactly one `ClassifiedLine`
//! - Deterministic: classification is a pure function of the sanitized text
//! - Panic-isolated: one bad line degrades to plain text, never a batch abort

pub mod ansi;
pub mod model;
pub mod report;
pub mod rules;

pub use ansi::sanitize;
pub use model::{ClassifiedLine, LambdaPhase, Severity, StructuredReport};
pub use report::try_parse_report;
pub use rules::classify;

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::warn;

/// Sanitize and classify one raw log text block.
///
/// Runs the report detector first, then the rule chain. A panic inside any
/// rule is caught and the record falls back to plain lines, so a single
/// malformed record never takes down the rest of the batch.
pub fn classify_raw(raw: &str) -> ClassifiedLine {
    let clean = sanitize(raw);

    let attempt = catch_unwind(AssertUnwindSafe(|| match try_parse_report(&clean) {
        Some(report) => ClassifiedLine::Report(report),
        None => classify(&clean),
    }));

    match attempt {
        Ok(line) => line,
        Err(_) => {
            warn!("classification panicked; falling back to plain lines");
            ClassifiedLine::plain(&clean)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitizes_before_matching() {
        // The color codes would otherwise break the prefix match.
        let line = classify_raw("\u{1b}[36minfo\u{1b}[0m Compiled successfully");
        assert_eq!(
            line,
            ClassifiedLine::Annotated {
                severity: Severity::Info,
                link: None,
                body: vec!["Compiled successfully".to_string()],
            }
        );
    }

    #[test]
    fn test_report_takes_precedence_over_rules() {
        let line = classify_raw("REPORT RequestId: abc\tDuration: 120 ms");
        match line {
            ClassifiedLine::Report(report) => {
                assert_eq!(report.marker, "REPORT");
                assert_eq!(report.fields.len(), 2);
            }
            other => panic!("expected Report, got {other:?}"),
        }
    }

    #[test]
    fn test_unmatched_text_is_plain() {
        let line = classify_raw("\u{1b}[2mwebpack compiled\u{1b}[0m");
        assert_eq!(
            line,
            ClassifiedLine::Plain {
                lines: vec!["webpack compiled".to_string()]
            }
        );
    }
}
