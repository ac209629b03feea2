//! Rendering of classified lines into output nodes.

use crate::classify::{ClassifiedLine, LambdaPhase, StructuredReport};

use super::model::{severity_color, OutputNode, INFO_COLOR, SUCCESS_COLOR};

/// Render one classified line under its display timestamp.
///
/// Body line breaks mirror the input exactly: one visual break per newline.
pub fn format_line(line: &ClassifiedLine, timestamp: &str) -> Vec<OutputNode> {
    let node = match line {
        ClassifiedLine::Report(report) => OutputNode {
            timestamp: timestamp.to_string(),
            color: None,
            link: None,
            body: report_body(report),
        },
        ClassifiedLine::Annotated {
            severity,
            link,
            body,
        } => OutputNode {
            timestamp: timestamp.to_string(),
            color: severity_color(*severity),
            link: link.clone(),
            body: body.clone(),
        },
        ClassifiedLine::Lambda { phase, page } => OutputNode {
            timestamp: timestamp.to_string(),
            color: Some(match phase {
                LambdaPhase::Creating => INFO_COLOR,
                LambdaPhase::Created => SUCCESS_COLOR,
            }),
            link: None,
            body: vec![match phase {
                LambdaPhase::Creating => format!("Creating lambda for page \"{page}\""),
                LambdaPhase::Created => format!("Created lambda for page \"{page}\""),
            }],
        },
        ClassifiedLine::JsonResult { label, payload } => OutputNode {
            timestamp: timestamp.to_string(),
            color: None,
            link: None,
            body: std::iter::once(label.clone())
                .chain(payload.split('\n').map(str::to_string))
                .collect(),
        },
        ClassifiedLine::Plain { lines } => OutputNode {
            timestamp: timestamp.to_string(),
            color: None,
            link: None,
            body: lines.clone(),
        },
    };

    vec![node]
}

/// Aligned key/value lines: keys (with colon) padded to the widest key.
fn report_body(report: &StructuredReport) -> Vec<String> {
    let width = report
        .fields
        .iter()
        .map(|(key, _)| key.len() + 1)
        .max()
        .unwrap_or(0);

    report
        .fields
        .iter()
        .map(|(key, value)| format!("{:<width$} {value}", format!("{key}:")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Severity;
    use crate::present::model::WARNING_COLOR;

    const TS: &str = "01.01.2024 - 10:00:00";

    #[test]
    fn test_report_fields_aligned() {
        let report = StructuredReport {
            marker: "REPORT".to_string(),
            fields: vec![
                ("RequestId".to_string(), "abc".to_string()),
                ("Duration".to_string(), "120 ms".to_string()),
                ("Memory Size".to_string(), "128 MB".to_string()),
            ],
        };

        let nodes = format_line(&ClassifiedLine::Report(report), TS);
        assert_eq!(nodes.len(), 1);
        assert_eq!(
            nodes[0].body,
            vec![
                "RequestId:   abc".to_string(),
                "Duration:    120 ms".to_string(),
                "Memory Size: 128 MB".to_string(),
            ]
        );
        assert!(nodes[0].color.is_none());
    }

    #[test]
    fn test_annotated_carries_color_and_link() {
        let line = ClassifiedLine::Annotated {
            severity: Severity::Warning,
            link: Some("https://docs.npmjs.com/files/package-locks".to_string()),
            body: vec!["No lockfile found".to_string()],
        };

        let nodes = format_line(&line, TS);
        assert_eq!(nodes[0].color, Some(WARNING_COLOR));
        assert_eq!(
            nodes[0].link.as_deref(),
            Some("https://docs.npmjs.com/files/package-locks")
        );
        assert_eq!(nodes[0].timestamp, TS);
    }

    #[test]
    fn test_multiline_body_preserved() {
        let line = ClassifiedLine::Plain {
            lines: vec!["one".to_string(), String::new(), "three".to_string()],
        };

        let nodes = format_line(&line, TS);
        assert_eq!(
            nodes[0].body,
            vec!["one".to_string(), String::new(), "three".to_string()]
        );
    }

    #[test]
    fn test_lambda_phases() {
        let creating = format_line(
            &ClassifiedLine::Lambda {
                phase: LambdaPhase::Creating,
                page: "home".to_string(),
            },
            TS,
        );
        assert_eq!(creating[0].color, Some(INFO_COLOR));
        assert_eq!(creating[0].body, vec!["Creating lambda for page \"home\""]);

        let created = format_line(
            &ClassifiedLine::Lambda {
                phase: LambdaPhase::Created,
                page: "home".to_string(),
            },
            TS,
        );
        assert_eq!(created[0].color, Some(SUCCESS_COLOR));
        assert_eq!(created[0].body, vec!["Created lambda for page \"home\""]);
    }

    #[test]
    fn test_json_result_label_then_payload() {
        let line = ClassifiedLine::JsonResult {
            label: "normalized package.json result:".to_string(),
            payload: "{\n  \"name\": \"app\"\n}".to_string(),
        };

        let nodes = format_line(&line, TS);
        assert_eq!(
            nodes[0].body,
            vec![
                "normalized package.json result:".to_string(),
                "{".to_string(),
                "  \"name\": \"app\"".to_string(),
                "}".to_string(),
            ]
        );
    }
}
