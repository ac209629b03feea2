//! Classified line model.

use serde::Serialize;

/// Severity derived from a recognized line prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Success,
    Done,
    Mode,
    None,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Done => "done",
            Severity::Mode => "mode",
            Severity::None => "none",
        }
    }
}

/// Lambda provisioning phase reported by the build system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LambdaPhase {
    Creating,
    Created,
}

/// A parsed request-lifecycle report: marker plus ordered key/value fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredReport {
    pub marker: String,
    pub fields: Vec<(String, String)>,
}

/// The result of classifying one sanitized text block.
///
/// Exactly one variant is produced per input; the classifier never emits more.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ClassifiedLine {
    Report(StructuredReport),
    Annotated {
        severity: Severity,
        link: Option<String>,
        body: Vec<String>,
    },
    Lambda {
        phase: LambdaPhase,
        page: String,
    },
    JsonResult {
        label: String,
        payload: String,
    },
    Plain {
        lines: Vec<String>,
    },
}

impl ClassifiedLine {
    /// Fallback variant: the text split on newlines, nothing interpreted.
    pub fn plain(text: &str) -> Self {
        Self::Plain {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_preserves_line_breaks() {
        let line = ClassifiedLine::plain("first\nsecond\n\nfourth");
        assert_eq!(
            line,
            ClassifiedLine::Plain {
                lines: vec![
                    "first".to_string(),
                    "second".to_string(),
                    String::new(),
                    "fourth".to_string(),
                ]
            }
        );
    }

    #[test]
    fn test_severity_as_str() {
        assert_eq!(Severity::Warning.as_str(), "warning");
        assert_eq!(Severity::None.as_str(), "none");
    }
}
