//! Ordered pattern rule chain.
//!
//! Each rule recognizes one semantically meaningful line shape. The chain is
//! an explicit list walked in priority order; the first matching rule wins
//! and later rules are never consulted.

use tracing::trace;

use super::model::{ClassifiedLine, LambdaPhase, Severity};

/// One classification rule. Rules are stateless; priority lives in the chain.
pub trait LineRule: Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, text: &str) -> Option<ClassifiedLine>;
}

/// The rule chain, in strict priority order.
static RULES: [&dyn LineRule; 5] = [
    &LambdaCreating,
    &LambdaCreated,
    &ManifestField,
    &NormalizedResult,
    &SeverityPrefix,
];

/// Classify sanitized text against the rule chain.
///
/// A pure function of the text; anything no rule recognizes falls through to
/// `Plain` with newline structure preserved.
pub fn classify(text: &str) -> ClassifiedLine {
    for rule in RULES {
        if let Some(line) = rule.apply(text) {
            trace!(rule = rule.name(), "line matched classification rule");
            return line;
        }
    }
    ClassifiedLine::plain(text)
}

// ─── Lambda provisioning notices ────────────────────────────

const CREATING_PREFIX: &str = "Creating lambda for page: ";
const CREATED_PREFIX: &str = "Created lambda for page: ";

/// Extract the quoted page name after a lambda-notice prefix.
/// A missing or unterminated quote means the rule does not match.
fn lambda_page(text: &str, prefix: &str) -> Option<String> {
    let rest = text.trim().strip_prefix(prefix)?;
    let rest = rest.strip_prefix('"')?;
    let (page, _) = rest.split_once('"')?;
    Some(page.to_string())
}

struct LambdaCreating;

impl LineRule for LambdaCreating {
    fn name(&self) -> &'static str {
        "lambda-creating"
    }

    fn apply(&self, text: &str) -> Option<ClassifiedLine> {
        lambda_page(text, CREATING_PREFIX).map(|page| ClassifiedLine::Lambda {
            phase: LambdaPhase::Creating,
            page,
        })
    }
}

struct LambdaCreated;

impl LineRule for LambdaCreated {
    fn name(&self) -> &'static str {
        "lambda-created"
    }

    fn apply(&self, text: &str) -> Option<ClassifiedLine> {
        lambda_page(text, CREATED_PREFIX).map(|page| ClassifiedLine::Lambda {
            phase: LambdaPhase::Created,
            page,
        })
    }
}

// ─── Missing manifest fields ────────────────────────────────

/// Known package-manifest warnings and their documentation links.
const MANIFEST_PHRASES: [(&str, &str); 3] = [
    (
        "No license field",
        "https://docs.npmjs.com/files/package.json#license",
    ),
    (
        "No repository field",
        "https://docs.npmjs.com/files/package.json#repository",
    ),
    (
        "No lockfile found",
        "https://docs.npmjs.com/files/package-locks",
    ),
];

struct ManifestField;

impl LineRule for ManifestField {
    fn name(&self) -> &'static str {
        "manifest-field"
    }

    fn apply(&self, text: &str) -> Option<ClassifiedLine> {
        for (phrase, link) in MANIFEST_PHRASES {
            if let Some(index) = text.find(phrase) {
                return Some(ClassifiedLine::Annotated {
                    severity: Severity::Warning,
                    link: Some(link.to_string()),
                    body: text[index..]
                        .trim_end()
                        .split('\n')
                        .map(str::to_string)
                        .collect(),
                });
            }
        }
        None
    }
}

// ─── Normalized manifest dump ───────────────────────────────

const NORMALIZED_LABEL: &str = "normalized package.json result:";

struct NormalizedResult;

impl LineRule for NormalizedResult {
    fn name(&self) -> &'static str {
        "normalized-result"
    }

    fn apply(&self, text: &str) -> Option<ClassifiedLine> {
        // The payload is carried as opaque text: it is usually JSON but is
        // never parsed, so malformed dumps cannot fail classification.
        let payload = text.trim_start().strip_prefix(NORMALIZED_LABEL)?;
        Some(ClassifiedLine::JsonResult {
            label: NORMALIZED_LABEL.to_string(),
            payload: payload.trim_start().to_string(),
        })
    }
}

// ─── Severity prefixes ──────────────────────────────────────

/// Severity vocabulary; the bool marks prefixes that require the colon form.
const SEVERITY_PREFIXES: [(&str, Severity, bool); 5] = [
    ("info", Severity::Info, false),
    ("warning", Severity::Warning, false),
    ("success", Severity::Success, false),
    ("done", Severity::Done, false),
    ("mode", Severity::Mode, true),
];

struct SeverityPrefix;

impl LineRule for SeverityPrefix {
    fn name(&self) -> &'static str {
        "severity-prefix"
    }

    fn apply(&self, text: &str) -> Option<ClassifiedLine> {
        let trimmed = text.trim_start();
        for (word, severity, needs_colon) in SEVERITY_PREFIXES {
            if trimmed.len() < word.len()
                || !trimmed.is_char_boundary(word.len())
                || !trimmed[..word.len()].eq_ignore_ascii_case(word)
            {
                continue;
            }

            // The prefix must be delimited: `:`, whitespace, or end of line.
            let rest = &trimmed[word.len()..];
            let body_text = match rest.chars().next() {
                None if needs_colon => continue,
                None => "",
                Some(':') => &rest[1..],
                Some(c) if c.is_whitespace() && !needs_colon => rest,
                _ => continue,
            };

            let body_text = body_text.trim_start();
            let body = if body_text.is_empty() {
                Vec::new()
            } else {
                body_text.split('\n').map(str::to_string).collect()
            };

            return Some(ClassifiedLine::Annotated {
                severity,
                link: None,
                body,
            });
        }
        None
    }
}
