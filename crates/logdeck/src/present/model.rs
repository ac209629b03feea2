//! Output-boundary presentation types.

use serde::Serialize;

use crate::classify::Severity;

/// Display palette, shared with the deployment state colors.
pub const INFO_COLOR: &str = "#0076FF";
pub const WARNING_COLOR: &str = "#F5A623";
pub const SUCCESS_COLOR: &str = "#2CBE4E";
pub const MODE_COLOR: &str = "#EAEAEA";

pub fn severity_color(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Info => Some(INFO_COLOR),
        Severity::Warning => Some(WARNING_COLOR),
        Severity::Success | Severity::Done => Some(SUCCESS_COLOR),
        Severity::Mode => Some(MODE_COLOR),
        Severity::None => None,
    }
}

/// One renderable node: timestamp label, optional color tag and link, and
/// body lines with their break structure intact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputNode {
    pub timestamp: String,
    pub color: Option<&'static str>,
    pub link: Option<String>,
    pub body: Vec<String>,
}

/// All nodes sharing one display timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderGroup {
    pub timestamp: String,
    pub nodes: Vec<OutputNode>,
}

/// Everything the renderer needs for one bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRequest {
    pub bucket: String,
    pub groups: Vec<RenderGroup>,
}
