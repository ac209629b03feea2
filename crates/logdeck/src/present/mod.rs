//! Output-boundary presentation: node model, line formatting, assembly.

pub mod compose;
pub mod format;
pub mod model;

pub use compose::present;
pub use format::format_line;
pub use model::{severity_color, OutputNode, RenderGroup, RenderRequest};
