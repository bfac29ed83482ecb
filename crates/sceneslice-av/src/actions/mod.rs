//! Media processing actions.

mod extract;

pub use extract::{extract_slice, ExtractRequest, StreamMode, ToolOutput};
