//! Helper functions for presenters
//!
//! Date formatting, share links and small HTML builders used when items
//! are rendered.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
