//! Output rendering for block sequences.
//!
//! The HTML renderer is the canonical presentation used both for on-screen
//! display and for export.

mod html;

pub use html::{escape_html, render};
