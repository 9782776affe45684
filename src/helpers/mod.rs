//! Helper functions for HTML output

pub mod html;

pub use html::{html_escape, link_to};
