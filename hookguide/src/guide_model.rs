//! Guide document model
//!
//! This module defines the nested document model (parts → hook sections →
//! content sections) that a guide's markdown is parsed into, the parser that
//! builds it, and the inline run splitter used when rendering its text.

// Submodules
mod document;
pub mod markers;
mod parser;
mod sections;
mod text_run;

// Re-export public types
pub use document::{Document, HookSection, Part};
pub use markers::Markers;
pub use parser::GuideParser;
pub use sections::ContentSection;
pub use text_run::{render_inline, Emphasis, TextRun};

/// Parse guide markdown with the default markers
///
/// Never fails: unrecognized constructs degrade to paragraphs, and content
/// outside any part or hook is dropped.
pub fn parse(text: &str) -> Document {
    parse_with_markers(text, &Markers::default())
}

/// Parse guide markdown with a custom marker vocabulary
pub fn parse_with_markers(text: &str, markers: &Markers) -> Document {
    GuideParser::parse(text, markers)
}
