//! Inline text runs
//!
//! A text run is a span of text with one emphasis kind applied. Guide text
//! keeps its inline markers in the document model; the rendering layer
//! splits it into runs with [`render_inline`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.+?)`").unwrap());

/// Emphasis applied to a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Plain,
    Bold,
    Italic,
    Code,
}

/// A span of text with consistent formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content, markers removed
    pub text: String,

    /// Emphasis applied to the whole run
    pub emphasis: Emphasis,
}

impl TextRun {
    /// Create a new plain text run
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_emphasis(text, Emphasis::Plain)
    }

    pub fn with_emphasis(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }

    /// Check if this text run has any formatting applied
    pub fn has_formatting(&self) -> bool {
        self.emphasis != Emphasis::Plain
    }
}

/// Split a text span into plain and emphasized runs
///
/// Finds the earliest-starting bold, italic or code marker pair, emits the
/// text before it as a plain run and the enclosed text as an emphasized run,
/// then continues on the remainder. Markers do not nest: the leftmost match
/// wins, and a tie on start offset goes to bold, then italic, then code.
/// A marker pair with nothing between it stays literal.
pub fn render_inline(text: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let Some((emphasis, start, end, inner)) = earliest_marker(remaining) else {
            runs.push(TextRun::new(remaining));
            break;
        };

        if start > 0 {
            runs.push(TextRun::new(&remaining[..start]));
        }
        runs.push(TextRun::with_emphasis(inner, emphasis));
        remaining = &remaining[end..];
    }

    runs
}

/// Locate the winning marker match in `text`
///
/// Returns the emphasis kind, the byte range of the whole match and the
/// captured inner text.
fn earliest_marker(text: &str) -> Option<(Emphasis, usize, usize, &str)> {
    // Priority order; `min_by_key` keeps the first of equal keys
    [
        (Emphasis::Bold, &*BOLD),
        (Emphasis::Italic, &*ITALIC),
        (Emphasis::Code, &*CODE),
    ]
    .into_iter()
    .filter_map(|(emphasis, re)| {
        let caps = re.captures(text)?;
        let whole = caps.get(0)?;
        let inner = caps.get(1).map_or("", |m| m.as_str());
        Some((emphasis, whole.start(), whole.end(), inner))
    })
    .min_by_key(|(_, start, _, _)| *start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_markers_in_order() {
        // Arrange
        let text = "**bold** and *italic* and `code`";

        // Act
        let runs = render_inline(text);

        // Assert
        assert_eq!(
            runs,
            vec![
                TextRun::with_emphasis("bold", Emphasis::Bold),
                TextRun::new(" and "),
                TextRun::with_emphasis("italic", Emphasis::Italic),
                TextRun::new(" and "),
                TextRun::with_emphasis("code", Emphasis::Code),
            ]
        );
    }

    #[test]
    fn test_plain_text_is_single_run() {
        let runs = render_inline("no markers here");

        assert_eq!(runs, vec![TextRun::new("no markers here")]);
        assert!(!runs[0].has_formatting());
    }

    #[test]
    fn test_empty_text_has_no_runs() {
        assert!(render_inline("").is_empty());
    }

    #[test]
    fn test_trailing_plain_text_kept() {
        let runs = render_inline("call `useState` first");

        assert_eq!(
            runs,
            vec![
                TextRun::new("call "),
                TextRun::with_emphasis("useState", Emphasis::Code),
                TextRun::new(" first"),
            ]
        );
    }

    #[test]
    fn test_leftmost_match_wins_over_priority() {
        // Code starts before bold, so it is taken first
        let runs = render_inline("`a` **b**");

        assert_eq!(runs[0], TextRun::with_emphasis("a", Emphasis::Code));
        assert_eq!(runs[2], TextRun::with_emphasis("b", Emphasis::Bold));
    }

    #[test]
    fn test_markers_do_not_nest() {
        // The bold pair is matched as a whole; the backticks inside stay literal
        let runs = render_inline("**use `ref`**");

        assert_eq!(runs, vec![TextRun::with_emphasis("use `ref`", Emphasis::Bold)]);
    }

    #[test]
    fn test_unpaired_marker_is_plain() {
        let runs = render_inline("5 * 3");

        assert_eq!(runs, vec![TextRun::new("5 * 3")]);
    }

    #[test]
    fn test_empty_marker_pair_is_plain() {
        assert_eq!(render_inline("a ** b"), vec![TextRun::new("a ** b")]);
        assert_eq!(render_inline("empty `` code"), vec![TextRun::new("empty `` code")]);
    }
}
