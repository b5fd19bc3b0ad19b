//! Recognized line markers
//!
//! The parser recognizes a fixed vocabulary of line prefixes plus two
//! configurable phrase lists: the Part heading allow-list and the skip
//! markers.

/// Heading phrases that start a skipped region (table of contents,
/// references, appendices). Matched as substrings of heading lines.
pub const SKIP_MARKERS: &[&str] = &[
    "Table of Contents",
    "Appendix",
    "สารบัญ",
    "แหล่งอ้างอิง",
    "สรุปตาราง",
];

/// Phrases that make a level-1 heading a Part heading
pub const PART_MARKERS: &[&str] = &["Part 1", "Part 2"];

/// Title used when the guide has no level-1 title heading of its own
pub const DEFAULT_TITLE: &str = "React Hooks & Next.js Hooks Guide";

/// Prefix of a Part heading line
pub const PART_HEADING_PREFIX: &str = "# ";

/// Prefix of a hook heading line
pub const HOOK_HEADING_PREFIX: &str = "## ";

/// Character repeated at the start of any heading line
pub const HEADING_MARKER: char = '#';

/// Opening and closing fence of a code block
pub const CODE_FENCE: &str = "```";

/// A line consisting solely of this marker is a divider
pub const HORIZONTAL_RULE: &str = "---";

/// Table cell delimiter
pub const TABLE_DELIMITER: char = '|';

/// Bullet prefixes that start a list item
pub const BULLET_MARKERS: &[&str] = &["- ", "* "];

/// The configurable part of the marker vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Skip-marker phrases
    pub skip: Vec<String>,
    /// Part heading allow-list phrases
    pub parts: Vec<String>,
    /// Fallback document title
    pub default_title: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            skip: SKIP_MARKERS.iter().map(|s| s.to_string()).collect(),
            parts: PART_MARKERS.iter().map(|s| s.to_string()).collect(),
            default_title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Markers {
    /// Whether `line` is a heading containing one of the skip phrases
    pub fn is_skip_heading(&self, line: &str) -> bool {
        line.starts_with(HEADING_MARKER) && self.skip.iter().any(|m| line.contains(m.as_str()))
    }

    /// Whether `line` is a Part heading
    pub fn is_part_heading(&self, line: &str) -> bool {
        line.starts_with(PART_HEADING_PREFIX) && self.parts.iter().any(|m| line.contains(m.as_str()))
    }
}

/// Strip the leading heading markers and surrounding whitespace
pub fn heading_text(line: &str) -> &str {
    line.trim_start_matches(HEADING_MARKER).trim()
}

/// Number of leading heading markers
pub fn heading_level(line: &str) -> usize {
    line.chars().take_while(|c| *c == HEADING_MARKER).count()
}

/// Whether a trimmed line starts with a bullet marker
pub fn is_bullet(trimmed: &str) -> bool {
    BULLET_MARKERS.iter().any(|b| trimmed.starts_with(b))
}

/// Whether the line is a code fence
pub fn is_fence(line: &str) -> bool {
    line.starts_with(CODE_FENCE)
}

/// Whether the line is a divider
pub fn is_divider(line: &str) -> bool {
    line.trim() == HORIZONTAL_RULE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_heading_requires_level_one() {
        let markers = Markers::default();

        assert!(markers.is_part_heading("# Part 1: React Hooks"));
        assert!(!markers.is_part_heading("## Part 1: React Hooks"));
        assert!(!markers.is_part_heading("# Part 3"));
    }

    #[test]
    fn test_skip_heading_requires_heading_line() {
        let markers = Markers::default();

        assert!(markers.is_skip_heading("## 📖 สารบัญ"));
        assert!(markers.is_skip_heading("# Appendix A"));
        assert!(!markers.is_skip_heading("See the Appendix for details"));
    }

    #[test]
    fn test_heading_helpers() {
        assert_eq!(heading_level("#### Notes"), 4);
        assert_eq!(heading_text("###   Syntax  "), "Syntax");
        assert_eq!(heading_level("plain"), 0);
    }

    #[test]
    fn test_bullets_need_trailing_space() {
        assert!(is_bullet("- item"));
        assert!(is_bullet("* item"));
        assert!(!is_bullet("**bold**"));
        assert!(!is_bullet("---"));
    }
}
