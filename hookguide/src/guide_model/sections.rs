//! Content-level guide elements
//!
//! This module defines the structured representation of the content inside a
//! hook section (headings, paragraphs, code blocks, lists, tables, dividers).

use serde::{Deserialize, Serialize};

/// One unit of displayable content inside a hook section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentSection {
    /// A sub-heading inside a hook section
    Heading {
        /// Heading level (always 3 or deeper; levels 1-2 are parts and hooks)
        level: usize,
        /// Heading text with the leading markers stripped
        text: String,
    },

    /// A paragraph of text
    ///
    /// Consecutive source lines are joined with single spaces
    Paragraph {
        /// Paragraph text, inline markers left intact
        text: String,
    },

    /// A fenced code block
    #[serde(rename = "code")]
    CodeBlock {
        /// Code content, trimmed
        text: String,
        /// Language tag from the opening fence (e.g., "tsx", "bash")
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },

    /// A bulleted list
    List {
        /// List items with the bullet markers stripped
        items: Vec<String>,
    },

    /// A pipe table
    ///
    /// Separator rows (| --- | :-: |) never appear in `rows`
    Table {
        /// Header row cells
        headers: Vec<String>,
        /// Data rows, each a sequence of cells
        rows: Vec<Vec<String>>,
    },

    /// A horizontal rule
    Divider,
}

impl ContentSection {
    /// Count whitespace-separated words in this section
    pub fn word_count(&self) -> usize {
        match self {
            ContentSection::Heading { text, .. }
            | ContentSection::Paragraph { text }
            | ContentSection::CodeBlock { text, .. } => text.split_whitespace().count(),
            ContentSection::List { items } => {
                items.iter().map(|i| i.split_whitespace().count()).sum()
            }
            ContentSection::Table { headers, rows } => {
                let header_count: usize =
                    headers.iter().map(|h| h.split_whitespace().count()).sum();
                let row_count: usize = rows
                    .iter()
                    .flat_map(|r| r.iter().map(|c| c.split_whitespace().count()))
                    .sum();
                header_count + row_count
            }
            ContentSection::Divider => 0,
        }
    }

    /// Short lowercase name of the section kind, as used in serialized output
    pub fn kind(&self) -> &'static str {
        match self {
            ContentSection::Heading { .. } => "heading",
            ContentSection::Paragraph { .. } => "paragraph",
            ContentSection::CodeBlock { .. } => "code",
            ContentSection::List { .. } => "list",
            ContentSection::Table { .. } => "table",
            ContentSection::Divider => "divider",
        }
    }
}
