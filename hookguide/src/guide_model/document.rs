//! Guide document representation

use super::sections::ContentSection;
use serde::{Deserialize, Serialize};

/// A parsed guide: an ordered sequence of parts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document title
    pub title: String,

    /// Parts in display order; every part has at least one hook
    pub parts: Vec<Part>,
}

impl Document {
    /// Create an empty document with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            parts: Vec::new(),
        }
    }

    /// Whether the document holds no parts
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Total number of hook sections across all parts
    pub fn hook_count(&self) -> usize {
        self.parts.iter().map(|p| p.hooks.len()).sum()
    }

    /// Total number of content sections across all hooks
    pub fn section_count(&self) -> usize {
        self.parts
            .iter()
            .flat_map(|p| &p.hooks)
            .map(|h| h.content.len())
            .sum()
    }

    /// Total number of words across all content sections
    pub fn word_count(&self) -> usize {
        self.parts.iter().map(Part::word_count).sum()
    }
}

/// A top-level division of the guide (e.g., "Part 1: React Hooks")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Part heading text with the leading markers stripped
    pub title: String,

    /// First plain line after the part heading, before any hook heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Hook sections in display order; every hook has content
    pub hooks: Vec<HookSection>,
}

impl Part {
    /// Create an empty part
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            hooks: Vec::new(),
        }
    }

    /// Total number of words across this part's hooks
    pub fn word_count(&self) -> usize {
        self.hooks.iter().map(HookSection::word_count).sum()
    }
}

/// A numbered subsection within a part (e.g., "1. useState")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookSection {
    /// Hook heading text, number prefix included
    pub title: String,

    /// Content sections in display order
    pub content: Vec<ContentSection>,
}

impl HookSection {
    /// Create an empty hook section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
        }
    }

    pub fn word_count(&self) -> usize {
        self.content.iter().map(ContentSection::word_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_counts() {
        // Arrange: one part with two hooks
        let mut part = Part::new("Part 1");
        part.hooks.push(HookSection {
            title: "1. useState".to_string(),
            content: vec![
                ContentSection::Paragraph {
                    text: "Holds local state".to_string(),
                },
                ContentSection::Divider,
            ],
        });
        part.hooks.push(HookSection {
            title: "2. useEffect".to_string(),
            content: vec![ContentSection::List {
                items: vec!["runs after render".to_string()],
            }],
        });
        let mut doc = Document::new("Guide");
        doc.parts.push(part);

        // Assert
        assert_eq!(doc.hook_count(), 2);
        assert_eq!(doc.section_count(), 3);
        assert_eq!(doc.word_count(), 6);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_part_description_omitted_from_json_when_absent() {
        let part = Part::new("Part 2");

        let json = serde_json::to_value(&part).unwrap();

        assert!(json.get("description").is_none());
        assert_eq!(json["title"], "Part 2");
    }
}
