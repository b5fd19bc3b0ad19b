//! Line-oriented guide parser
//!
//! Converts raw guide markdown into a [`Document`] in a single left-to-right
//! scan. All in-flight state (open part, open hook, paragraph and code
//! buffers) lives in [`GuideParser`] and is flushed at the end of input.

use super::document::{Document, HookSection, Part};
use super::markers::{self, Markers, TABLE_DELIMITER};
use super::sections::ContentSection;
use regex::Regex;
use std::sync::LazyLock;

static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());
static SEPARATOR_CELL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-:|\s]+$").unwrap());

/// Parser state for converting guide lines to a document
pub struct GuideParser<'m> {
    /// Marker vocabulary in effect
    markers: &'m Markers,

    /// Title taken from the first non-part level-1 heading
    title: Option<String>,

    /// Completed parts
    parts: Vec<Part>,

    /// Part currently being built
    current_part: Option<Part>,

    /// Hook currently being built
    current_hook: Option<HookSection>,

    /// Accumulated paragraph text
    paragraph: String,

    /// Accumulated code block text
    code: String,

    /// Language of the open code block
    code_language: Option<String>,

    /// Whether a code fence is open
    in_code_block: bool,

    /// Whether we are inside a skipped region
    skipping: bool,
}

impl<'m> GuideParser<'m> {
    /// Create a new parser
    pub fn new(markers: &'m Markers) -> Self {
        Self {
            markers,
            title: None,
            parts: Vec::new(),
            current_part: None,
            current_hook: None,
            paragraph: String::new(),
            code: String::new(),
            code_language: None,
            in_code_block: false,
            skipping: false,
        }
    }

    /// Parse guide text into a document
    ///
    /// # Parameters
    /// * `content` - Raw guide markdown
    /// * `markers` - Marker vocabulary to recognize
    ///
    /// # Returns
    /// * `Document` - The parsed document; empty when no part heading matched
    pub fn parse(content: &str, markers: &'m Markers) -> Document {
        let mut parser = Self::new(markers);
        let lines: Vec<&str> = content.lines().collect();

        let mut i = 0;
        while i < lines.len() {
            i += parser.process_line(&lines, i);
        }

        parser.finalize()
    }

    /// Process the line at `index`
    ///
    /// Returns how many lines were consumed (tables and lists consume runs).
    fn process_line(&mut self, lines: &[&str], index: usize) -> usize {
        let line = lines[index];

        if self.in_code_block {
            if markers::is_fence(line) {
                self.finish_code_block();
            } else {
                self.code.push_str(line);
                self.code.push('\n');
            }
            return 1;
        }

        if self.markers.is_skip_heading(line) {
            self.start_skip(line);
            return 1;
        }

        if self.markers.is_part_heading(line) {
            self.start_part(markers::heading_text(line));
            return 1;
        }

        if self.skipping {
            return 1;
        }

        self.capture_description(line);

        if self.is_hook_heading(line) {
            self.start_hook(markers::heading_text(line));
            return 1;
        }

        if markers::is_fence(line) {
            self.start_code_block(line);
            return 1;
        }

        if line.starts_with(markers::HEADING_MARKER) {
            self.handle_heading(line);
            return 1;
        }

        if markers::is_divider(line) {
            self.finish_paragraph();
            self.add_section(ContentSection::Divider);
            return 1;
        }

        if line.trim_start().starts_with(TABLE_DELIMITER) {
            if let Some(consumed) = self.consume_table(lines, index) {
                return consumed;
            }
        }

        if markers::is_bullet(line.trim()) {
            return self.consume_list(lines, index);
        }

        self.handle_text(line);
        1
    }

    /// Whether the line opens a hook section in the current part
    fn is_hook_heading(&self, line: &str) -> bool {
        self.current_part.is_some()
            && line.starts_with(markers::HOOK_HEADING_PREFIX)
            && NUMBERED.is_match(markers::heading_text(line))
    }

    /// Enter a skipped region
    fn start_skip(&mut self, line: &str) {
        log::debug!("Skipping region under heading: {}", markers::heading_text(line));
        self.finish_paragraph();
        self.finish_hook();
        self.skipping = true;
    }

    /// Close the current part and open a new one
    fn start_part(&mut self, title: &str) {
        self.finish_part();
        self.skipping = false;
        self.current_part = Some(Part::new(title));
    }

    /// Record the part description from the first eligible line
    fn capture_description(&mut self, line: &str) {
        if self.current_hook.is_some() {
            return;
        }
        let Some(part) = self.current_part.as_mut() else {
            return;
        };
        if part.description.is_some() {
            return;
        }

        let trimmed = line.trim();
        if trimmed.is_empty()
            || line.starts_with(markers::HEADING_MARKER)
            || line.starts_with(markers::HORIZONTAL_RULE)
            || markers::is_fence(line)
            || NUMBERED.is_match(trimmed)
        {
            return;
        }

        part.description = Some(trimmed.to_string());
    }

    /// Close the current hook and open a new one
    fn start_hook(&mut self, title: &str) {
        self.finish_paragraph();
        self.finish_hook();
        self.current_hook = Some(HookSection::new(title));
    }

    /// Open a fenced code block
    fn start_code_block(&mut self, line: &str) {
        self.finish_paragraph();
        let language = line[markers::CODE_FENCE.len()..].trim();
        self.code_language = (!language.is_empty()).then(|| language.to_string());
        self.code.clear();
        self.in_code_block = true;
    }

    /// Close the fenced code block and emit it
    fn finish_code_block(&mut self) {
        self.in_code_block = false;
        let text = std::mem::take(&mut self.code).trim().to_string();
        let language = self.code_language.take();
        self.add_section(ContentSection::CodeBlock { text, language });
    }

    /// Handle a heading line that is neither a part nor a hook
    fn handle_heading(&mut self, line: &str) {
        self.finish_paragraph();

        let level = markers::heading_level(line);
        let text = markers::heading_text(line);

        if level == 1 && self.title.is_none() && self.current_part.is_none() && self.parts.is_empty()
        {
            self.title = Some(text.to_string());
        }

        // Levels 1-2 belong to parts and hooks
        if level > 2 {
            self.add_section(ContentSection::Heading {
                level,
                text: text.to_string(),
            });
        }
    }

    /// Consume a run of pipe-delimited lines starting at `start`
    ///
    /// Returns `None` (nothing consumed) when the first row has no cells.
    fn consume_table(&mut self, lines: &[&str], start: usize) -> Option<usize> {
        let headers = split_row(lines[start]);
        if headers.is_empty() {
            return None;
        }

        self.finish_paragraph();

        let mut end = start + 1;
        let mut rows = Vec::new();
        while end < lines.len() && lines[end].contains(TABLE_DELIMITER) {
            let row = split_row(lines[end]);
            end += 1;
            if row.is_empty() || row.iter().all(|cell| SEPARATOR_CELL.is_match(cell)) {
                continue;
            }
            rows.push(row);
        }

        self.add_section(ContentSection::Table { headers, rows });
        Some(end - start)
    }

    /// Consume a bulleted list starting at `start`
    fn consume_list(&mut self, lines: &[&str], start: usize) -> usize {
        self.finish_paragraph();

        let mut items: Vec<String> = Vec::new();
        let mut end = start;
        while end < lines.len() {
            let line = lines[end];
            let trimmed = line.trim();

            if markers::is_bullet(trimmed) {
                let item = trimmed[1..].trim();
                if !item.is_empty() {
                    items.push(item.to_string());
                }
            } else if trimmed.is_empty() {
                // Blank lines inside a list are absorbed
            } else if line.starts_with(char::is_whitespace) {
                if let Some(last) = items.last_mut() {
                    last.push(' ');
                    last.push_str(trimmed);
                }
            } else {
                break;
            }
            end += 1;
        }

        if !items.is_empty() {
            self.add_section(ContentSection::List { items });
        }
        end - start
    }

    /// Handle a plain text or blank line
    fn handle_text(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            self.finish_paragraph();
            return;
        }

        if !self.paragraph.is_empty() {
            self.paragraph.push(' ');
        }
        self.paragraph.push_str(trimmed);
    }

    /// Emit the pending paragraph, if any
    fn finish_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.paragraph);
        self.add_section(ContentSection::Paragraph { text });
    }

    /// Add a section to the current hook
    ///
    /// Content with no open hook (before the first hook of a part, or before
    /// any part) is dropped.
    fn add_section(&mut self, section: ContentSection) {
        match self.current_hook.as_mut() {
            Some(hook) => hook.content.push(section),
            None => log::trace!("Dropping {} outside of any hook", section.kind()),
        }
    }

    /// Commit the current hook to its part if it has content
    fn finish_hook(&mut self) {
        let Some(hook) = self.current_hook.take() else {
            return;
        };

        if hook.content.is_empty() {
            log::debug!("Dropping empty hook: {}", hook.title);
            return;
        }

        if let Some(part) = self.current_part.as_mut() {
            log::debug!("Hook '{}' with {} sections", hook.title, hook.content.len());
            part.hooks.push(hook);
        }
    }

    /// Commit the current part to the document if it has hooks
    fn finish_part(&mut self) {
        self.finish_paragraph();
        self.finish_hook();

        let Some(part) = self.current_part.take() else {
            return;
        };

        if part.hooks.is_empty() {
            log::debug!("Dropping part without hooks: {}", part.title);
            return;
        }

        log::debug!("Part '{}' with {} hooks", part.title, part.hooks.len());
        self.parts.push(part);
    }

    /// Flush all open state and build the document
    fn finalize(mut self) -> Document {
        // An unterminated fence still yields what it collected
        if self.in_code_block {
            log::warn!("Unterminated code fence at end of input");
            self.finish_code_block();
        }

        self.finish_part();

        Document {
            title: self
                .title
                .unwrap_or_else(|| self.markers.default_title.clone()),
            parts: self.parts,
        }
    }
}

/// Split a pipe-delimited row into trimmed cells
///
/// Only the empty cells produced by leading and trailing pipes are dropped.
fn split_row(line: &str) -> Vec<String> {
    let mut cells: Vec<&str> = line.split(TABLE_DELIMITER).map(str::trim).collect();

    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }

    cells.into_iter().map(str::to_string).collect()
}
