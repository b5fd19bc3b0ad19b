//! HTML exporter for parsed guides
//!
//! This module renders a guide Document to a single HTML file with:
//! - One section per part, with its description
//! - Numbered hook cards with an icon chosen from the hook title
//! - Inline bold/italic/code runs rendered as `<strong>`, `<em>`, `<code>`

use crate::guide_model::{render_inline, ContentSection, Document, Emphasis, HookSection, Part};
use crate::presentation::{self, HookIcon};
use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during HTML export
#[derive(Error, Debug)]
pub enum HtmlExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Export a guide document to HTML format
///
/// # Parameters
/// * `doc` - The parsed guide
/// * `output_path` - Path where the HTML file will be written
///
/// # Returns
/// * `Ok(())` - Successfully exported to HTML
/// * `Err(HtmlExportError)` - Error during export
pub fn to_html(doc: &Document, output_path: &Path) -> Result<(), HtmlExportError> {
    let output = render_html(doc);

    // Write to file - create parent directories if they don't exist
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(output_path)?;
    file.write_all(output.as_bytes())?;

    log::info!("Wrote {} bytes of HTML to {}", output.len(), output_path.display());
    Ok(())
}

/// Render a guide document to an HTML string
pub fn render_html(doc: &Document) -> String {
    let mut output = String::new();

    write_html_header(&mut output, &doc.title);

    output.push_str("<body>\n");
    output.push_str("<div class=\"container\">\n");
    output.push_str(&format!(
        "<h1 class=\"document-title\">{}</h1>\n",
        escape_html(&doc.title)
    ));

    if doc.is_empty() {
        output.push_str("<p class=\"empty\">No content available.</p>\n");
    } else {
        write_part_tabs(&mut output, &doc.parts);
        for (index, part) in doc.parts.iter().enumerate() {
            write_part(&mut output, part, index);
        }
    }

    output.push_str("</div>\n");
    output.push_str("</body>\n");
    output.push_str("</html>\n");

    output
}

/// Write HTML header with CSS styling
fn write_html_header(output: &mut String, title: &str) {
    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html>\n");
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"UTF-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    output.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    output.push_str("<style>\n");
    output.push_str(CSS_STYLES);
    output.push_str("</style>\n");
    output.push_str("</head>\n");
}

/// Write the part navigation
fn write_part_tabs(output: &mut String, parts: &[Part]) {
    output.push_str("<nav class=\"part-tabs\">\n");
    for (index, part) in parts.iter().enumerate() {
        let accent = presentation::part_accent(index);
        output.push_str(&format!(
            "<a href=\"#part-{}\" class=\"part-tab {}\">{}{}</a>\n",
            index + 1,
            accent.class(),
            icon_html(accent.icon()),
            escape_html(&part.title)
        ));
    }
    output.push_str("</nav>\n");
}

/// Write a single part and its hooks
fn write_part(output: &mut String, part: &Part, index: usize) {
    let accent = presentation::part_accent(index);

    output.push_str(&format!(
        "<section id=\"part-{}\" class=\"part {}\">\n",
        index + 1,
        accent.class()
    ));
    output.push_str(&format!(
        "<h2 class=\"part-title\">{}</h2>\n",
        escape_html(&part.title)
    ));
    if let Some(ref description) = part.description {
        output.push_str(&format!(
            "<p class=\"part-description\">{}</p>\n",
            escape_html(description)
        ));
    }

    for (hook_index, hook) in part.hooks.iter().enumerate() {
        write_hook(output, hook, hook_index);
    }

    output.push_str("</section>\n");
}

/// Write a single hook card
fn write_hook(output: &mut String, hook: &HookSection, index: usize) {
    output.push_str("<article class=\"hook\">\n");
    output.push_str(&format!(
        "<h3 class=\"hook-title\">{}<span class=\"hook-number\">#{}</span> {}</h3>\n",
        icon_html(presentation::hook_icon(&hook.title)),
        index + 1,
        escape_html(&hook.title)
    ));

    for section in &hook.content {
        write_section(output, section);
    }

    output.push_str("</article>\n");
}

/// Write a single content section to the output
fn write_section(output: &mut String, section: &ContentSection) {
    match section {
        ContentSection::Heading { level, text } => {
            let style = presentation::heading_style(*level);
            let icon = if style.with_icon {
                presentation::heading_icon(text)
            } else {
                ""
            };
            let icon_span = if icon.is_empty() {
                String::new()
            } else {
                format!("<span class=\"heading-icon\">{}</span> ", icon)
            };
            output.push_str(&format!(
                "<{el} class=\"{}\">{}{}</{el}>\n",
                style.class,
                icon_span,
                inline_to_html(text),
                el = style.element
            ));
        }

        ContentSection::Paragraph { text } => {
            if presentation::is_example_header(text) {
                output.push_str(&format!(
                    "<p class=\"example-header\">{}</p>\n",
                    inline_to_html(text)
                ));
            } else {
                output.push_str(&format!("<p>{}</p>\n", inline_to_html(text)));
            }
        }

        ContentSection::CodeBlock { text, language } => {
            if let Some(lang) = language {
                output.push_str(&format!(
                    "<div class=\"code-label\">{}</div>\n<pre><code class=\"language-{}\">{}</code></pre>\n",
                    escape_html(&lang.to_uppercase()),
                    escape_html(lang),
                    escape_html(text)
                ));
            } else {
                output.push_str(&format!("<pre><code>{}</code></pre>\n", escape_html(text)));
            }
        }

        ContentSection::List { items } => {
            output.push_str("<ul>\n");
            for item in items {
                output.push_str(&format!("<li>{}</li>\n", inline_to_html(item)));
            }
            output.push_str("</ul>\n");
        }

        ContentSection::Table { headers, rows } => {
            write_table(output, headers, rows);
        }

        ContentSection::Divider => {
            output.push_str("<hr>\n");
        }
    }
}

/// Write a table to the output
///
/// Cells are written as plain escaped text.
fn write_table(output: &mut String, headers: &[String], rows: &[Vec<String>]) {
    output.push_str("<table>\n");

    output.push_str("<thead>\n<tr>\n");
    for header in headers {
        output.push_str(&format!("<th>{}</th>\n", escape_html(header)));
    }
    output.push_str("</tr>\n</thead>\n");

    output.push_str("<tbody>\n");
    for row in rows {
        output.push_str("<tr>\n");
        for cell in row {
            output.push_str(&format!("<td>{}</td>\n", escape_html(cell)));
        }
        output.push_str("</tr>\n");
    }
    output.push_str("</tbody>\n");

    output.push_str("</table>\n");
}

/// Convert text with inline markers to HTML
fn inline_to_html(text: &str) -> String {
    let mut result = String::new();

    for run in render_inline(text) {
        let escaped = escape_html(&run.text);
        match run.emphasis {
            Emphasis::Plain => result.push_str(&escaped),
            Emphasis::Bold => result.push_str(&format!("<strong>{}</strong>", escaped)),
            Emphasis::Italic => result.push_str(&format!("<em>{}</em>", escaped)),
            Emphasis::Code => result.push_str(&format!("<code>{}</code>", escaped)),
        }
    }

    result
}

fn icon_html(icon: HookIcon) -> String {
    format!("<i class=\"icon\" data-icon=\"{}\"></i>", icon.name())
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Minimal layout styles
const CSS_STYLES: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    line-height: 1.6;
}

.container {
    max-width: 960px;
    margin: 0 auto;
    padding: 2rem;
}

.part-tabs {
    display: flex;
    gap: 0.5rem;
}

.hook {
    border: 1px solid #ccc;
    border-radius: 8px;
    padding: 1.5rem;
    margin: 1.5rem 0;
}

pre {
    overflow-x: auto;
    padding: 1rem;
}

table {
    border-collapse: collapse;
}

th, td {
    border: 1px solid #ccc;
    padding: 0.5rem 1rem;
}
"#;
