//! Markdown stripping.
//!
//! Uses pulldown-cmark for CommonMark parsing so statistics for `.md` input
//! count the prose a reader sees, not the markup around it.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose.
///
/// Removes code blocks, inline code, HTML, YAML frontmatter, headings, and
/// table structure. Keeps link text, emphasis text, list items, and
/// blockquotes. Each paragraph or list item ends with a blank line so
/// paragraph counting still works on the result.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len());
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_)) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push('\n');
            }

            Event::End(TagEnd::Paragraph | TagEnd::Item) if skip_depth == 0 => {
                if !result.ends_with("\n\n") {
                    result.push_str("\n\n");
                }
            }

            _ => {}
        }
    }

    result
}

/// Skip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };

    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}
