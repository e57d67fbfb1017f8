//! Markdown to plain text.
//!
//! Markdown inputs are rendered as plain text before pagination: inline
//! formatting is stripped, text and code content is kept verbatim, and
//! block boundaries become newlines. Tables flatten to one line per row
//! with cells separated by spaces.

use pulldown_cmark::{Event, Options, Parser, TagEnd};

/// Convert markdown source to plain text.
///
/// Tables, footnotes, strikethrough and task lists are enabled so their
/// textual content survives the conversion.
pub fn to_plain_text(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut text = String::new();

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Text(content) => text.push_str(&content),
            Event::Code(content) => text.push_str(&content),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::Rule => text.push('\n'),
            Event::TaskListMarker(checked) => {
                text.push_str(if checked { "[x] " } else { "[ ] " });
            }
            Event::End(end) => match end {
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::BlockQuote(_)
                | TagEnd::CodeBlock
                | TagEnd::Item
                | TagEnd::TableHead
                | TagEnd::TableRow
                | TagEnd::FootnoteDefinition => text.push('\n'),
                TagEnd::TableCell => text.push(' '),
                _ => {}
            },
            _ => {}
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_inline_formatting() {
        let text = to_plain_text("Some **bold** and *italic* and `code`.");
        assert_eq!(text, "Some bold and italic and code.\n");
    }

    #[test]
    fn test_headings_become_lines() {
        let text = to_plain_text("# Title\n\nBody paragraph.");
        assert_eq!(text, "Title\nBody paragraph.\n");
    }

    #[test]
    fn test_list_items_one_per_line() {
        let text = to_plain_text("- first\n- second\n- third");
        assert_eq!(text, "first\nsecond\nthird\n");
    }

    #[test]
    fn test_link_keeps_label_only() {
        let text = to_plain_text("See [the docs](https://example.com).");
        assert_eq!(text, "See the docs.\n");
    }

    #[test]
    fn test_code_block_content_verbatim() {
        // Code text keeps its own trailing newline; the block end adds one.
        let text = to_plain_text("```\nlet x = 1;\nlet y = 2;\n```");
        assert_eq!(text, "let x = 1;\nlet y = 2;\n\n");
    }

    #[test]
    fn test_hard_break_splits_line() {
        let text = to_plain_text("first  \nsecond");
        assert_eq!(text, "first\nsecond\n");
    }

    #[test]
    fn test_table_rows_flatten() {
        let text = to_plain_text("| a | b |\n|---|---|\n| 1 | 2 |");
        assert_eq!(text, "a b \n1 2 \n");
    }

    #[test]
    fn test_task_list_markers() {
        let text = to_plain_text("- [x] done\n- [ ] open");
        assert_eq!(text, "[x] done\n[ ] open\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_plain_text(""), "");
    }
}
