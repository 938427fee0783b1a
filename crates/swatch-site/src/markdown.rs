//! Markdown rendering for documentation text.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render markdown to an HTML block.
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, options());
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Render a short markdown string without the wrapping paragraph.
///
/// Used for list items, names and table cells.
pub fn render_inline(text: &str) -> String {
    let parser = Parser::new_ext(text, options()).filter(|event| {
        !matches!(
            event,
            Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph)
        )
    });
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output.trim_end().to_string()
}

/// Visible text of a markdown string, whitespace-collapsed.
pub fn plain_text(text: &str) -> String {
    let mut out = String::new();
    for event in Parser::new_ext(text, options()) {
        match event {
            Event::Text(t) | Event::Code(t) => out.push_str(&t),
            Event::SoftBreak | Event::HardBreak | Event::End(TagEnd::Paragraph) => out.push(' '),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
