//! Markdown to HTML for slides and speaker notes.

mod highlight;

pub use highlight::{highlight_block, theme_css};

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

/// A code block collected between its start and end events.
struct PendingBlock<'a> {
    start: Event<'a>,
    lang: Option<String>,
    code: String,
}

/// Render markdown to HTML with GFM extensions, single newlines as `<br />`,
/// and every code block syntax-highlighted.
pub fn render(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let mut events = Vec::new();
    let mut pending: Option<PendingBlock> = None;

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(Tag::CodeBlock(ref kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                pending = Some(PendingBlock { start: event.clone(), lang, code: String::new() });
            }
            Event::Text(text) if pending.is_some() => {
                if let Some(block) = pending.as_mut() {
                    block.code.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => match pending.take() {
                Some(block) => match highlight_block(&block.code, block.lang.as_deref()) {
                    Some(highlighted) => events.push(Event::Html(highlighted.into())),
                    None => {
                        events.push(block.start);
                        events.push(Event::Text(block.code.into()));
                        events.push(event);
                    }
                },
                None => events.push(event),
            },
            Event::SoftBreak => events.push(Event::HardBreak),
            other => events.push(other),
        }
    }

    let mut output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut output, events.into_iter());
    output
}
