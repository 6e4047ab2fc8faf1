use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME: LazyLock<Theme> = LazyLock::new(|| {
    let mut themes = ThemeSet::load_defaults().themes;
    themes
        .remove("base16-ocean.dark")
        .expect("default syntect themes include base16-ocean.dark")
});

/// Renders a markdown body to HTML, replacing fenced code blocks with
/// syntect-highlighted markup. Highlighting failures fall back to the plain
/// code text.
pub fn render_markdown(body: &str) -> String {
    let events = highlight_events(Parser::new_ext(body, Options::all()));
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, events.into_iter());
    html
}

fn syntax_for(kind: &CodeBlockKind) -> &'static SyntaxReference {
    let plain = SYNTAXES.find_syntax_plain_text();
    match kind {
        CodeBlockKind::Fenced(lang) => SYNTAXES.find_syntax_by_token(lang).unwrap_or(plain),
        CodeBlockKind::Indented => plain,
    }
}

fn highlight_events<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut out = Vec::new();
    // Buffer and syntax of the code block currently being collected.
    let mut code: Option<(String, &SyntaxReference)> = None;

    for event in events {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                code = Some((String::new(), syntax_for(&kind)));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((buf, syntax)) = code.take() {
                    match highlighted_html_for_string(&buf, &SYNTAXES, syntax, &THEME) {
                        Ok(html) => out.push(Event::Html(CowStr::from(html))),
                        Err(_) => out.push(Event::Text(CowStr::from(buf))),
                    }
                }
            }
            Event::Text(text) => match code.as_mut() {
                Some((buf, _)) => buf.push_str(&text),
                None => out.push(Event::Text(text)),
            },
            other => out.push(other),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_blocks_become_highlighted_html() {
        let html = render_markdown("## Usage\n\n```bash\nls -la\n```\n");
        assert!(html.contains("<h2>Usage</h2>"));
        assert!(html.contains("<pre"));
        assert!(!html.contains("```"));
    }

    #[test]
    fn prose_passes_through_untouched() {
        let html = render_markdown("A **bold** claim.");
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn unknown_language_still_renders() {
        let html = render_markdown("```nosuchlang\nhello\n```\n");
        assert!(html.contains("hello"));
    }
}
