//! Note Markdown Rendering
//!
//! Wraps pulldown-cmark with:
//! - Syntax highlighting for fenced code blocks (syntect)
//! - Raw HTML in notes shown as text, never injected
//! - Links opening in a new tab; links to other schemes (`javascript:`,
//!   `data:`, ...) are reduced to their text

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;
use url::Url;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

const CODE_THEME: &str = "InspiredGitHub";

/// Schemes a note may link to; relative links are always allowed
const LINK_SCHEMES: &[&str] = &["http", "https", "mailto"];

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get(CODE_THEME)
}

/// Render note content to HTML safe for `inner_html`
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}

// State for the event transformer
enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
}

fn is_safe_link(dest: &str) -> bool {
    match Url::parse(dest) {
        Ok(url) => LINK_SCHEMES.contains(&url.scheme()),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

fn transform_events(parser: Parser<'_>) -> Vec<Event<'_>> {
    let mut events = Vec::new();
    let mut state = State::Normal;
    // Links cannot nest, so one flag is enough
    let mut dropped_link = false;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }

                Event::Start(Tag::Link { dest_url, .. }) if !is_safe_link(&dest_url) => {
                    tracing::debug!(url = %dest_url, "link with unsupported scheme rendered as text");
                    dropped_link = true;
                }
                Event::End(TagEnd::Link) if dropped_link => dropped_link = false,
                Event::Start(Tag::Link { dest_url, title, .. }) => {
                    let html = format!(
                        r#"<a href="{}" title="{}" target="_blank" rel="noopener noreferrer">"#,
                        escape_html(&dest_url),
                        escape_html(&title)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                }
                Event::End(TagEnd::Link) => events.push(Event::Html(CowStr::from("</a>"))),

                // Notes are plain text: show markup instead of executing it
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),

                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let plain = || format!("<pre><code>{}</code></pre>", escape_html(code));
    let Some(theme) = get_theme() else {
        return plain();
    };
    let ss = get_syntax_set();

    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme).unwrap_or_else(|_| plain())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_tasks() {
        let html = render_markdown("# Kickoff\n\n- [ ] Confirm stakeholder list");
        assert!(html.contains("<h1>Kickoff</h1>"));
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_links_open_in_new_tab() {
        let html = render_markdown("[docs](https://docs.rs)");
        assert!(html.contains(r#"href="https://docs.rs""#));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_script_links_are_reduced_to_text() {
        for source in [
            "[x](javascript:alert(1))",
            "[x](JavaScript:alert(1))",
            "[x](data:text/html;base64,PGI+aGk8L2I+)",
        ] {
            let html = render_markdown(source);
            assert!(!html.contains("<a"), "{} rendered {}", source, html);
            assert!(html.contains('x'));
        }
    }

    #[test]
    fn test_relative_and_mail_links_are_kept() {
        assert!(render_markdown("[top](#intro)").contains(r##"href="#intro""##));
        assert!(render_markdown("[me](mailto:me@example.com)").contains("href=\"mailto:me@example.com\""));
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let html = render_markdown("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre"));
        assert!(html.contains("main"));
    }
}
