use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::articles::ArticleError;

const THEME: &str = "base16-ocean.dark";

static HIGHLIGHTER: LazyLock<CodeHighlighter> = LazyLock::new(CodeHighlighter::new);

/// Syntax and theme sets, loaded once per process.
pub struct CodeHighlighter {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl CodeHighlighter {
    fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }

    fn theme(&self) -> Result<&Theme, ArticleError> {
        self.themes.themes.get(THEME).ok_or(ArticleError::Highlight)
    }

    /// Replaces fenced and indented code blocks with pre-rendered HTML.
    ///
    /// Unknown languages fall back to plain text. All other events pass through.
    pub fn highlight<'a, It>(&self, events: It) -> Result<Vec<Event<'a>>, ArticleError>
    where
        It: Iterator<Item = Event<'a>>,
    {
        let theme = self.theme()?;
        let plain = self.syntaxes.find_syntax_plain_text();

        let mut block: Option<(_, String)> = None;
        let mut out_events = Vec::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let syntax = match kind {
                        CodeBlockKind::Fenced(lang) => self
                            .syntaxes
                            .find_syntax_by_token(&lang)
                            .unwrap_or(plain),
                        CodeBlockKind::Indented => plain,
                    };
                    block = Some((syntax, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    let (syntax, code) = block.take().ok_or(ArticleError::Highlight)?;
                    let html = highlighted_html_for_string(&code, &self.syntaxes, syntax, theme)
                        .map_err(|_| ArticleError::Highlight)?;
                    out_events.push(Event::Html(CowStr::from(html)));
                }
                Event::Text(t) => match block.as_mut() {
                    Some((_, code)) => code.push_str(&t),
                    None => out_events.push(Event::Text(t)),
                },
                e => out_events.push(e),
            }
        }

        Ok(out_events)
    }
}

/// Highlights code blocks in a Markdown event stream using the shared highlighter.
pub fn highlight<'a, It>(events: It) -> Result<Vec<Event<'a>>, ArticleError>
where
    It: Iterator<Item = Event<'a>>,
{
    HIGHLIGHTER.highlight(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{html, Parser};

    fn render(markdown: &str) -> String {
        let events = highlight(Parser::new(markdown)).unwrap();
        let mut out = String::new();
        html::push_html(&mut out, events.into_iter());
        out
    }

    #[test]
    fn test_fenced_block_is_highlighted() {
        let out = render("```rust\nfn main() {}\n```\n");
        assert!(out.contains("<pre style=\"background-color:"));
        assert!(out.contains("main"));
        assert!(!out.contains("<code"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let out = render("```not-a-language\nhello\n```\n");
        assert!(out.contains("<pre style="));
        assert!(out.contains("hello"));
    }

    #[test]
    fn test_prose_passes_through() {
        let out = render("Some *emphasis* here.");
        assert_eq!(out, "<p>Some <em>emphasis</em> here.</p>\n");
    }
}
