use std::sync::LazyLock;
use std::vec::IntoIter;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

const THEME: &str = "base16-eighties.dark";

static HIGHLIGHTER: LazyLock<CodeHighlighter> = LazyLock::new(CodeHighlighter::new);

/// Syntax sets and theme are expensive to load, so one instance is shared.
pub struct CodeHighlighter {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

/// Fence names the default syntax set doesn't know under that token.
fn fence_token(lang: &str) -> &str {
    match lang.to_ascii_lowercase().as_str() {
        "csharp" | "c#" => "cs",
        _ => lang,
    }
}

impl CodeHighlighter {
    fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }

    fn theme(&self) -> Option<&Theme> {
        self.themes.themes.get(THEME)
    }

    fn syntax_for(&self, kind: &CodeBlockKind) -> &SyntaxReference {
        let plain = self.syntaxes.find_syntax_plain_text();
        match kind {
            CodeBlockKind::Fenced(lang) if !lang.is_empty() => self
                .syntaxes
                .find_syntax_by_token(fence_token(lang))
                .unwrap_or(plain),
            _ => plain,
        }
    }

    fn render(&self, kind: &CodeBlockKind, code: &str) -> Option<String> {
        let theme = self.theme()?;
        highlighted_html_for_string(code, &self.syntaxes, self.syntax_for(kind), theme).ok()
    }

    /// Replaces each fenced or indented code block with pre-rendered HTML.
    /// A block that fails to highlight is passed through untouched.
    pub fn highlight<'a, It>(&self, events: It) -> Vec<Event<'a>>
    where
        It: Iterator<Item = Event<'a>>,
    {
        let mut block: Option<(CodeBlockKind<'a>, String)> = None;
        let mut out = Vec::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) if block.is_none() => {
                    block = Some((kind, String::new()));
                }
                Event::Text(t) if block.is_some() => {
                    if let Some((_, code)) = block.as_mut() {
                        code.push_str(&t);
                    }
                }
                Event::End(TagEnd::CodeBlock) => match block.take() {
                    Some((kind, code)) => match self.render(&kind, &code) {
                        Some(html) => out.push(Event::Html(CowStr::from(html))),
                        None => {
                            out.push(Event::Start(Tag::CodeBlock(kind)));
                            out.push(Event::Text(CowStr::from(code)));
                            out.push(Event::End(TagEnd::CodeBlock));
                        }
                    },
                    None => out.push(Event::End(TagEnd::CodeBlock)),
                },
                e => out.push(e),
            }
        }

        out
    }
}

pub fn highlight<'a, It>(events: It) -> IntoIter<Event<'a>>
where
    It: Iterator<Item = Event<'a>>,
{
    HIGHLIGHTER.highlight(events).into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{html::push_html, Parser};

    fn render(md: &str) -> String {
        let mut html = String::new();
        push_html(&mut html, highlight(Parser::new(md)));
        html
    }

    #[test]
    fn test_fenced_block_is_highlighted() {
        let html = render("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre style="));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_csharp_fence_is_highlighted() {
        let code = "public class Post { public int Id { get; set; } }\n";
        let csharp = render(&format!("```csharp\n{code}```\n"));
        let plain = render(&format!("```not-a-language\n{code}```\n"));
        assert_ne!(csharp, plain);
        assert_eq!(csharp, render(&format!("```cs\n{code}```\n")));
        assert_eq!(fence_token("C#"), "cs");
        assert_eq!(fence_token("rust"), "rust");
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text() {
        let html = render("```not-a-language\nhello\n```\n");
        assert!(html.contains("hello"));
        assert!(html.contains("<pre"));
    }

    #[test]
    fn test_prose_untouched() {
        let html = render("Some *emphasis* here.");
        assert_eq!(html, "<p>Some <em>emphasis</em> here.</p>\n");
    }
}
