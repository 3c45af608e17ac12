//! Rendering a tree with a table of open/close strings per container kind.
//!
//! [`RenderRules`] is plain data: build it once (from the built-in HTML or
//! ANSI tables, optionally patched with [`RuleOverrides`]) and pass it to
//! [`render`].

use std::collections::HashMap;

use crate::config::RuleOverrides;
use crate::syntax::{HeadingLevel, Node, NodeKind, Visitor, walk};

/// How text leaves are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEscape {
    /// Text is copied verbatim.
    #[default]
    None,
    /// `&`, `<`, `>` and `"` are replaced by HTML entities.
    Html,
}

const CSI: &str = "\u{1b}[";

/// Immutable open/close strings for every container kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRules {
    rules: HashMap<NodeKind, (String, String)>,
    escape: TextEscape,
}

impl RenderRules {
    fn from_pairs<I>(pairs: I, escape: TextEscape) -> Self
    where
        I: IntoIterator<Item = (NodeKind, (String, String))>,
    {
        Self {
            rules: pairs.into_iter().collect(),
            escape,
        }
    }

    /// HTML output: `<p>`, `<h1>`..`<h6>`, `<b>` and `<i>`.
    pub fn html() -> Self {
        let headings = HeadingLevel::ALL.into_iter().map(|level| {
            let n = level.as_u8();
            (
                NodeKind::Heading(level),
                (format!("<h{n}>"), format!("</h{n}>\n")),
            )
        });
        Self::from_pairs(
            [
                (NodeKind::Root, (String::new(), String::new())),
                (NodeKind::Paragraph, ("<p>".into(), "</p>\n".into())),
                (NodeKind::Strong, ("<b>".into(), "</b>".into())),
                (NodeKind::Emph, ("<i>".into(), "</i>".into())),
            ]
            .into_iter()
            .chain(headings),
            TextEscape::Html,
        )
    }

    /// Terminal output using SGR escape sequences.
    pub fn ansi() -> Self {
        let headings = HeadingLevel::ALL.into_iter().map(|level| {
            let color = 30 + level.as_u8();
            (
                NodeKind::Heading(level),
                (format!("{CSI}{color}m"), format!("{CSI}0m\n")),
            )
        });
        Self::from_pairs(
            [
                (NodeKind::Root, (String::new(), String::new())),
                (NodeKind::Paragraph, (String::new(), "\n\n".into())),
                (NodeKind::Strong, (format!("{CSI}1m"), format!("{CSI}22m"))),
                (NodeKind::Emph, (format!("{CSI}3m"), format!("{CSI}23m"))),
            ]
            .into_iter()
            .chain(headings),
            TextEscape::None,
        )
    }

    /// Returns a copy with the configured pairs replacing the built-in ones.
    pub fn with_overrides(&self, overrides: &RuleOverrides) -> Self {
        let mut rules = self.rules.clone();
        for (kind, pair) in rules.iter_mut() {
            if let Some([open, close]) = overrides.get(*kind) {
                *pair = (open.clone(), close.clone());
            }
        }
        Self {
            rules,
            escape: self.escape,
        }
    }

    pub fn escape(&self) -> TextEscape {
        self.escape
    }

    /// Open and close strings for `kind`; empty when the table has no entry.
    pub fn pair(&self, kind: NodeKind) -> (&str, &str) {
        self.rules
            .get(&kind)
            .map(|(open, close)| (open.as_str(), close.as_str()))
            .unwrap_or(("", ""))
    }
}

/// Renders `node` with `rules`.
pub fn render(node: &Node, rules: &RenderRules) -> String {
    let mut renderer = Renderer {
        rules,
        out: String::new(),
    };
    walk(node, &mut renderer);
    renderer.out
}

struct Renderer<'r> {
    rules: &'r RenderRules,
    out: String,
}

impl Visitor for Renderer<'_> {
    fn enter(&mut self, node: &Node) {
        self.out.push_str(self.rules.pair(node.kind()).0);
    }

    fn text(&mut self, text: &str) {
        match self.rules.escape {
            TextEscape::None => self.out.push_str(text),
            TextEscape::Html => push_html_escaped(&mut self.out, text),
        }
    }

    fn leave(&mut self, node: &Node) {
        self.out.push_str(self.rules.pair(node.kind()).1);
    }
}

fn push_html_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_html_document() {
        let tree = parse("# Heading 1\nSome Text under **Heading 1**\n\n*p2* here");
        assert_eq!(
            render(&tree, &RenderRules::html()),
            "<h1>Heading 1</h1>\n<p>Some Text under <b>Heading 1</b></p>\n<p><i>p2</i> here</p>\n"
        );
    }

    #[test]
    fn test_html_escapes_text() {
        let tree = parse("a < b & \"c\"");
        assert_eq!(
            render(&tree, &RenderRules::html()),
            "<p>a &lt; b &amp; &quot;c&quot;</p>\n"
        );
    }

    #[test]
    fn test_triple_nesting_order() {
        let tree = parse("***x***");
        assert_eq!(render(&tree, &RenderRules::html()), "<p><i><b>x</b></i></p>\n");
    }

    #[test]
    fn test_ansi_document() {
        let tree = parse("### H\n**b** *i*");
        assert_eq!(
            render(&tree, &RenderRules::ansi()),
            "\u{1b}[33mH\u{1b}[0m\n\u{1b}[1mb\u{1b}[22m \u{1b}[3mi\u{1b}[23m\n\n"
        );
    }

    #[test]
    fn test_ansi_does_not_escape() {
        let tree = parse("<tag>");
        assert_eq!(render(&tree, &RenderRules::ansi()), "<tag>\n\n");
    }

    #[test]
    fn test_overrides_replace_pairs() {
        let overrides = RuleOverrides {
            strong: Some(["<strong>".into(), "</strong>".into()]),
            paragraph: Some(["".into(), "\n".into()]),
            ..Default::default()
        };
        let rules = RenderRules::html().with_overrides(&overrides);
        let tree = parse("**a** *b*");
        assert_eq!(render(&tree, &rules), "<strong>a</strong> <i>b</i>\n");
        assert_eq!(rules.escape(), TextEscape::Html);
    }

    #[test]
    fn test_empty_document_renders_nothing() {
        assert_eq!(render(&parse(""), &RenderRules::html()), "");
    }
}
