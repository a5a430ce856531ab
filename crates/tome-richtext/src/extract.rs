//! Plain-text extraction.
//!
//! Flattens a [`Node`] tree into a Markdown-like string, preserving block
//! structure: headings keep their `#` prefixes, lists their `-` markers,
//! code blocks their fences. Two traversals cooperate:
//!
//! - [`Node::plain_text`] dispatches on the node kind and joins block-level
//!   children with blank lines;
//! - [`Node::text_content`] concatenates leaf text with no separator, for
//!   the inline children of headings, paragraphs, list items, and quotes.
//!
//! Both are total; malformed trees yield degraded output, never errors.

use crate::node::{Node, RichText};

/// Heading depth used when the `tag` field is absent or not `h<N>`.
const DEFAULT_HEADING_DEPTH: usize = 2;

impl RichText {
    /// Extract the document's plain text.
    ///
    /// Returns the empty string for a missing root.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.root.as_ref().map(Node::plain_text).unwrap_or_default()
    }
}

impl Node {
    /// Extract this node's plain text, preserving block structure.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::Root { children } | Self::Unknown { children } => join_blocks(children),
            Self::Heading { tag, children } => {
                let hashes = "#".repeat(heading_depth(tag.as_deref()));
                format!("{hashes} {}", concat_text(children))
            }
            Self::Paragraph { children } => concat_text(children),
            Self::List { children } => children
                .iter()
                .map(Self::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
            Self::ListItem { children } => format!("- {}", concat_text(children)),
            Self::Quote { children } => format!("> {}", concat_text(children)),
            Self::Code { language, children } => {
                let language = language.as_deref().unwrap_or("");
                format!("```{language}\n{}\n```", concat_text(children))
            }
            Self::Text { text } => text.clone(),
            Self::LineBreak => "\n".to_owned(),
        }
    }

    /// Concatenated leaf text of this node, with no separators.
    ///
    /// Text nodes return their literal string; other nodes concatenate
    /// their children's leaf text. Nodes with neither yield `""`, so a
    /// line break contributes nothing at leaf level.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text { text } => text.clone(),
            Self::Root { children }
            | Self::Heading { children, .. }
            | Self::Paragraph { children }
            | Self::List { children }
            | Self::ListItem { children }
            | Self::Quote { children }
            | Self::Code { children, .. }
            | Self::Unknown { children } => concat_text(children),
            Self::LineBreak => String::new(),
        }
    }
}

/// Join block-level children with blank-line separators.
fn join_blocks(children: &[Node]) -> String {
    children
        .iter()
        .map(Node::plain_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Concatenate children's leaf text with no separator.
fn concat_text(children: &[Node]) -> String {
    children.iter().map(Node::text_content).collect()
}

/// Parse heading depth from a `h<N>` tag.
fn heading_depth(tag: Option<&str>) -> usize {
    tag.and_then(|t| t.strip_prefix('h'))
        .and_then(|n| n.parse().ok())
        .unwrap_or(DEFAULT_HEADING_DEPTH)
}
