//! Content node types.
//!
//! [`Node`] is the typed representation of one element in a rich-text
//! document tree. The wire format is the CMS editor's JSON shape: every
//! node carries a `type` discriminant, an optional ordered `children`
//! array, and type-specific fields (`tag` on headings, `language` on code
//! blocks, `text` on leaf text nodes).
//!
//! Deserialization never fails on shape: unrecognized `type` values map to
//! [`Node::Unknown`] with their children intact, and missing fields take
//! their defaults.

use serde::{Deserialize, Deserializer};

/// One element of a rich-text document tree.
///
/// The known node kinds match the CMS editor's block set. Anything else
/// lands in [`Node::Unknown`], which keeps its children so extraction can
/// still descend into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Document root; children are block-level nodes.
    Root {
        /// Ordered child nodes.
        children: Vec<Node>,
    },
    /// Heading block; `tag` has the form `h<N>` (absent defaults to `h2`).
    Heading {
        /// Heading tag, e.g. `"h3"`.
        tag: Option<String>,
        /// Inline child nodes.
        children: Vec<Node>,
    },
    /// Paragraph block.
    Paragraph {
        /// Inline child nodes.
        children: Vec<Node>,
    },
    /// List block; children are expected to be [`Node::ListItem`].
    List {
        /// Ordered list items.
        children: Vec<Node>,
    },
    /// Single list item.
    ListItem {
        /// Inline child nodes.
        children: Vec<Node>,
    },
    /// Block quote.
    Quote {
        /// Inline child nodes.
        children: Vec<Node>,
    },
    /// Fenced code block with an optional language tag.
    Code {
        /// Language tag for the opening fence, e.g. `"ts"`.
        language: Option<String>,
        /// Inline child nodes.
        children: Vec<Node>,
    },
    /// Leaf text node.
    Text {
        /// Literal text content.
        text: String,
    },
    /// Explicit line break.
    LineBreak,
    /// Unrecognized node type; children are preserved.
    Unknown {
        /// Ordered child nodes, if the wire node carried any.
        children: Vec<Node>,
    },
}

/// Rich-text document body as stored on a CMS record.
///
/// The CMS wraps the node tree in a `{"root": {...}}` envelope. A missing
/// or null root extracts to the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RichText {
    /// Root node of the document tree.
    #[serde(default)]
    pub root: Option<Node>,
}

/// Wire-shape node used as a deserialization intermediate.
///
/// Every field defaults, so partial nodes parse instead of erroring.
#[derive(Deserialize)]
struct RawNode {
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    children: Vec<RawNode>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let children = || raw.children.into_iter().map(Node::from).collect();
        match raw.kind.as_str() {
            "root" => Self::Root {
                children: children(),
            },
            "heading" => Self::Heading {
                tag: raw.tag,
                children: children(),
            },
            "paragraph" => Self::Paragraph {
                children: children(),
            },
            "list" => Self::List {
                children: children(),
            },
            "listitem" => Self::ListItem {
                children: children(),
            },
            "quote" => Self::Quote {
                children: children(),
            },
            "code" => Self::Code {
                language: raw.language,
                children: children(),
            },
            "text" => Self::Text {
                text: raw.text.unwrap_or_default(),
            },
            "linebreak" => Self::LineBreak,
            _ => Self::Unknown {
                children: children(),
            },
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawNode::deserialize(deserializer).map(Node::from)
    }
}
