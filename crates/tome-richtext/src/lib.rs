//! Rich-text node tree and plain-text extraction for Tome.
//!
//! The CMS stores document bodies as a structured tree of typed content
//! nodes (headings, paragraphs, lists, quotes, code blocks). This crate
//! models that tree as a tagged union ([`Node`]) and flattens it into a
//! Markdown-like plain-text string for the LLM export endpoints.
//!
//! Extraction is total: absent, rootless, or malformed content degrades to
//! the empty string at every level rather than failing.
//!
//! # Example
//!
//! ```
//! use tome_richtext::{Node, RichText};
//!
//! let content = RichText {
//!     root: Some(Node::Heading {
//!         tag: Some("h3".to_owned()),
//!         children: vec![Node::Text { text: "Hello".to_owned() }],
//!     }),
//! };
//!
//! assert_eq!(content.plain_text(), "### Hello");
//! ```

mod extract;
mod node;

pub use node::{Node, RichText};
