//! An arena-backed, mutable JSON document model.
//!
//! A [`Document`] owns every node of one tree in a single [`Arena`]. Mutable
//! access goes through [`View`]s, which borrow the document and
//! auto-vivify on member access: writing `doc.field("a").field("b")` on an
//! empty document creates both objects. Read-only access goes through
//! [`Ref`]s, which never create anything. Text is parsed with
//! [`Document::parse`] and written back with [`Document::serialize`], keeping
//! object members in insertion order.
//!
//! ```
//! use rjson::{Document, Inspect};
//!
//! let mut doc = rjson::parse(r#"{"city":"北京","zip":100000}"#)?;
//! doc.field("tags").append("capital");
//! assert_eq!(doc.field("zip").to_int(0), 100000);
//! assert_eq!(
//!     doc.serialize(),
//!     r#"{"city":"北京","zip":100000,"tags":["capital"]}"#
//! );
//! # Ok::<(), rjson::Error>(())
//! ```

pub mod arena;
mod decode;
mod document;
pub mod encode;
pub mod error;
mod num;
pub mod options;
mod serde;
mod text;
mod view;

pub use crate::arena::{Arena, Inspect, Member, Node, NodeId, NodeKind, Ref, Subtree, Tag};
pub use crate::document::Document;
pub use crate::error::{Error, ErrorKind, Location, ParseErrorKind};
pub use crate::options::{DuplicateKeys, Indent, ParseOptions, SerializeOptions};
pub use crate::view::{Value, View};

pub type Result<T> = std::result::Result<T, Error>;

pub fn parse(input: &str) -> Result<Document> {
    Document::parse(input)
}

pub fn parse_slice(input: &[u8]) -> Result<Document> {
    Document::parse_slice(input)
}

pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Document> {
    Document::parse_with_options(input, options)
}

/// Compact JSON text for anything readable as a tree.
pub fn to_string(value: Ref<'_>) -> String {
    to_string_with_options(value, &SerializeOptions::default())
}

pub fn to_string_with_options(value: Ref<'_>, options: &SerializeOptions) -> String {
    encode::to_string(value, options)
}

pub fn to_string_pretty(value: Ref<'_>) -> String {
    to_string_with_options(value, &SerializeOptions::pretty())
}
