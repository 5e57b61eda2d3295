use std::fmt;

use smol_str::SmolStr;

use super::NodeId;

/// Coarse classification of a node, as exposed by `kind()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl NodeKind {
    pub fn type_name(self) -> &'static str {
        match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "boolean",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Exact storage tag of a node. Typed readers only succeed on an exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Null,
    Bool,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Double,
    String,
    Array,
    Object,
}

impl Tag {
    pub const ALL: [Tag; 10] = [
        Tag::Null,
        Tag::Bool,
        Tag::Int32,
        Tag::UInt32,
        Tag::Int64,
        Tag::UInt64,
        Tag::Double,
        Tag::String,
        Tag::Array,
        Tag::Object,
    ];

    pub fn kind(self) -> NodeKind {
        match self {
            Tag::Null => NodeKind::Null,
            Tag::Bool => NodeKind::Bool,
            Tag::Int32 | Tag::UInt32 | Tag::Int64 | Tag::UInt64 | Tag::Double => NodeKind::Number,
            Tag::String => NodeKind::String,
            Tag::Array => NodeKind::Array,
            Tag::Object => NodeKind::Object,
        }
    }
}

/// One object member. Keys are short in practice, so they live inline.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub key: SmolStr,
    pub value: NodeId,
}

/// A single JSON value stored in an [`Arena`](super::Arena).
///
/// Containers hold [`NodeId`] handles into the same arena rather than the
/// children themselves, so a node is only meaningful next to its arena.
/// A node outside any arena (a standalone node) is always a scalar or an
/// empty container.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Double(f64),
    String(String),
    Array(Vec<NodeId>),
    Object(Vec<Member>),
}

impl Node {
    pub fn empty_array() -> Self {
        Node::Array(Vec::new())
    }

    pub fn empty_object() -> Self {
        Node::Object(Vec::new())
    }

    pub fn tag(&self) -> Tag {
        match self {
            Node::Null => Tag::Null,
            Node::Bool(_) => Tag::Bool,
            Node::Int32(_) => Tag::Int32,
            Node::UInt32(_) => Tag::UInt32,
            Node::Int64(_) => Tag::Int64,
            Node::UInt64(_) => Tag::UInt64,
            Node::Double(_) => Tag::Double,
            Node::String(_) => Tag::String,
            Node::Array(_) => Tag::Array,
            Node::Object(_) => Tag::Object,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.tag().kind()
    }

    /// True when the node carries no child handles.
    pub fn is_leaf(&self) -> bool {
        match self {
            Node::Array(items) => items.is_empty(),
            Node::Object(members) => members.is_empty(),
            _ => true,
        }
    }

    /// First member with `key`; later duplicates are never visible.
    pub fn member(&self, key: &str) -> Option<NodeId> {
        match self {
            Node::Object(members) => members
                .iter()
                .find(|member| member.key == key)
                .map(|member| member.value),
            _ => None,
        }
    }

    pub fn element(&self, index: usize) -> Option<NodeId> {
        match self {
            Node::Array(items) => items.get(index).copied(),
            _ => None,
        }
    }

    /// Number of elements for arrays, members for objects, 0 otherwise.
    pub fn child_len(&self) -> usize {
        match self {
            Node::Array(items) => items.len(),
            Node::Object(members) => members.len(),
            _ => 0,
        }
    }

    /// Empty the container in place. Scalars are left untouched.
    pub fn clear_children(&mut self) {
        match self {
            Node::Array(items) => items.clear(),
            Node::Object(members) => members.clear(),
            _ => {}
        }
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Int32(value)
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::UInt32(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Int64(value)
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Node::UInt64(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Double(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_owned())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}
