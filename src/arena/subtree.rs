use std::fmt;

use super::{Arena, Node, NodeId, NodeKind, Tag};

/// Read-only handle to a node and, when it lives in one, its arena.
///
/// A `Ref` never creates anything, so it is the way to inspect a tree without
/// the auto-vivifying side effects of [`View::field`](crate::View::field).
#[derive(Clone, Copy)]
pub struct Ref<'a> {
    arena: Option<&'a Arena>,
    node: &'a Node,
}

impl<'a> Ref<'a> {
    pub(crate) fn new(arena: Option<&'a Arena>, node: &'a Node) -> Self {
        Self { arena, node }
    }

    /// A standalone node has no arena and therefore no reachable children.
    pub fn standalone(node: &'a Node) -> Self {
        Self { arena: None, node }
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub(crate) fn resolve(&self, id: NodeId) -> Option<Ref<'a>> {
        let arena = self.arena?;
        arena.get(id).map(|node| Ref::new(Some(arena), node))
    }

    /// Member lookup without creating anything.
    pub fn get(&self, key: &str) -> Option<Ref<'a>> {
        self.node.member(key).and_then(|id| self.resolve(id))
    }

    /// Element lookup; out-of-range yields `None`.
    pub fn at(&self, index: usize) -> Option<Ref<'a>> {
        self.node.element(index).and_then(|id| self.resolve(id))
    }

    /// Array elements in order. Empty for every other kind.
    pub fn elements(&self) -> impl Iterator<Item = Ref<'a>> + 'a {
        let this = *self;
        let items: &'a [NodeId] = match self.node {
            Node::Array(items) => items,
            _ => &[],
        };
        items.iter().filter_map(move |id| this.resolve(*id))
    }

    /// Object members in insertion order. Empty for every other kind.
    pub fn members(&self) -> impl Iterator<Item = (&'a str, Ref<'a>)> + 'a {
        let this = *self;
        let members: &'a [super::Member] = match self.node {
            Node::Object(members) => members,
            _ => &[],
        };
        members.iter().filter_map(move |member| {
            this.resolve(member.value)
                .map(|child| (member.key.as_str(), child))
        })
    }

    /// Structural equality that also requires identical storage tags, so
    /// `Int32(5)` and `Int64(5)` differ here while `==` treats them as equal.
    pub fn identical(&self, other: &Ref<'_>) -> bool {
        subtree_eq(*self, *other, Numbers::ExactTag)
    }

    pub fn serialize(&self) -> String {
        crate::encode::to_string(*self, &crate::SerializeOptions::default())
    }

    pub(crate) fn standalone_node(self) -> Option<Node> {
        if self.node.is_leaf() {
            Some(self.node.clone())
        } else {
            None
        }
    }
}

impl fmt::Debug for Ref<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ref").field(&self.serialize()).finish()
    }
}

impl PartialEq for Ref<'_> {
    fn eq(&self, other: &Self) -> bool {
        subtree_eq(*self, *other, Numbers::ByValue)
    }
}

#[derive(Clone, Copy)]
enum Numbers {
    ByValue,
    ExactTag,
}

/// Ordered structural comparison. Object members compare pair-wise in stored
/// order, so the same members inserted in a different order are unequal.
/// Children are compared from a work list rather than by recursion.
fn subtree_eq(a: Ref<'_>, b: Ref<'_>, numbers: Numbers) -> bool {
    let mut pending = vec![(a, b)];
    while let Some((a, b)) = pending.pop() {
        let equal = match (a.node, b.node) {
            (Node::Null, Node::Null) => true,
            (Node::Bool(x), Node::Bool(y)) => x == y,
            (Node::String(x), Node::String(y)) => x == y,
            (Node::Double(x), Node::Double(y)) => x == y,
            (Node::Array(xs), Node::Array(ys)) => {
                if xs.len() != ys.len() {
                    return false;
                }
                for (x, y) in xs.iter().zip(ys) {
                    match (a.resolve(*x), b.resolve(*y)) {
                        (Some(x), Some(y)) => pending.push((x, y)),
                        _ => return false,
                    }
                }
                true
            }
            (Node::Object(xs), Node::Object(ys)) => {
                if xs.len() != ys.len() {
                    return false;
                }
                for (x, y) in xs.iter().zip(ys) {
                    if x.key != y.key {
                        return false;
                    }
                    match (a.resolve(x.value), b.resolve(y.value)) {
                        (Some(x), Some(y)) => pending.push((x, y)),
                        _ => return false,
                    }
                }
                true
            }
            (x, y) => match numbers {
                Numbers::ExactTag => x == y,
                Numbers::ByValue => match (integer(x), integer(y)) {
                    (Some(x), Some(y)) => x == y,
                    _ => false,
                },
            },
        };
        if !equal {
            return false;
        }
    }
    true
}

fn integer(node: &Node) -> Option<i128> {
    match node {
        Node::Int32(v) => Some(i128::from(*v)),
        Node::UInt32(v) => Some(i128::from(*v)),
        Node::Int64(v) => Some(i128::from(*v)),
        Node::UInt64(v) => Some(i128::from(*v)),
        _ => None,
    }
}

/// Typed inspection shared by documents, views and refs.
///
/// Every reader takes a default and returns it unless the stored tag matches
/// the requested width and signedness exactly. There is no numeric coercion:
/// an `Int32` read through [`to_uint`](Inspect::to_uint) yields the default.
pub trait Inspect {
    fn node(&self) -> &Node;

    fn kind(&self) -> NodeKind {
        self.node().kind()
    }

    fn tag(&self) -> Tag {
        self.node().tag()
    }

    fn is_null(&self) -> bool {
        matches!(self.node(), Node::Null)
    }

    fn is_bool(&self) -> bool {
        matches!(self.node(), Node::Bool(_))
    }

    fn is_number(&self) -> bool {
        self.kind() == NodeKind::Number
    }

    fn is_double(&self) -> bool {
        matches!(self.node(), Node::Double(_))
    }

    fn is_string(&self) -> bool {
        matches!(self.node(), Node::String(_))
    }

    fn is_array(&self) -> bool {
        matches!(self.node(), Node::Array(_))
    }

    fn is_object(&self) -> bool {
        matches!(self.node(), Node::Object(_))
    }

    fn to_bool(&self, default: bool) -> bool {
        match self.node() {
            Node::Bool(v) => *v,
            _ => default,
        }
    }

    fn to_double(&self, default: f64) -> f64 {
        match self.node() {
            Node::Double(v) => *v,
            _ => default,
        }
    }

    fn to_int(&self, default: i32) -> i32 {
        match self.node() {
            Node::Int32(v) => *v,
            _ => default,
        }
    }

    fn to_uint(&self, default: u32) -> u32 {
        match self.node() {
            Node::UInt32(v) => *v,
            _ => default,
        }
    }

    fn to_longlong(&self, default: i64) -> i64 {
        match self.node() {
            Node::Int64(v) => *v,
            _ => default,
        }
    }

    fn to_ulonglong(&self, default: u64) -> u64 {
        match self.node() {
            Node::UInt64(v) => *v,
            _ => default,
        }
    }

    fn to_str<'s>(&'s self, default: &'s str) -> &'s str {
        self.as_str().unwrap_or(default)
    }

    fn as_str(&self) -> Option<&str> {
        match self.node() {
            Node::String(v) => Some(v),
            _ => None,
        }
    }

    /// Element count for arrays; 0 for every other kind.
    fn len(&self) -> usize {
        match self.node() {
            Node::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// Member keys in insertion order; empty unless the node is an object.
    fn keys(&self) -> Vec<&str> {
        match self.node() {
            Node::Object(members) => members.iter().map(|member| member.key.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.node().member(key).is_some()
    }
}

impl Inspect for Ref<'_> {
    fn node(&self) -> &Node {
        self.node
    }
}

/// Anything that can be deep-copied into an arena: scalars, standalone values,
/// views, refs and whole documents.
pub trait Subtree {
    fn copy_into(&self, arena: &mut Arena) -> NodeId;

    /// The value as a standalone node, if it has no children to carry.
    fn to_standalone(&self) -> Option<Node>;
}

impl<T: Subtree + ?Sized> Subtree for &T {
    fn copy_into(&self, arena: &mut Arena) -> NodeId {
        (**self).copy_into(arena)
    }

    fn to_standalone(&self) -> Option<Node> {
        (**self).to_standalone()
    }
}

impl Subtree for Ref<'_> {
    fn copy_into(&self, arena: &mut Arena) -> NodeId {
        arena.import(*self)
    }

    fn to_standalone(&self) -> Option<Node> {
        self.standalone_node()
    }
}

macro_rules! scalar_subtree {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Subtree for $ty {
                fn copy_into(&self, arena: &mut Arena) -> NodeId {
                    arena.alloc(Node::from(*self))
                }

                fn to_standalone(&self) -> Option<Node> {
                    Some(Node::from(*self))
                }
            }
        )*
    };
}

scalar_subtree!(bool, i32, u32, i64, u64, f64);

impl Subtree for str {
    fn copy_into(&self, arena: &mut Arena) -> NodeId {
        arena.alloc(Node::from(self))
    }

    fn to_standalone(&self) -> Option<Node> {
        Some(Node::from(self))
    }
}

impl Subtree for String {
    fn copy_into(&self, arena: &mut Arena) -> NodeId {
        self.as_str().copy_into(arena)
    }

    fn to_standalone(&self) -> Option<Node> {
        self.as_str().to_standalone()
    }
}
