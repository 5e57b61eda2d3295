use std::fmt;

use smol_str::SmolStr;
use tracing::debug;

use crate::arena::{Arena, Inspect, Member, Node, NodeId, NodeKind, Ref, Subtree};
use crate::{Document, Error, Result};

/// A detached view: a standalone scalar or empty container that lives outside
/// any document. Used to build values for [`View::append`] and
/// [`View::set_value`], and as the inert result of a failed access.
pub type Value = View<'static>;

/// Non-owning handle to one node of a document.
///
/// An attached view mutably borrows the document's arena, so it cannot
/// outlive the document, survive a move of it, or coexist with another
/// mutable access. A detached view owns a private standalone node and has no
/// arena: anything that would allocate fails with
/// [`ErrorKind::MissingAllocator`](crate::ErrorKind::MissingAllocator).
///
/// Accessors come in two flavours. The `try_*` forms report failures as
/// [`Error`]s. The plain forms never fail: a bad access yields an inert
/// detached Null view and a bad mutation is skipped, each with a
/// `tracing::debug!` event, so long chains degrade instead of panicking.
///
/// # Examples
/// ```
/// use rjson::{Document, Inspect};
///
/// let mut doc = Document::new();
/// doc.field("object").field("name").set_value("smith");
/// doc.field("array").append("david");
/// doc.field("array").append(true);
/// assert_eq!(doc.serialize(), r#"{"object":{"name":"smith"},"array":["david",true]}"#);
///
/// // index never grows an array
/// assert!(doc.field("array").index(5).is_null());
/// assert_eq!(doc.field("array").len(), 2);
/// ```
pub struct View<'a> {
    handle: Handle<'a>,
}

enum Handle<'a> {
    Attached { arena: &'a mut Arena, id: NodeId },
    Detached(Node),
}

impl<'a> View<'a> {
    pub(crate) fn attached(arena: &'a mut Arena, id: NodeId) -> Self {
        Self {
            handle: Handle::Attached { arena, id },
        }
    }

    fn standalone(mut node: Node) -> Self {
        node.clear_children();
        Self {
            handle: Handle::Detached(node),
        }
    }

    fn inert() -> Self {
        Self::standalone(Node::Null)
    }

    pub fn is_detached(&self) -> bool {
        matches!(self.handle, Handle::Detached(_))
    }

    pub fn as_ref(&self) -> Ref<'_> {
        match &self.handle {
            Handle::Attached { arena, id } => arena.root_ref(*id),
            Handle::Detached(node) => Ref::standalone(node),
        }
    }

    fn node_mut(&mut self) -> &mut Node {
        match &mut self.handle {
            Handle::Attached { arena, id } => arena.node_mut(*id),
            Handle::Detached(node) => node,
        }
    }

    /// A shorter-lived view of the same node. Detached nodes are copied; they
    /// carry no children, so nothing reachable through the copy can diverge.
    fn reborrow(&mut self) -> View<'_> {
        match &mut self.handle {
            Handle::Attached { arena, id } => View::attached(&mut **arena, *id),
            Handle::Detached(node) => View::standalone(node.clone()),
        }
    }

    /// Creating member access. A Null receiver becomes an empty object and a
    /// missing key gets a Null member appended, so writes through the result
    /// land in the document.
    pub fn try_into_field(self, key: &str) -> Result<View<'a>> {
        let (arena, id) = match self.handle {
            Handle::Attached { arena, id } => (arena, id),
            Handle::Detached(_) => return Err(Error::missing_allocator("field")),
        };
        let node = arena.node_mut(id);
        if matches!(node, Node::Null) {
            *node = Node::empty_object();
        }
        if !matches!(node, Node::Object(_)) {
            return Err(Error::type_mismatch("field", NodeKind::Object, node.kind()));
        }
        let child = match node.member(key) {
            Some(existing) => existing,
            None => {
                let child = arena.alloc(Node::Null);
                if let Node::Object(members) = arena.node_mut(id) {
                    members.push(Member {
                        key: SmolStr::new(key),
                        value: child,
                    });
                }
                child
            }
        };
        Ok(View::attached(arena, child))
    }

    pub fn into_field(self, key: &str) -> View<'a> {
        recover("field", self.try_into_field(key))
    }

    pub fn try_field(&mut self, key: &str) -> Result<View<'_>> {
        self.reborrow().try_into_field(key)
    }

    pub fn field(&mut self, key: &str) -> View<'_> {
        self.reborrow().into_field(key)
    }

    /// Element access. Never grows the array: an index at or past the end is a
    /// bounds error, unlike [`field`](View::field) which creates.
    pub fn try_into_index(self, index: usize) -> Result<View<'a>> {
        match self.handle {
            Handle::Attached { arena, id } => {
                let child = element(arena.node(id), index, "index")?;
                Ok(View::attached(arena, child))
            }
            Handle::Detached(node) => Err(element(&node, index, "index")
                .err()
                .unwrap_or_else(|| Error::missing_allocator("index"))),
        }
    }

    pub fn into_index(self, index: usize) -> View<'a> {
        recover("index", self.try_into_index(index))
    }

    pub fn try_index(&mut self, index: usize) -> Result<View<'_>> {
        self.reborrow().try_into_index(index)
    }

    pub fn index(&mut self, index: usize) -> View<'_> {
        self.reborrow().into_index(index)
    }

    pub fn try_into_last(self) -> Result<View<'a>> {
        match self.len().checked_sub(1) {
            Some(last) => self.try_into_index(last),
            None => {
                let found = self.kind();
                if found == NodeKind::Array {
                    Err(Error::bounds("last", 0, 1, 0))
                } else {
                    Err(Error::type_mismatch("last", NodeKind::Array, found))
                }
            }
        }
    }

    pub fn into_last(self) -> View<'a> {
        recover("last", self.try_into_last())
    }

    pub fn try_last(&mut self) -> Result<View<'_>> {
        self.reborrow().try_into_last()
    }

    pub fn last(&mut self) -> View<'_> {
        self.reborrow().into_last()
    }

    /// Mutable member access that never creates.
    pub fn into_member(self, key: &str) -> Option<View<'a>> {
        match self.handle {
            Handle::Attached { arena, id } => {
                let child = arena.node(id).member(key)?;
                Some(View::attached(arena, child))
            }
            Handle::Detached(_) => None,
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Option<View<'_>> {
        self.reborrow().into_member(key)
    }

    /// Read-only member lookup without side effects.
    pub fn get(&self, key: &str) -> Option<Ref<'_>> {
        self.as_ref().get(key)
    }

    pub fn at(&self, index: usize) -> Option<Ref<'_>> {
        self.as_ref().at(index)
    }

    /// Deep copy `value` onto the end of this array. A Null receiver becomes
    /// an empty array first.
    pub fn try_append<S: Subtree>(&mut self, value: S) -> Result<()> {
        let node = self.node_mut();
        if matches!(node, Node::Null) {
            *node = Node::empty_array();
        }
        let (arena, id) = match &mut self.handle {
            Handle::Attached { arena, id } => (&mut **arena, *id),
            Handle::Detached(_) => return Err(Error::missing_allocator("append")),
        };
        let found = arena.node(id).kind();
        if found != NodeKind::Array {
            return Err(Error::type_mismatch("append", NodeKind::Array, found));
        }
        let child = value.copy_into(arena);
        if let Node::Array(items) = arena.node_mut(id) {
            items.push(child);
        }
        Ok(())
    }

    pub fn append<S: Subtree>(&mut self, value: S) {
        skip("append", self.try_append(value));
    }

    /// Drop the first member named `key`. No-op for absent keys and
    /// non-objects.
    pub fn remove_key(&mut self, key: &str) {
        if let Node::Object(members) = self.node_mut() {
            if let Some(pos) = members.iter().position(|member| member.key == key) {
                members.remove(pos);
            }
        }
    }

    /// Erase elements `start..start + count`, keeping the survivors in order.
    pub fn try_remove_range(&mut self, start: usize, count: usize) -> Result<()> {
        match self.node_mut() {
            Node::Array(items) => {
                let len = items.len();
                match start.checked_add(count) {
                    Some(end) if end <= len => {
                        items.drain(start..end);
                        Ok(())
                    }
                    _ => Err(Error::bounds(
                        "remove_range",
                        start,
                        start.saturating_add(count),
                        len,
                    )),
                }
            }
            other => Err(Error::type_mismatch(
                "remove_range",
                NodeKind::Array,
                other.kind(),
            )),
        }
    }

    pub fn remove_range(&mut self, start: usize, count: usize) {
        skip("remove_range", self.try_remove_range(start, count));
    }

    pub fn remove(&mut self, index: usize) {
        self.remove_range(index, 1);
    }

    /// Empty an array or object while keeping its kind. Scalars are untouched.
    pub fn clear(&mut self) {
        self.node_mut().clear_children();
    }

    /// Force the node to Null whatever it held before.
    pub fn reset(&mut self) {
        *self.node_mut() = Node::Null;
    }

    pub fn set_object(&mut self) {
        *self.node_mut() = Node::empty_object();
    }

    pub fn set_array(&mut self) {
        *self.node_mut() = Node::empty_array();
    }

    /// Overwrite the node in place with a scalar or a deep copy of `value`.
    pub fn try_set_value<S: Subtree>(&mut self, value: S) -> Result<()> {
        if let Some(node) = value.to_standalone() {
            *self.node_mut() = node;
            return Ok(());
        }
        match &mut self.handle {
            Handle::Attached { arena, id } => {
                let copied = value.copy_into(arena);
                let node = arena.take(copied);
                *arena.node_mut(*id) = node;
                Ok(())
            }
            Handle::Detached(_) => Err(Error::missing_allocator("set_value")),
        }
    }

    pub fn set_value<S: Subtree>(&mut self, value: S) {
        skip("set_value", self.try_set_value(value));
    }

    /// Independent deep copy of this subtree as a new document.
    pub fn detach(&self) -> Document {
        Document::from_subtree(self)
    }

    pub fn serialize(&self) -> String {
        self.as_ref().serialize()
    }
}

impl View<'static> {
    pub fn null() -> Self {
        Self::inert()
    }
}

fn element(node: &Node, index: usize, op: &'static str) -> Result<NodeId> {
    match node {
        Node::Array(items) => items
            .get(index)
            .copied()
            .ok_or_else(|| Error::bounds(op, index, index.saturating_add(1), items.len())),
        other => Err(Error::type_mismatch(op, NodeKind::Array, other.kind())),
    }
}

fn recover<'b>(op: &'static str, result: Result<View<'b>>) -> View<'b> {
    result.unwrap_or_else(|err| {
        debug!(op, error = %err, "access degraded to inert null view");
        View::inert()
    })
}

fn skip(op: &'static str, result: Result<()>) {
    if let Err(err) = result {
        debug!(op, error = %err, "mutation skipped");
    }
}

impl Inspect for View<'_> {
    fn node(&self) -> &Node {
        match &self.handle {
            Handle::Attached { arena, id } => arena.node(*id),
            Handle::Detached(node) => node,
        }
    }
}

impl Subtree for View<'_> {
    fn copy_into(&self, arena: &mut Arena) -> NodeId {
        arena.import(self.as_ref())
    }

    fn to_standalone(&self) -> Option<Node> {
        self.as_ref().to_standalone()
    }
}

impl PartialEq for View<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_ref() == other.as_ref()
    }
}

impl fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("detached", &self.is_detached())
            .field("value", &self.serialize())
            .finish()
    }
}

impl Default for View<'static> {
    fn default() -> Self {
        Self::null()
    }
}

impl From<Node> for View<'static> {
    fn from(node: Node) -> Self {
        Self::standalone(node)
    }
}

macro_rules! value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for View<'static> {
                fn from(value: $ty) -> Self {
                    Self::standalone(Node::from(value))
                }
            }
        )*
    };
}

value_from!(bool, i32, u32, i64, u64, f64, &str, String);
