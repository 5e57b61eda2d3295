use std::fmt;

use crate::arena::{Arena, Inspect, Node, NodeId, Ref, Subtree};
use crate::{decode, encode, ParseOptions, Result, SerializeOptions, View};

/// Owning root of a JSON tree: one arena plus the handle of its root node.
///
/// Every [`View`] derived from a document borrows it, so the borrow checker
/// rules out views that outlive the document, survive a move, or alias a
/// replaced root. `Clone` is a full deep copy.
///
/// # Examples
/// ```
/// use rjson::{Document, Inspect};
///
/// let mut doc = Document::parse(r#"{"count":2,"names":["zhangsan","wangwu"]}"#)?;
/// assert_eq!(doc.field("count").to_int(0), 2);
/// doc.field("names").remove(0);
/// assert_eq!(doc.serialize(), r#"{"count":2,"names":["wangwu"]}"#);
/// # Ok::<(), rjson::Error>(())
/// ```
pub struct Document {
    arena: Arena,
    root: NodeId,
}

impl Document {
    /// An empty document whose root is Null.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.alloc(Node::Null);
        Self { arena, root }
    }

    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_slice(input.as_bytes())
    }

    pub fn parse_slice(input: &[u8]) -> Result<Self> {
        Self::parse_with_options(input, &ParseOptions::default())
    }

    pub fn parse_with_options(input: impl AsRef<[u8]>, options: &ParseOptions) -> Result<Self> {
        let (arena, root) = decode::from_slice(input.as_ref(), options)?;
        Ok(Self { arena, root })
    }

    pub fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        let (arena, root) = decode::from_json_value(value)?;
        Ok(Self { arena, root })
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        crate::serde::to_json_value(self.as_ref())
    }

    pub(crate) fn from_subtree<S: Subtree + ?Sized>(source: &S) -> Self {
        let mut arena = Arena::new();
        let root = source.copy_into(&mut arena);
        Self { arena, root }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn as_ref(&self) -> Ref<'_> {
        self.arena.root_ref(self.root)
    }

    /// Mutable view of the root node.
    pub fn view(&mut self) -> View<'_> {
        View::attached(&mut self.arena, self.root)
    }

    pub fn field(&mut self, key: &str) -> View<'_> {
        self.view().into_field(key)
    }

    pub fn try_field(&mut self, key: &str) -> Result<View<'_>> {
        self.view().try_into_field(key)
    }

    pub fn index(&mut self, index: usize) -> View<'_> {
        self.view().into_index(index)
    }

    pub fn try_index(&mut self, index: usize) -> Result<View<'_>> {
        self.view().try_into_index(index)
    }

    pub fn last(&mut self) -> View<'_> {
        self.view().into_last()
    }

    pub fn try_last(&mut self) -> Result<View<'_>> {
        self.view().try_into_last()
    }

    pub fn get(&self, key: &str) -> Option<Ref<'_>> {
        self.as_ref().get(key)
    }

    pub fn at(&self, index: usize) -> Option<Ref<'_>> {
        self.as_ref().at(index)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<View<'_>> {
        self.view().into_member(key)
    }

    pub fn append<S: Subtree>(&mut self, value: S) {
        self.view().append(value);
    }

    pub fn try_append<S: Subtree>(&mut self, value: S) -> Result<()> {
        self.view().try_append(value)
    }

    pub fn remove_key(&mut self, key: &str) {
        self.view().remove_key(key);
    }

    pub fn remove_range(&mut self, start: usize, count: usize) {
        self.view().remove_range(start, count);
    }

    pub fn try_remove_range(&mut self, start: usize, count: usize) -> Result<()> {
        self.view().try_remove_range(start, count)
    }

    pub fn remove(&mut self, index: usize) {
        self.view().remove(index);
    }

    pub fn clear(&mut self) {
        self.view().clear();
    }

    pub fn reset(&mut self) {
        self.view().reset();
    }

    pub fn set_object(&mut self) {
        self.view().set_object();
    }

    pub fn set_array(&mut self) {
        self.view().set_array();
    }

    pub fn set_value<S: Subtree>(&mut self, value: S) {
        self.view().set_value(value);
    }

    pub fn serialize(&self) -> String {
        encode::to_string(self.as_ref(), &SerializeOptions::default())
    }

    pub fn serialize_with_options(&self, options: &SerializeOptions) -> String {
        encode::to_string(self.as_ref(), options)
    }

    pub fn to_vec(&self) -> Vec<u8> {
        encode::to_vec(self.as_ref(), &SerializeOptions::default())
    }

    /// Independent deep copy of the whole tree. Later mutation of either side
    /// never shows through to the other.
    pub fn detach(&self) -> Document {
        Self::from_subtree(&self.as_ref())
    }

    /// Replace the whole tree with a deep copy of `source`. The old arena is
    /// discarded, so nothing of the previous content survives.
    pub fn reattach<S: Subtree>(&mut self, source: S) {
        *self = Self::from_subtree(&source);
    }

    /// Move the tree out, leaving this document empty with a Null root and a
    /// fresh arena.
    pub fn take(&mut self) -> Document {
        std::mem::take(self)
    }

    /// Rebuild the arena with only the nodes reachable from the root.
    pub fn compact(&mut self) {
        *self = self.detach();
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Document {
    fn clone(&self) -> Self {
        self.detach()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.as_ref() == other.as_ref()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.arena.len())
            .field("value", &self.serialize())
            .finish()
    }
}

impl Inspect for Document {
    fn node(&self) -> &Node {
        self.arena.node(self.root)
    }
}

impl Subtree for Document {
    fn copy_into(&self, arena: &mut Arena) -> NodeId {
        arena.import(self.as_ref())
    }

    fn to_standalone(&self) -> Option<Node> {
        self.as_ref().to_standalone()
    }
}

impl std::str::FromStr for Document {
    type Err = crate::Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::parse(input)
    }
}
