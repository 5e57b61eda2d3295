mod node;
mod subtree;

use smol_str::SmolStr;

pub use node::{Member, Node, NodeKind, Tag};
pub use subtree::{Inspect, Ref, Subtree};

/// Stable handle to a node slot inside one [`Arena`].
///
/// Handles stay valid while the arena grows; they are only meaningful for the
/// arena that minted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Bump-style node pool backing one document.
///
/// Nodes are never freed individually. Replacing or removing a subtree leaves
/// its slots unreachable until the arena is dropped, cleared or rebuilt by
/// [`Document::compact`](crate::Document::compact).
#[derive(Debug, Default)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of slots allocated so far, reachable or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// # Panics
    /// Panics if `id` was not minted by this arena.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// # Panics
    /// Panics if `id` was not minted by this arena.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Move a node out of its slot, leaving Null behind.
    pub fn take(&mut self, id: NodeId) -> Node {
        std::mem::take(self.node_mut(id))
    }

    /// Deep copy `source` (from any arena, or standalone) into this arena.
    ///
    /// Slots are reserved parent-first and filled from a work list, so the
    /// depth of the source does not grow the call stack.
    pub fn import(&mut self, source: Ref<'_>) -> NodeId {
        let root = self.alloc(Node::Null);
        let mut pending = vec![(source, root)];
        while let Some((source, target)) = pending.pop() {
            let node = match source.node() {
                Node::Array(_) => Node::Array(
                    source
                        .elements()
                        .map(|child| {
                            let slot = self.alloc(Node::Null);
                            pending.push((child, slot));
                            slot
                        })
                        .collect(),
                ),
                Node::Object(_) => Node::Object(
                    source
                        .members()
                        .map(|(key, child)| {
                            let slot = self.alloc(Node::Null);
                            pending.push((child, slot));
                            Member {
                                key: SmolStr::new(key),
                                value: slot,
                            }
                        })
                        .collect(),
                ),
                scalar => scalar.clone(),
            };
            *self.node_mut(target) = node;
        }
        root
    }

    pub(crate) fn root_ref(&self, id: NodeId) -> Ref<'_> {
        Ref::new(Some(self), self.node(id))
    }
}
