// src/core/trie.rs
use crate::core::types::NodeId;

/// One distinct prefix observed during training, which may or may not also
/// be a complete trained word.
#[derive(Debug, Clone)]
pub struct Node {
    token: String,
    /// Zero means "never trained as a whole word"; positive is the number of
    /// times this exact word was trained. Doubles as the full-word flag.
    occurrence_count: u64,
    /// Direct one-character extensions, in first-insertion order.
    children: Vec<NodeId>,
}

impl Node {
    fn new(token: String) -> Self {
        Self {
            token,
            occurrence_count: 0,
            children: Vec::new(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn occurrence_count(&self) -> u64 {
        self.occurrence_count
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Owns every node of the shared-prefix structure and hands out stable
/// `NodeId`s instead of references, so the graph can grow without any shared
/// mutable aliasing.
///
/// Child edges always point at later-allocated nodes (a child's token is one
/// character longer than its parent's), so the graph is acyclic by
/// construction.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocates a slot for a new token and returns its id. O(1) amortized.
    pub fn alloc(&mut self, token: String) -> NodeId {
        self.nodes.push(Node::new(token));
        self.nodes.len() - 1
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Appends `child` to the end of `parent`'s child list. Called exactly
    /// once per child, at the moment the child's token is first created.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent].children.push(child);
    }

    /// Records one more training occurrence of the node's token as a whole
    /// word. This is the only count mutation in the system.
    pub fn increment_count(&mut self, id: NodeId) {
        self.nodes[id].occurrence_count += 1;
    }

    /// Flattens the subtree below `id` (excluding `id` itself) in pre-order:
    /// each child in insertion order, immediately followed by that child's
    /// entire descendant sequence, before the next sibling.
    ///
    /// Iterative with an explicit stack, so the traversal depth is bounded
    /// regardless of how long trained words get.
    pub fn collect_descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut collected = Vec::new();
        let mut stack: Vec<NodeId> = Vec::new();
        // Reversed pushes make the stack pop siblings in insertion order.
        stack.extend(self.nodes[id].children.iter().rev());
        while let Some(next) = stack.pop() {
            collected.push(next);
            stack.extend(self.nodes[next].children.iter().rev());
        }
        collected
    }
}
