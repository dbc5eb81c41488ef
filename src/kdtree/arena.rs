//! Flat, fixed-capacity node storage for a KDTree.

use crate::error::{GeoLookupError, Result};
use crate::r#type::{Axis, IndexableNum};

/// A handle to a node, relative to the [`NodeArena`] that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The position of this node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One point of the tree, placed in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KDNode<N: IndexableNum> {
    pub(crate) x: N,
    pub(crate) y: N,
    /// Insertion index of the point
    pub(crate) item: u32,
    pub(crate) axis: Axis,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<N: IndexableNum> KDNode<N> {
    pub(crate) fn new(x: N, y: N, item: u32, axis: Axis) -> Self {
        Self {
            x,
            y,
            item,
            axis,
            left: None,
            right: None,
        }
    }

    /// The x coordinate of this node.
    #[inline]
    pub fn x(&self) -> N {
        self.x
    }

    /// The y coordinate of this node.
    #[inline]
    pub fn y(&self) -> N {
        self.y
    }

    /// The insertion index of the point stored in this node.
    #[inline]
    pub fn item(&self) -> u32 {
        self.item
    }

    /// The axis this node splits its children over.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The value of this node on its own split axis.
    #[inline]
    pub fn split_value(&self) -> N {
        self.axis.select(self.x, self.y)
    }

    /// Handle of the subtree holding values `<=` the split value.
    #[inline]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Handle of the subtree holding values `>=` the split value.
    #[inline]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Pre-sized storage for every node of one tree.
///
/// The capacity is reserved once up front and the arena never grows past it. Nodes are placed
/// at the cursor (the current length) and linked to their children by [`NodeId`].
#[derive(Debug, Clone, PartialEq)]
pub struct NodeArena<N: IndexableNum> {
    nodes: Vec<KDNode<N>>,
    capacity: usize,
}

impl<N: IndexableNum> NodeArena<N> {
    /// Reserve room for exactly `capacity` nodes.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(capacity)?;
        Ok(Self { nodes, capacity })
    }

    /// Place `node` in the next free slot and return its handle.
    ///
    /// Fails without touching the arena once every reserved slot is taken.
    #[inline]
    pub(crate) fn alloc(&mut self, node: KDNode<N>) -> Result<NodeId> {
        if self.is_full() {
            return Err(GeoLookupError::General(format!(
                "Arena of capacity {} is full.",
                self.capacity
            )));
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        Ok(id)
    }

    /// Attach the children of an already placed node.
    #[inline]
    pub(crate) fn link(&mut self, id: NodeId, left: Option<NodeId>, right: Option<NodeId>) {
        let node = &mut self.nodes[id.index()];
        node.left = left;
        node.right = right;
    }

    /// Returns `true` once every reserved slot holds a node.
    pub(crate) fn is_full(&self) -> bool {
        self.nodes.len() == self.capacity
    }

    /// The node behind a handle.
    #[inline]
    pub fn get(&self, id: NodeId) -> &KDNode<N> {
        &self.nodes[id.index()]
    }

    /// The root of the tree. Nodes are placed in pre-order, so this is the first slot.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId(0))
        }
    }

    /// All nodes, in placement order.
    pub fn nodes(&self) -> &[KDNode<N>] {
        &self.nodes
    }

    /// The number of nodes placed.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
