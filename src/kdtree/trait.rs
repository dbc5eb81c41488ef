use geo_traits::{CoordTrait, RectTrait};
use tinyvec::TinyVec;

use crate::kdtree::arena::{KDNode, NodeArena, NodeId};
use crate::kdtree::{KDTree, Node};
use crate::r#type::{sq_dist, IndexableNum};

/// A trait for searching and accessing data out of a KDTree.
pub trait KDTreeIndex<N: IndexableNum>: Sized {
    /// The node storage of this tree.
    fn arena(&self) -> &NodeArena<N>;

    /// All nodes of this tree, in placement (pre-order) order.
    fn nodes(&self) -> &[KDNode<N>] {
        self.arena().nodes()
    }

    /// The number of items in this KDTree. Every item occupies exactly one node.
    fn num_items(&self) -> usize {
        self.arena().len()
    }

    /// Find the item closest to the query point.
    ///
    /// - qx: x value of query point
    /// - qy: y value of query point
    ///
    /// Returns the insertion index of the closest item, or `None` if the tree is empty.
    fn nearest(&self, qx: N, qy: N) -> Option<u32> {
        self.nearest_with_distance(qx, qy).map(|(item, _)| item)
    }

    /// Find the item closest to the query point, along with its squared distance to it.
    fn nearest_with_distance(&self, qx: N, qy: N) -> Option<(u32, f64)> {
        let arena = self.arena();
        let query = [qx.as_f64(), qy.as_f64()];
        let best = nearest_in_subtree(arena, arena.root(), query)?;
        let item = arena.get(best.node).item();
        log::trace!(
            "Nearest to ({:?}, {:?}) is item {} at squared distance {}",
            qx,
            qy,
            item,
            best.dist
        );
        Some((item, best.dist))
    }

    /// Find the item closest to the query coordinate.
    fn nearest_coord(&self, coord: &impl CoordTrait<T = N>) -> Option<u32> {
        self.nearest(coord.x(), coord.y())
    }

    /// Search the index for items within a given bounding box.
    ///
    /// - min_x: bbox
    /// - min_y: bbox
    /// - max_x: bbox
    /// - max_y: bbox
    ///
    /// Returns insertion indices of found items
    fn range(&self, min_x: N, min_y: N, max_x: N, max_y: N) -> Vec<u32> {
        let arena = self.arena();
        let mut result: Vec<u32> = vec![];

        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[NodeId; 32]> = TinyVec::new();
        stack.extend(arena.root());

        while let Some(id) = stack.pop() {
            let node = arena.get(id);
            let (x, y) = (node.x(), node.y());
            if x >= min_x && x <= max_x && y >= min_y && y <= max_y {
                result.push(node.item());
            }

            // queue search in halves that intersect the query
            let split = node.split_value();
            if node.axis().select(min_x, min_y) <= split {
                stack.extend(node.left());
            }
            if node.axis().select(max_x, max_y) >= split {
                stack.extend(node.right());
            }
        }

        result
    }

    /// Search the index for items within a given bounding box.
    ///
    /// Returns insertion indices of found items
    fn range_rect(&self, rect: &impl RectTrait<T = N>) -> Vec<u32> {
        self.range(
            rect.min().x(),
            rect.min().y(),
            rect.max().x(),
            rect.max().y(),
        )
    }

    /// Search the index for items within a given radius.
    ///
    /// - qx: x value of query point
    /// - qy: y value of query point
    /// - r: radius
    ///
    /// Returns insertion indices of found items
    fn within(&self, qx: N, qy: N, r: N) -> Vec<u32> {
        let arena = self.arena();
        let mut result: Vec<u32> = vec![];
        let r = r.as_f64();
        let r2 = r * r;
        let query = [qx.as_f64(), qy.as_f64()];

        let mut stack: TinyVec<[NodeId; 32]> = TinyVec::new();
        stack.extend(arena.root());

        while let Some(id) = stack.pop() {
            let node = arena.get(id);
            if sq_dist(node.x(), node.y(), qx, qy) <= r2 {
                result.push(node.item());
            }

            let split = node.split_value().as_f64();
            let q = query[node.axis().index()];
            if q - r <= split {
                stack.extend(node.left());
            }
            if q + r >= split {
                stack.extend(node.right());
            }
        }

        result
    }

    /// Search the index for items within a given radius.
    ///
    /// - coord: coordinate of query point
    /// - r: radius
    ///
    /// Returns insertion indices of found items
    fn within_coord(&self, coord: &impl CoordTrait<T = N>, r: N) -> Vec<u32> {
        self.within(coord.x(), coord.y(), r)
    }

    /// Access the root node of the KDTree for manual traversal.
    ///
    /// Returns `None` if the tree is empty.
    fn root(&self) -> Option<Node<'_, N, Self>> {
        Node::from_root(self)
    }
}

impl<N: IndexableNum> KDTreeIndex<N> for KDTree<N> {
    fn arena(&self) -> &NodeArena<N> {
        &self.arena
    }
}

/// The best node found so far and its squared distance to the query.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    node: NodeId,
    dist: f64,
}

/// Keep `incumbent` unless `challenger` is strictly closer.
#[inline]
fn closer(challenger: Option<Candidate>, incumbent: Candidate) -> Candidate {
    match challenger {
        Some(c) if c.dist < incumbent.dist => c,
        _ => incumbent,
    }
}

/// Descend towards the query first, then backtrack into the far side of each split only when the
/// splitting line is not farther away than the best candidate.
fn nearest_in_subtree<N: IndexableNum>(
    arena: &NodeArena<N>,
    node: Option<NodeId>,
    query: [f64; 2],
) -> Option<Candidate> {
    let id = node?;
    let node = arena.get(id);

    let q = query[node.axis().index()];
    let split = node.split_value().as_f64();
    let delta = q - split;

    let (near, far) = if q < split {
        (node.left(), node.right())
    } else {
        (node.right(), node.left())
    };

    let here = Candidate {
        node: id,
        dist: sq_dist(node.x().as_f64(), node.y().as_f64(), query[0], query[1]),
    };
    let mut best = closer(nearest_in_subtree(arena, near, query), here);

    // The far side can only hold something closer if the split line is within the best radius.
    if best.dist >= delta * delta {
        best = closer(nearest_in_subtree(arena, far, query), best);
    }

    Some(best)
}
