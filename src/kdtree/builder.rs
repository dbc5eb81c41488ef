use geo_traits::CoordTrait;

use crate::error::{GeoLookupError, Result};
use crate::kdtree::arena::{KDNode, NodeArena, NodeId};
use crate::kdtree::KDTree;
use crate::r#type::{Axis, IndexableNum};

/// A builder to create a [`KDTree`].
///
/// ```
/// use geo_lookup::kdtree::{KDTreeBuilder, KDTreeIndex};
///
/// let mut builder = KDTreeBuilder::<f64>::new(3).unwrap();
/// builder.add(0., 0.);
/// builder.add(10., 0.);
/// builder.add(5., 5.);
/// let tree = builder.finish().unwrap();
///
/// assert_eq!(tree.nearest(4., 4.), Some(2));
/// ```
#[derive(Debug)]
pub struct KDTreeBuilder<N: IndexableNum> {
    /// Interleaved x/y pairs in insertion order
    coords: Vec<N>,
    num_items: usize,
}

impl<N: IndexableNum> KDTreeBuilder<N> {
    /// Create a new builder with room for the provided number of items.
    pub fn new(num_items: u32) -> Result<Self> {
        let num_items = num_items as usize;
        let mut coords = Vec::new();
        coords.try_reserve_exact(num_items * 2)?;
        Ok(Self { coords, num_items })
    }

    /// The number of items this builder was created for.
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Add a point to the index.
    ///
    /// This returns the insertion index, which provides a lookup back into the original data.
    #[inline]
    pub fn add(&mut self, x: N, y: N) -> u32 {
        let index = self.coords.len() >> 1;
        self.coords.push(x);
        self.coords.push(y);
        index as u32
    }

    /// Add a point to the index.
    ///
    /// This returns the insertion index, which provides a lookup back into the original data.
    #[inline]
    pub fn add_coord(&mut self, coord: &impl CoordTrait<T = N>) -> u32 {
        self.add(coord.x(), coord.y())
    }

    /// Consume this builder, performing the median split and generating a KDTree ready for
    /// queries.
    pub fn finish(self) -> Result<KDTree<N>> {
        let added = self.coords.len() >> 1;
        if added != self.num_items {
            log::warn!(
                "Rejecting kd-tree build: added {} items when expected {}",
                added,
                self.num_items
            );
            return Err(GeoLookupError::ItemCount {
                expected: self.num_items,
                actual: added,
            });
        }

        if let Some(pos) = self.coords.iter().position(|c| !c.is_comparable()) {
            let index = pos >> 1;
            log::warn!("Rejecting kd-tree build: item {} has a NaN coordinate", index);
            return Err(GeoLookupError::InvalidCoordinate { index });
        }

        let mut items: Vec<u32> = Vec::new();
        items.try_reserve_exact(added)?;
        items.extend(0..added as u32);

        let mut arena = NodeArena::try_with_capacity(added)?;
        build_subtree(&self.coords, &mut items, &mut arena, 0)?;
        debug_assert!(arena.is_full(), "every item is placed exactly once");

        log::debug!("Built kd-tree with {} nodes", arena.len());
        Ok(KDTree { arena })
    }
}

/// Place the median of `items` on the axis for `depth`, then recurse into both halves.
///
/// `items` is the private working permutation of insertion indices. The arena doubles as the
/// placement cursor: the current node takes the next free slot before either subtree does, so
/// slots end up in pre-order with the root at 0. Returns the handle of the node placed here.
fn build_subtree<N: IndexableNum>(
    coords: &[N],
    items: &mut [u32],
    arena: &mut NodeArena<N>,
    depth: usize,
) -> Result<Option<NodeId>> {
    if items.is_empty() {
        return Ok(None);
    }

    let axis = Axis::from_depth(depth);
    let value = |item: u32| coords[2 * item as usize + axis.index()];

    // Everything before the median orders <= it on this axis, everything after >= it.
    let median = items.len() / 2;
    items.select_nth_unstable_by(median, |&a, &b| value(a).total_cmp(&value(b)));

    let item = items[median];
    let x = coords[2 * item as usize];
    let y = coords[2 * item as usize + 1];
    let id = arena.alloc(KDNode::new(x, y, item, axis))?;

    let (left, rest) = items.split_at_mut(median);
    let right = &mut rest[1..];
    let left = build_subtree(coords, left, arena, depth + 1)?;
    let right = build_subtree(coords, right, arena, depth + 1)?;
    arena.link(id, left, right);

    Ok(Some(id))
}
