use crate::error::{GeoLookupError, Result};
use crate::kdtree::arena::NodeArena;
use crate::kdtree::KDTreeBuilder;
use crate::r#type::IndexableNum;

/// An immutable 2D KDTree.
///
/// Usually this will be created from scratch via [`KDTreeBuilder`]. The tree owns every node in a
/// single [`NodeArena`]; dropping the tree drops all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct KDTree<N: IndexableNum> {
    pub(crate) arena: NodeArena<N>,
}

impl<N: IndexableNum> KDTree<N> {
    /// Build a tree over a slice of `(x, y)` pairs. Query results are positions in `coords`.
    pub fn from_coords(coords: &[(N, N)]) -> Result<Self> {
        let num_items = u32::try_from(coords.len()).map_err(|_| {
            GeoLookupError::General(format!("Too many items for a KDTree: {}", coords.len()))
        })?;
        let mut builder = KDTreeBuilder::new(num_items)?;
        for &(x, y) in coords {
            builder.add(x, y);
        }
        builder.finish()
    }

    /// Consume the tree, returning its node arena.
    pub fn into_inner(self) -> NodeArena<N> {
        self.arena
    }
}
