//! An implementation of an immutable 2D K-D Tree over a flat node arena.

#![warn(missing_docs)]

mod arena;
mod builder;
mod index;
mod r#trait;
mod traversal;

pub use arena::{KDNode, NodeArena, NodeId};
pub use builder::KDTreeBuilder;
pub use index::KDTree;
pub use r#trait::KDTreeIndex;
pub use traversal::Node;
