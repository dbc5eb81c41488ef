//! Utilities to traverse the KDTree structure.

use geo_traits::{
    Dimensions, GeometryTrait, GeometryType, RectTrait, UnimplementedGeometryCollection,
    UnimplementedLine, UnimplementedLineString, UnimplementedMultiLineString,
    UnimplementedMultiPoint, UnimplementedMultiPolygon, UnimplementedPoint, UnimplementedPolygon,
    UnimplementedTriangle,
};

use crate::kdtree::arena::{KDNode, NodeId};
use crate::kdtree::KDTreeIndex;
use crate::r#type::{Axis, Coord, IndexableNum};
use std::marker::PhantomData;

/// A node in the KDTree, along with the region of the plane its subtree covers.
#[derive(Debug, Clone)]
pub struct Node<'a, N: IndexableNum, T: KDTreeIndex<N>> {
    /// The tree that this node is a reference onto
    tree: &'a T,

    id: NodeId,

    phantom: PhantomData<N>,

    min_x: N,
    min_y: N,
    max_x: N,
    max_y: N,
}

impl<'a, N: IndexableNum, T: KDTreeIndex<N>> Node<'a, N, T> {
    pub(crate) fn from_root(tree: &'a T) -> Option<Self> {
        let id = tree.arena().root()?;
        Some(Self {
            tree,
            id,
            phantom: PhantomData,
            min_x: N::min_value(),
            min_y: N::min_value(),
            max_x: N::max_value(),
            max_y: N::max_value(),
        })
    }

    #[inline]
    fn node(&self) -> &'a KDNode<N> {
        self.tree.arena().get(self.id)
    }

    /// The handle of this node in the tree's arena.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The insertion index of the point stored at this node.
    pub fn item(&self) -> u32 {
        self.node().item()
    }

    /// The point stored at this node.
    pub fn coord(&self) -> Coord<N> {
        let node = self.node();
        Coord::new(node.x(), node.y())
    }

    /// The axis that the children of this node are split over.
    pub fn axis(&self) -> Axis {
        self.node().axis()
    }

    /// The child node holding the "lower" half on this node's axis.
    ///
    /// Note that this **does not include** the point of the current node.
    pub fn left_child(&self) -> Option<Node<'a, N, T>> {
        let node = self.node();
        let id = node.left()?;

        let mut max_x = self.max_x;
        let mut max_y = self.max_y;
        match node.axis() {
            Axis::X => max_x = node.x(),
            Axis::Y => max_y = node.y(),
        }

        Some(Self {
            tree: self.tree,
            id,
            min_x: self.min_x,
            min_y: self.min_y,
            max_x,
            max_y,
            phantom: self.phantom,
        })
    }

    /// The child node holding the "upper" half on this node's axis.
    ///
    /// Note that this **does not include** the point of the current node.
    pub fn right_child(&self) -> Option<Node<'a, N, T>> {
        let node = self.node();
        let id = node.right()?;

        let mut min_x = self.min_x;
        let mut min_y = self.min_y;
        match node.axis() {
            Axis::X => min_x = node.x(),
            Axis::Y => min_y = node.y(),
        }

        Some(Self {
            tree: self.tree,
            id,
            min_x,
            min_y,
            max_x: self.max_x,
            max_y: self.max_y,
            phantom: self.phantom,
        })
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}

impl<N: IndexableNum, T: KDTreeIndex<N>> GeometryTrait for Node<'_, N, T> {
    type T = N;
    type PointType<'b>
        = UnimplementedPoint<N>
    where
        Self: 'b;
    type LineStringType<'b>
        = UnimplementedLineString<N>
    where
        Self: 'b;
    type PolygonType<'b>
        = UnimplementedPolygon<N>
    where
        Self: 'b;
    type MultiPointType<'b>
        = UnimplementedMultiPoint<N>
    where
        Self: 'b;
    type MultiLineStringType<'b>
        = UnimplementedMultiLineString<N>
    where
        Self: 'b;
    type MultiPolygonType<'b>
        = UnimplementedMultiPolygon<N>
    where
        Self: 'b;
    type GeometryCollectionType<'b>
        = UnimplementedGeometryCollection<N>
    where
        Self: 'b;
    type RectType<'b>
        = Self
    where
        Self: 'b;
    type TriangleType<'b>
        = UnimplementedTriangle<N>
    where
        Self: 'b;
    type LineType<'b>
        = UnimplementedLine<N>
    where
        Self: 'b;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        UnimplementedPoint<N>,
        UnimplementedLineString<N>,
        UnimplementedPolygon<N>,
        UnimplementedMultiPoint<N>,
        UnimplementedMultiLineString<N>,
        UnimplementedMultiPolygon<N>,
        UnimplementedGeometryCollection<N>,
        Self,
        UnimplementedTriangle<N>,
        UnimplementedLine<N>,
    > {
        GeometryType::Rect(self)
    }
}

impl<N: IndexableNum, T: KDTreeIndex<N>> RectTrait for Node<'_, N, T> {
    type CoordType<'b>
        = Coord<N>
    where
        Self: 'b;

    fn min(&self) -> Self::CoordType<'_> {
        Coord {
            x: self.min_x,
            y: self.min_y,
        }
    }

    fn max(&self) -> Self::CoordType<'_> {
        Coord {
            x: self.max_x,
            y: self.max_y,
        }
    }
}

#[cfg(test)]
mod test {
    use geo_traits::{CoordTrait, Dimensions, GeometryTrait, GeometryType, RectTrait};

    use crate::kdtree::{KDTree, KDTreeIndex};

    #[test]
    fn child_regions_stay_inside_parent() {
        let coords: Vec<(i32, i32)> = (0..50).map(|i| ((i * 37) % 101, (i * 53) % 97)).collect();
        let tree = KDTree::from_coords(&coords).unwrap();

        let mut visited = 0;
        let mut stack = vec![tree.root().unwrap()];
        while let Some(node) = stack.pop() {
            visited += 1;
            let c = node.coord();
            assert!(c.x() >= node.min().x() && c.x() <= node.max().x());
            assert!(c.y() >= node.min().y() && c.y() <= node.max().y());
            assert_eq!(coords[node.item() as usize], (c.x(), c.y()));

            for child in [node.left_child(), node.right_child()].into_iter().flatten() {
                assert!(child.min().x() >= node.min().x());
                assert!(child.max().x() <= node.max().x());
                assert!(child.min().y() >= node.min().y());
                assert!(child.max().y() <= node.max().y());
                assert_ne!(child.axis(), node.axis());
                stack.push(child);
            }
            assert_eq!(node.is_parent(), !node.is_leaf());
        }
        assert_eq!(visited, coords.len());
    }

    #[test]
    fn range_rect_over_a_child_region_finds_its_point() {
        let coords: Vec<(f64, f64)> = (0..30).map(|i| (i as f64, (i * 7 % 30) as f64)).collect();
        let tree = KDTree::from_coords(&coords).unwrap();
        let root = tree.root().unwrap();

        for child in [root.left_child(), root.right_child()].into_iter().flatten() {
            let found = tree.range_rect(&child);
            assert!(found.contains(&child.item()));
            for item in found {
                let (x, y) = coords[item as usize];
                assert!(x >= child.min().x() && x <= child.max().x());
                assert!(y >= child.min().y() && y <= child.max().y());
            }
        }
    }

    #[test]
    fn node_region_is_a_rect_geometry() {
        let coords: Vec<(u16, u16)> = vec![(10, 10), (20, 5), (5, 20)];
        let tree = KDTree::from_coords(&coords).unwrap();
        let root = tree.root().unwrap();

        assert_eq!(root.dim(), Dimensions::Xy);
        match root.as_type() {
            GeometryType::Rect(rect) => {
                assert_eq!(rect.min().x_y(), (u16::MIN, u16::MIN));
                assert_eq!(rect.max().x_y(), (u16::MAX, u16::MAX));
            }
            _ => panic!("node should be a rect"),
        }

        let mut all = tree.range_rect(&root);
        all.sort();
        assert_eq!(all, vec![0, 1, 2]);
    }

    #[test]
    fn empty_tree_has_no_root() {
        let tree = KDTree::<f32>::from_coords(&[]).unwrap();
        assert!(tree.root().is_none());
    }
}
