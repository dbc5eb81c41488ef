use crate::error::{GeoLookupError, Result};
use crate::kdtree::{KDTree, KDTreeBuilder, KDTreeIndex, NodeArena};
use crate::r#trait::{CoordIndex, RecordIndex};
use crate::record::RecordTrait;

/// Answers nearest-neighbor lookups with a [`KDTree`] over the records' coordinates.
#[derive(Debug, Clone)]
pub struct KDTreeCoordIndex<'a, R: RecordTrait> {
    records: &'a [R],
    tree: KDTree<R::T>,
}

impl<'a, R: RecordTrait> KDTreeCoordIndex<'a, R> {
    /// The underlying tree. Item indices in it are positions in the record slice.
    pub fn tree(&self) -> &KDTree<R::T> {
        &self.tree
    }

    /// Resolve an item index returned by a tree query into its record.
    #[inline]
    pub fn record(&self, item: u32) -> &'a R {
        &self.records[item as usize]
    }
}

impl<'a, R: RecordTrait> RecordIndex<'a, R> for KDTreeCoordIndex<'a, R> {
    fn build(records: &'a [R]) -> Result<Self> {
        let num_items = u32::try_from(records.len()).map_err(|_| {
            GeoLookupError::General(format!("Too many records for a KDTree: {}", records.len()))
        })?;

        let mut builder = KDTreeBuilder::new(num_items)?;
        for record in records {
            builder.add(record.lon(), record.lat());
        }
        let tree = builder.finish()?;

        Ok(Self { records, tree })
    }

    fn num_items(&self) -> usize {
        self.records.len()
    }
}

impl<'a, R: RecordTrait> CoordIndex<'a, R> for KDTreeCoordIndex<'a, R> {
    fn lookup_by_coord(&self, lon: R::T, lat: R::T) -> Option<&'a R> {
        self.tree.nearest(lon, lat).map(|item| self.record(item))
    }
}

impl<R: RecordTrait> KDTreeIndex<R::T> for KDTreeCoordIndex<'_, R> {
    fn arena(&self) -> &NodeArena<R::T> {
        self.tree.arena()
    }
}
