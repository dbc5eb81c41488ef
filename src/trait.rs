//! The contract shared by every lookup strategy.

use crate::error::Result;
use crate::record::RecordTrait;

/// An immutable index built once over a borrowed slice of records.
///
/// The index never mutates or reorders the slice it was built from, and every record it returns
/// is a reference into that slice. Dropping the index releases everything it owns.
pub trait RecordIndex<'a, R: RecordTrait + 'a> {
    /// Build the index over `records`.
    ///
    /// Fails only if backing storage cannot be allocated, in which case nothing is returned and
    /// there is nothing to query or drop.
    fn build(records: &'a [R]) -> Result<Self>
    where
        Self: Sized;

    /// The number of records covered by this index.
    fn num_items(&self) -> usize;

    /// Returns `true` if the index was built from zero records.
    fn is_empty(&self) -> bool {
        self.num_items() == 0
    }
}

/// An index that answers exact lookups by record identifier.
pub trait IdIndex<'a, R: RecordTrait + 'a>: RecordIndex<'a, R> {
    /// Find the record with identifier `id`, or `None` if no record has it.
    fn lookup_by_id(&self, id: i64) -> Option<&'a R>;
}

/// An index that answers nearest-neighbor lookups by coordinate.
pub trait CoordIndex<'a, R: RecordTrait + 'a>: RecordIndex<'a, R> {
    /// Find the record closest to `(lon, lat)` by euclidean distance.
    ///
    /// Returns `None` only if the index is empty.
    fn lookup_by_coord(&self, lon: R::T, lat: R::T) -> Option<&'a R>;
}
