//! Record-level lookup strategies, all conforming to [`IdIndex`] or [`CoordIndex`].
//!
//! [`IdStrategy`] and [`CoordStrategy`] select a strategy at runtime, from a name such as
//! `"binsort"` or `"kdtree"`.

mod binsort;
mod indexed;
mod kdtree;
mod naive;

use std::fmt;
use std::str::FromStr;

pub use binsort::SortedIdIndex;
pub use indexed::IndexedIdIndex;
pub use kdtree::KDTreeCoordIndex;
pub use naive::NaiveIndex;

use crate::error::{GeoLookupError, Result};
use crate::r#trait::{CoordIndex, IdIndex, RecordIndex};
use crate::record::RecordTrait;

/// The available strategies for lookup by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IdStrategy {
    /// Scan the records in order.
    Naive,
    /// Scan a compact table of identifiers.
    Indexed,
    /// Binary search over identifiers sorted once up front.
    #[default]
    BinarySort,
}

impl IdStrategy {
    /// Every id strategy, in order of increasing build cost.
    pub const ALL: [Self; 3] = [Self::Naive, Self::Indexed, Self::BinarySort];

    /// The name this strategy is parsed from.
    pub fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Indexed => "indexed",
            Self::BinarySort => "binsort",
        }
    }

    /// Build an index of this kind over `records`.
    pub fn build<'a, R: RecordTrait + 'a>(
        self,
        records: &'a [R],
    ) -> Result<Box<dyn IdIndex<'a, R> + 'a>> {
        log::debug!("Building {} id index", self);
        Ok(match self {
            Self::Naive => Box::new(NaiveIndex::build(records)?),
            Self::Indexed => Box::new(IndexedIdIndex::build(records)?),
            Self::BinarySort => Box::new(SortedIdIndex::build(records)?),
        })
    }
}

/// The available strategies for nearest-neighbor lookup by coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoordStrategy {
    /// Scan the records in order.
    Naive,
    /// Search a 2D k-d tree.
    #[default]
    KDTree,
}

impl CoordStrategy {
    /// Every coordinate strategy.
    pub const ALL: [Self; 2] = [Self::Naive, Self::KDTree];

    /// The name this strategy is parsed from.
    pub fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::KDTree => "kdtree",
        }
    }

    /// Build an index of this kind over `records`.
    pub fn build<'a, R: RecordTrait + 'a>(
        self,
        records: &'a [R],
    ) -> Result<Box<dyn CoordIndex<'a, R> + 'a>> {
        log::debug!("Building {} coordinate index", self);
        Ok(match self {
            Self::Naive => Box::new(NaiveIndex::build(records)?),
            Self::KDTree => Box::new(KDTreeCoordIndex::build(records)?),
        })
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for CoordStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IdStrategy {
    type Err = GeoLookupError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeoLookupError::UnknownStrategy(s.to_string()))
    }
}

impl FromStr for CoordStrategy {
    type Err = GeoLookupError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeoLookupError::UnknownStrategy(s.to_string()))
    }
}
