#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
pub mod lookup;
pub mod record;
mod r#trait;
mod r#type;

pub use error::{GeoLookupError, Result};
pub use r#trait::{CoordIndex, IdIndex, RecordIndex};
pub use r#type::{Axis, Coord, IndexableNum};
pub use record::{Record, RecordTrait};

#[cfg(test)]
pub(crate) mod test;
