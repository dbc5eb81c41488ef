//! The record interface consumed by every index, and a concrete record type.

use geo_traits::CoordTrait;

use crate::r#type::IndexableNum;

/// A geotagged record that can be indexed.
///
/// Indexes only ever read the identifier and the two coordinates. Anything else a record carries
/// is opaque to them.
pub trait RecordTrait {
    /// The numeric type of the coordinates.
    type T: IndexableNum;

    /// The unique identifier of this record.
    fn id(&self) -> i64;

    /// The first coordinate.
    fn lon(&self) -> Self::T;

    /// The second coordinate.
    fn lat(&self) -> Self::T;
}

/// A named point.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<N: IndexableNum> {
    pub id: i64,
    pub name: String,
    pub lon: N,
    pub lat: N,
}

impl<N: IndexableNum> Record<N> {
    /// Create a record without a name.
    pub fn new(id: i64, lon: N, lat: N) -> Self {
        Self {
            id,
            name: String::new(),
            lon,
            lat,
        }
    }

    /// Attach a name to this record.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<N: IndexableNum> RecordTrait for Record<N> {
    type T = N;

    #[inline]
    fn id(&self) -> i64 {
        self.id
    }

    #[inline]
    fn lon(&self) -> N {
        self.lon
    }

    #[inline]
    fn lat(&self) -> N {
        self.lat
    }
}

impl<N: IndexableNum> CoordTrait for Record<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.lon
    }

    fn y(&self) -> Self::T {
        self.lat
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.lon,
            1 => self.lat,
            _ => panic!("Invalid index of coord"),
        }
    }
}
