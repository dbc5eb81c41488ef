use std::cmp::Ordering;
use std::fmt::Debug;

use geo_traits::CoordTrait;
use num_traits::{Bounded, Num, NumCast, ToPrimitive};

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Every implementation
/// widens losslessly into `f64`, which is the type all distance arithmetic happens in. That keeps
/// squared deltas from overflowing narrow integer types and avoids subtracting unsigned values.
pub trait IndexableNum:
    private::Sealed + Num + NumCast + ToPrimitive + PartialOrd + Debug + Send + Sync + Copy + Bounded
{
    /// Widen this value into an `f64` without losing precision.
    fn as_f64(self) -> f64;

    /// A three-way comparison that inspects sign and magnitude directly.
    ///
    /// Floats use the IEEE 754 total ordering, so this never needs a lossy cast and never fails.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Returns `true` if this value can be ordered against every other value of its type.
    #[inline]
    fn is_comparable(self) -> bool {
        self.partial_cmp(&self).is_some()
    }
}

macro_rules! impl_indexable_int {
    ($($t:ty),*) => {
        $(
            impl IndexableNum for $t {
                #[inline]
                fn as_f64(self) -> f64 {
                    self.into()
                }

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_indexable_int!(i8, u8, i16, u16, i32, u32);

impl IndexableNum for f32 {
    #[inline]
    fn as_f64(self) -> f64 {
        self.into()
    }

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

impl IndexableNum for f64 {
    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

/// The coordinate dimension a k-d tree level is split over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// The first coordinate (longitude).
    #[default]
    X,
    /// The second coordinate (latitude).
    Y,
}

impl Axis {
    /// Axes alternate strictly with depth, starting with [`Axis::X`] at the root.
    #[inline]
    pub fn from_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Self::X
        } else {
            Self::Y
        }
    }

    /// The axis used one level further down.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// 0 for x, 1 for y.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }

    /// Pick this axis' value out of an `(x, y)` pair.
    #[inline]
    pub fn select<T>(self, x: T, y: T) -> T {
        match self {
            Self::X => x,
            Self::Y => y,
        }
    }
}

/// A simple 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord<N: IndexableNum> {
    pub(crate) x: N,
    pub(crate) y: N,
}

impl<N: IndexableNum> Coord<N> {
    /// Create a new coordinate.
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }
}

impl<N: IndexableNum> CoordTrait for Coord<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

/// Squared euclidean distance between two points, computed in `f64`.
#[inline]
pub(crate) fn sq_dist<N: IndexableNum>(ax: N, ay: N, bx: N, by: N) -> f64 {
    let dx = ax.as_f64() - bx.as_f64();
    let dy = ay.as_f64() - by.as_f64();
    dx * dx + dy * dy
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
