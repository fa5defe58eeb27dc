use std::fmt::{Debug, Display};

use num_traits::{Bounded, NumCast};
use ordered_float::OrderedFloat;

/// Numeric type usable as an edge weight in an adjacency matrix.
///
/// Every weight type carries a sentinel meaning "no edge" / "unreachable".
/// The sentinel is chosen so that adding two sentinels never overflows,
/// and the default weight bound keeps every simple path strictly below it.
pub trait EdgeWeight: Copy + Ord + Debug + Display + Send + Sync + 'static {
    /// The weight of the empty path
    fn zero() -> Self;

    /// The value stored for absent edges and unreachable pairs
    fn sentinel() -> Self;

    /// Largest absolute weight allowed in a graph with `vertex_count` vertices
    fn default_bound(vertex_count: usize) -> Self;

    /// Returns true if this weight lies in `[-bound, bound]`
    fn is_within(self, bound: Self) -> bool;

    /// Adds two path lengths without wrapping around
    fn path_sum(self, other: Self) -> Self;

    /// Returns true if this value denotes "no path"
    fn is_sentinel(self) -> bool {
        self >= Self::sentinel()
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl EdgeWeight for $t {
                fn zero() -> Self {
                    0
                }

                fn sentinel() -> Self {
                    <$t as Bounded>::max_value() / 2
                }

                fn default_bound(vertex_count: usize) -> Self {
                    let n = <$t as NumCast>::from(vertex_count.max(1))
                        .unwrap_or(<$t as Bounded>::max_value());
                    Self::sentinel() / n
                }

                fn is_within(self, bound: Self) -> bool {
                    self >= -bound && self <= bound
                }

                fn path_sum(self, other: Self) -> Self {
                    self.saturating_add(other)
                }
            }
        )*
    };
}

impl_integer_weight!(i16, i32, i64);

impl EdgeWeight for OrderedFloat<f64> {
    fn zero() -> Self {
        OrderedFloat(0.0)
    }

    fn sentinel() -> Self {
        OrderedFloat(f64::INFINITY)
    }

    fn default_bound(vertex_count: usize) -> Self {
        OrderedFloat(f64::MAX / vertex_count.max(1) as f64)
    }

    fn is_within(self, bound: Self) -> bool {
        self.0.is_finite() && self.0.abs() <= bound.0
    }

    fn path_sum(self, other: Self) -> Self {
        OrderedFloat(self.0 + other.0)
    }
}
