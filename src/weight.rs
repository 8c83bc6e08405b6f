/*!
# Edge Weights

Edges carry a signed integer weight. Every primitive signed integer qualifies as a [`Weight`];
graphs default to `i64`. Unweighted algorithms ignore the weight, unweighted construction
assigns `1`.

The maximum value of a weight type doubles as *infinity*, i.e. the distance of a node that has
not (yet) been reached. Relaxations therefore never add to an infinite distance and use
checked arithmetic so that large finite sums cannot wrap around into small ones.
*/

use std::fmt::{Debug, Display};

use num::{PrimInt, Signed};

/// Weight of a single edge and, by summation, of a path.
pub trait Weight: PrimInt + Signed + Debug + Display + Send + Sync + 'static {
    /// Sentinel for an unknown/unreachable distance
    #[inline]
    fn infinity() -> Self {
        Self::max_value()
    }

    /// Returns *true* if `self` is the [`Weight::infinity`] sentinel
    #[inline]
    fn is_infinite(&self) -> bool {
        *self == Self::infinity()
    }

    /// Weight assigned to edges given without an explicit weight
    #[inline]
    fn unit() -> Self {
        Self::one()
    }

    /// Returns *true* if `self < 0`
    #[inline]
    fn is_negative_weight(&self) -> bool {
        *self < Self::zero()
    }

    /// Adds `rhs` to a (possibly infinite) distance.
    ///
    /// Returns `None` if `self` is infinite or the sum does not fit into the type, i.e. whenever
    /// the sum must not be used to relax a distance.
    #[inline]
    fn extend(&self, rhs: Self) -> Option<Self> {
        if self.is_infinite() {
            return None;
        }

        self.checked_add(&rhs).filter(|sum| !sum.is_infinite())
    }
}

impl<W> Weight for W where W: PrimInt + Signed + Debug + Display + Send + Sync + 'static {}

/// Converts a distance vector using the [`Weight::infinity`] sentinel into optional values.
pub fn finite_distances<W: Weight>(distances: &[W]) -> Vec<Option<W>> {
    distances
        .iter()
        .map(|d| (!d.is_infinite()).then_some(*d))
        .collect()
}
