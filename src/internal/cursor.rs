use core::cmp;

use super::OrderedEnd;

/// Currently visible window of a series.
///
/// * [`One`](Cursor::One) - the series yielded its last element, so the element stays valid
///   forever: `[x, +∞)`
/// * [`Two`](Cursor::Two) - the next element is known and bounds the validity of the first
///   one: `[first, second)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor<X> {
    /// Last element of the series
    One(X),
    /// Current element and the one following it
    Two(X, X),
}

impl<X> Cursor<X> {
    /// Current element
    #[inline]
    pub const fn first(&self) -> &X {
        match self {
            Self::One(x) | Self::Two(x, _) => x,
        }
    }

    /// Consumes the cursor, returning the current element
    #[inline]
    pub fn into_first(self) -> X {
        match self {
            Self::One(x) | Self::Two(x, _) => x,
        }
    }

    /// End of the validity interval of [`first`](Self::first)
    #[inline]
    pub const fn end(&self) -> OrderedEnd<&X> {
        match self {
            Self::One(_) => OrderedEnd::Unbounded,
            Self::Two(_, second) => OrderedEnd::Bounded(second),
        }
    }

    /// Applies `func` to every held element, preserving the shape of the cursor.
    ///
    /// Mostly used to project a cursor over samples to a cursor over their points:
    /// `cursor.map(DataPoint::point)`.
    #[inline]
    pub fn map<'a, U, F>(&'a self, mut func: F) -> Cursor<U>
    where
        F: FnMut(&'a X) -> U,
    {
        match self {
            Self::One(x) => Cursor::One(func(x)),
            Self::Two(first, second) => Cursor::Two(func(first), func(second)),
        }
    }
}

/// Returns true if the half-open intervals `[first, end)` of both cursors intersect.
///
/// Intervals touching at a single point (`[1, 2)` and `[2, 3)`) and empty intervals
/// (`[1, 1)`) never overlap.
pub fn can_overlap<P: Ord>(a: &Cursor<P>, b: &Cursor<P>) -> bool {
    let start = cmp::max(a.first(), b.first());
    let end = cmp::min(a.end(), b.end());
    end.greater_than(&OrderedEnd::Bounded(start))
}
