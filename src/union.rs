//! Implementation of [`Union`]

use core::{fmt, iter::FusedIterator};

use crate::{DataPoint, Series, internal::CursorIter};

pub mod result;
mod state;

pub use result::UnionResult;
use state::UnionState;

/// Lazy union of two step-function series.
///
/// Yields a data point at every point where the combined active state of both series changes,
/// passing the values active there to the combining function as a [`UnionResult`].
///
/// Created by [`Series::union`] or [`union`](crate::union()). Both series must be sorted by
/// point in ascending order, with no duplicate points within one series.
///
/// # Examples
///
/// ```
/// use dataseries::{Series, UnionResult, datapoint};
///
/// let prices = [datapoint(1, 130), datapoint(3, 120), datapoint(10, 95)];
/// let offers = [datapoint(2, 120), datapoint(10, 95)];
///
/// let mut union = prices.into_iter().union(offers.into_iter(), |x| x);
///
/// assert_eq!(union.next(), Some(datapoint(1, UnionResult::LeftOnly(130))));
/// assert_eq!(union.next(), Some(datapoint(2, UnionResult::Both(130, 120))));
/// assert_eq!(union.next(), Some(datapoint(3, UnionResult::Both(120, 120))));
/// assert_eq!(union.next(), Some(datapoint(10, UnionResult::Both(95, 95))));
/// assert_eq!(union.next(), None);
/// ```
pub struct Union<L, R, F>
where
    L: Series,
    R: Series<Point = L::Point>,
{
    left: CursorIter<L>,
    right: CursorIter<R>,
    func: F,
    state: UnionState<L::Point, L::Value, R::Value>,
    /// The transition for the current position was already computed
    pulled: bool,
}

impl<L, R, F> Union<L, R, F>
where
    L: Series,
    R: Series<Point = L::Point>,
{
    /// Creates a union of `left` and `right` combined with `func`.
    ///
    /// Nothing is pulled from either series until the union itself is polled.
    #[inline]
    pub fn new(left: L, right: R, func: F) -> Self {
        Self {
            left: CursorIter::new(left),
            right: CursorIter::new(right),
            func,
            state: UnionState::None,
            pulled: false,
        }
    }
}

impl<L, R, F> Union<L, R, F>
where
    L: Series,
    R: Series<Point = L::Point>,
    L::Point: Ord + Clone,
    L::Value: Clone,
    R::Value: Clone,
{
    /// Advances to the next state, unless it was already computed for the current position
    fn pull(&mut self) {
        if self.pulled {
            return;
        }
        self.pulled = true;
        let prev = core::mem::take(&mut self.state);
        let prev_kind = prev.kind();
        self.state = prev.advance(&mut self.left, &mut self.right);
        trace!("union: {} -> {}", prev_kind, self.state.kind());
    }

    /// Returns true if [`next`](Iterator::next) would yield a data point.
    ///
    /// Repeated calls do not advance the union.
    #[inline]
    pub fn has_next(&mut self) -> bool {
        self.peek_point().is_some()
    }

    /// Returns the point of the next data point without calling the combining function.
    ///
    /// ```
    /// use dataseries::{Series, datapoint};
    ///
    /// let mut union = [datapoint(2, 'a')]
    ///     .into_iter()
    ///     .union([datapoint(1, 'b')].into_iter(), |x| x);
    /// assert_eq!(union.peek_point(), Some(&1));
    /// assert_eq!(union.peek_point(), Some(&1));
    /// assert_eq!(union.next().map(|x| *x.point()), Some(1));
    /// assert_eq!(union.peek_point(), Some(&2));
    /// ```
    #[inline]
    pub fn peek_point(&mut self) -> Option<&L::Point> {
        self.pull();
        self.state.point()
    }
}

impl<L, R, F, T> Iterator for Union<L, R, F>
where
    L: Series,
    R: Series<Point = L::Point>,
    L::Point: Ord + Clone,
    L::Value: Clone,
    R::Value: Clone,
    F: FnMut(UnionResult<L::Value, R::Value>) -> T,
{
    type Item = DataPoint<L::Point, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pull();
        self.pulled = false;
        self.state.emit(&mut self.func)
    }
}

// Exhausted cursor iterators are fused, so `None` state is never left again
impl<L, R, F, T> FusedIterator for Union<L, R, F>
where
    L: Series,
    R: Series<Point = L::Point>,
    L::Point: Ord + Clone,
    L::Value: Clone,
    R::Value: Clone,
    F: FnMut(UnionResult<L::Value, R::Value>) -> T,
{
}

impl<L, R, F> Clone for Union<L, R, F>
where
    L: Series + Clone,
    R: Series<Point = L::Point> + Clone,
    L::Point: Clone,
    L::Value: Clone,
    R::Value: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            left: self.left.clone(),
            right: self.right.clone(),
            func: self.func.clone(),
            state: self.state.clone(),
            pulled: self.pulled,
        }
    }
}

impl<L, R, F> fmt::Debug for Union<L, R, F>
where
    L: Series,
    R: Series<Point = L::Point>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Union")
            .field("state", &self.state.kind())
            .field("pulled", &self.pulled)
            .finish_non_exhaustive()
    }
}
