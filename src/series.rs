use crate::{DataPoint, Exhausted, Merge, Union, UnionResult};

/// An iterator over the samples of a step function, sorted by point.
///
/// Implemented for every iterator over [`DataPoint`]s. Ordering is a precondition of the
/// adaptors provided here, it isn't checked.
pub trait Series:
    Iterator<Item = DataPoint<<Self as Series>::Point, <Self as Series>::Value>> + Sized
{
    /// Type of the points, must be totally ordered for [`union`](Series::union)
    type Point;
    /// Type of the payloads
    type Value;

    /// Combines two series into a series of the breakpoints of both.
    ///
    /// See [`Union`] for details.
    #[inline]
    fn union<R, F, T>(self, other: R, func: F) -> Union<Self, R, F>
    where
        R: Series<Point = Self::Point>,
        F: FnMut(UnionResult<Self::Value, R::Value>) -> T,
    {
        Union::new(self, other, func)
    }

    /// Drops samples repeating the value of the sample before them.
    ///
    /// See [`Merge`] for details.
    #[inline]
    fn merge(self) -> Merge<Self>
    where
        Self::Value: PartialEq,
    {
        Merge::new(self)
    }

    /// Like [`next`](Iterator::next), but treats the absence of a next data point as an error.
    ///
    /// ```
    /// use dataseries::{Exhausted, Series, datapoint};
    ///
    /// let mut series = [datapoint(1, 'a')].into_iter();
    /// assert_eq!(series.try_next(), Ok(datapoint(1, 'a')));
    /// assert_eq!(series.try_next(), Err(Exhausted));
    /// ```
    #[inline]
    fn try_next(&mut self) -> Result<Self::Item, Exhausted> {
        self.next().ok_or(Exhausted)
    }
}

impl<IT, P, T> Series for IT
where
    IT: Iterator<Item = DataPoint<P, T>>,
{
    type Point = P;
    type Value = T;
}
