use crate::{DataPoint, Merge, Series, Union, UnionResult};

/// Constructs a [`Union`] of two collections of data points sorted by point:
/// * every point of both inputs is a breakpoint of the result
/// * at each breakpoint `func` receives the values of both step functions active there
///
/// ```
/// use dataseries::{UnionResult, datapoint, union};
///
/// let left = [datapoint(2, 120)];
/// let right = [datapoint(1, 100)];
/// assert!(union(left, right, |x| x).eq([
///     datapoint(1, UnionResult::RightOnly(100)),
///     datapoint(2, UnionResult::Both(120, 100)),
/// ]));
/// ```
#[inline]
pub fn union<P, L, R, LI, RI, F, T>(
    left: LI, right: RI, func: F,
) -> Union<LI::IntoIter, RI::IntoIter, F>
where
    LI: IntoIterator<Item = DataPoint<P, L>>,
    RI: IntoIterator<Item = DataPoint<P, R>>,
    LI::IntoIter: Series<Point = P, Value = L>,
    RI::IntoIter: Series<Point = P, Value = R>,
    F: FnMut(UnionResult<L, R>) -> T,
{
    Union::new(left.into_iter(), right.into_iter(), func)
}

/// Constructs a [`Merge`] compacting a collection of data points sorted by point
///
/// ```
/// use dataseries::{datapoint, merge};
///
/// assert!(merge([datapoint(1, 100), datapoint(3, 100)]).eq([datapoint(1, 100)]));
/// ```
#[inline]
pub fn merge<P, T, S>(series: S) -> Merge<S::IntoIter>
where
    S: IntoIterator<Item = DataPoint<P, T>>,
    S::IntoIter: Series<Point = P, Value = T>,
    T: PartialEq,
{
    Merge::new(series.into_iter())
}
