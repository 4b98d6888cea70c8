//! The sample type shared by every series in this crate.

/// A single sample of a step function: `data` becomes active at `point` and stays active
/// until the next sample of the same series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataPoint<P, T> {
    point: P,
    data: T,
}

impl<P, T> DataPoint<P, T> {
    /// Creates a new sample
    #[inline]
    pub const fn new(point: P, data: T) -> Self {
        Self { point, data }
    }

    /// Point at which the sample becomes active
    #[inline]
    pub const fn point(&self) -> &P {
        &self.point
    }

    /// Payload of the sample
    #[inline]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Splits the sample into `(point, data)`
    #[inline]
    pub fn into_parts(self) -> (P, T) {
        (self.point, self.data)
    }
}

impl<P, T> From<(P, T)> for DataPoint<P, T> {
    #[inline]
    fn from((point, data): (P, T)) -> Self {
        Self::new(point, data)
    }
}

/// Shorthand for [`DataPoint::new`]
///
/// ```
/// use dataseries::{DataPoint, datapoint};
///
/// assert_eq!(datapoint(3, "on"), DataPoint::new(3, "on"));
/// ```
#[inline]
pub const fn datapoint<P, T>(point: P, data: T) -> DataPoint<P, T> {
    DataPoint::new(point, data)
}
