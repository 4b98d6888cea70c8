//! Implementation of [`Merge`]

use core::iter::{Fuse, FusedIterator};

use crate::{DataPoint, Series};

/// Compacts a step-function series by dropping samples that repeat the value of the sample
/// retained right before them.
///
/// For every run of consecutive samples with equal values only the first sample is kept, so the
/// step function described by the series doesn't change. Values are compared with
/// [`PartialEq`], points are never compared.
///
/// Created by [`Series::merge`] or [`merge`](crate::merge()).
///
/// # Examples
///
/// ```
/// use dataseries::{Series, datapoint};
///
/// let compact = [datapoint(1, 100), datapoint(3, 100), datapoint(4, 10), datapoint(7, 10)]
///     .into_iter()
///     .merge();
/// assert!(compact.eq([datapoint(1, 100), datapoint(4, 10)]));
/// ```
pub struct Merge<S: Series> {
    iter: Fuse<S>,
    /// First sample of the run currently being compacted
    retained: Option<S::Item>,
    /// Next sample to yield, valid when `pulled` is set
    entry: Option<S::Item>,
    pulled: bool,
}

impl<S: Series> Merge<S> {
    /// Creates a compacting adaptor over `series`
    #[inline]
    pub fn new(series: S) -> Self {
        Self {
            iter: series.fuse(),
            retained: None,
            entry: None,
            pulled: false,
        }
    }
}

impl<S> Merge<S>
where
    S: Series,
    S::Value: PartialEq,
{
    /// Consumes the rest of the current run, returning its first sample
    fn compact(&mut self) -> Option<S::Item> {
        for sample in self.iter.by_ref() {
            match self.retained.take() {
                Some(kept) if kept.data() == sample.data() => {
                    trace!("merge: dropped repeated value");
                    self.retained = Some(kept);
                }
                Some(kept) => {
                    self.retained = Some(sample);
                    return Some(kept);
                }
                None => self.retained = Some(sample),
            }
        }
        self.retained.take()
    }

    #[inline]
    fn pull(&mut self) {
        if !self.pulled {
            self.pulled = true;
            self.entry = self.compact();
        }
    }

    /// Returns true if [`next`](Iterator::next) would yield a data point.
    ///
    /// Repeated calls do not advance the series.
    #[inline]
    pub fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }

    /// Returns a reference to the next retained data point without consuming it
    #[inline]
    pub fn peek(&mut self) -> Option<&DataPoint<S::Point, S::Value>> {
        self.pull();
        self.entry.as_ref()
    }
}

impl<S> Iterator for Merge<S>
where
    S: Series,
    S::Value: PartialEq,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.pull();
        self.pulled = false;
        self.entry.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.retained.is_some())
            + usize::from(self.pulled && self.entry.is_some());
        let (min, max) = self.iter.size_hint();
        // a whole run may collapse into one sample
        let min = if buffered > 0 || min > 0 { 1 } else { 0 };
        (min, max.and_then(|max| max.checked_add(buffered)))
    }
}

impl<S> FusedIterator for Merge<S>
where
    S: Series,
    S::Value: PartialEq,
{
}

impl<S> Clone for Merge<S>
where
    S: Series + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            retained: self.retained.clone(),
            entry: self.entry.clone(),
            pulled: self.pulled,
        }
    }
}

impl<S> core::fmt::Debug for Merge<S>
where
    S: Series + core::fmt::Debug,
    S::Item: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Merge")
            .field("iter", &self.iter)
            .field("retained", &self.retained)
            .field("entry", &self.entry)
            .field("pulled", &self.pulled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::{vec, vec::Vec};

    use crate::{Series, VersionedValue, datapoint};

    #[test]
    fn same_version_and_value() {
        let series = vec![
            datapoint(1, VersionedValue::new(1, Some(10))),
            datapoint(5, VersionedValue::new(1, Some(10))),
            datapoint(10, VersionedValue::new(1, None)),
        ];
        let expected = vec![
            datapoint(1, VersionedValue::new(1, Some(10))),
            datapoint(10, VersionedValue::new(1, None)),
        ];
        assert_eq!(series.into_iter().merge().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn different_version_same_value() {
        let series = vec![
            datapoint(1, VersionedValue::new(1, Some(10))),
            datapoint(5, VersionedValue::new(2, Some(10))),
            datapoint(10, VersionedValue::new(1, None)),
        ];
        assert_eq!(series.clone().into_iter().merge().collect::<Vec<_>>(), series);
    }

    #[test]
    fn same_version_different_value() {
        let series = vec![
            datapoint(1, VersionedValue::new(1, Some(10))),
            datapoint(5, VersionedValue::new(1, Some(100))),
            datapoint(10, VersionedValue::new(1, None)),
        ];
        assert_eq!(series.clone().into_iter().merge().collect::<Vec<_>>(), series);
    }

    #[test]
    fn peek_and_has_next() {
        let mut merge = [datapoint(1, 'a'), datapoint(2, 'a'), datapoint(3, 'b')]
            .into_iter()
            .merge();
        assert!(merge.has_next());
        assert_eq!(merge.peek(), Some(&datapoint(1, 'a')));
        assert_eq!(merge.peek(), Some(&datapoint(1, 'a')));
        assert_eq!(merge.next(), Some(datapoint(1, 'a')));
        assert_eq!(merge.peek(), Some(&datapoint(3, 'b')));
        assert_eq!(merge.next(), Some(datapoint(3, 'b')));
        assert!(!merge.has_next());
        assert_eq!(merge.next(), None);
        assert_eq!(merge.peek(), None);
    }

    #[test]
    fn size_hint() {
        let mut merge = [datapoint(1, 'a'), datapoint(2, 'a'), datapoint(3, 'b')]
            .into_iter()
            .merge();
        assert_eq!(merge.size_hint(), (1, Some(3)));
        merge.next();
        // retained 'b', nothing left upstream
        assert_eq!(merge.size_hint(), (1, Some(1)));
        merge.next();
        assert_eq!(merge.size_hint(), (0, Some(0)));
        let mut empty = core::iter::empty::<crate::DataPoint<u8, u8>>().merge();
        assert_eq!(empty.size_hint(), (0, Some(0)));
        assert!(!empty.has_next());
        assert_eq!(empty.size_hint(), (0, Some(0)));
    }
}
