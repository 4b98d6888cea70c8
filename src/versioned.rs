//! Versioned payloads for conflict-free combination of replicated series.
//!
//! When two replicas of the same series are combined with a [`union`](crate::union()), picking
//! the greatest [`VersionedValue`] on conflicts ([`UnionResult::reduce`] with [`core::cmp::max`])
//! resolves every overlap in favour of the most recent write, independently of the order in
//! which replicas are combined.
//!
//! Intervals are encoded as a pair of data points, the second carrying a `None` payload to mark
//! where the interval ends:
//!
//! ```
//! use dataseries::{UnionResult, VersionedValue, datapoint, union};
//!
//! let replica_a = [
//!     datapoint(3, Some(VersionedValue::new(1, 50))),
//!     datapoint(10, None),
//! ];
//! let replica_b = [
//!     datapoint(4, Some(VersionedValue::new(2, 100))),
//!     datapoint(5, None),
//! ];
//!
//! let resolved = union(replica_a, replica_b, |x: UnionResult<_, _>| x.reduce(core::cmp::max));
//! assert!(resolved.eq([
//!     datapoint(3, Some(VersionedValue::new(1, 50))),
//!     datapoint(4, Some(VersionedValue::new(2, 100))),
//!     datapoint(5, Some(VersionedValue::new(1, 50))),
//!     datapoint(10, None),
//! ]));
//! ```
//!
//! [`UnionResult::reduce`]: crate::UnionResult::reduce

/// A value tagged with the version that produced it.
///
/// Ordered by `version` first and by `value` second, so the greatest of two versioned values is
/// always the one with the most recent version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionedValue<V, T> {
    // declaration order defines the derived ordering
    version: V,
    value: T,
}

impl<V, T> VersionedValue<V, T> {
    /// Tags `value` with `version`
    #[inline]
    pub const fn new(version: V, value: T) -> Self {
        Self { version, value }
    }

    /// Version of the value
    #[inline]
    pub const fn version(&self) -> &V {
        &self.version
    }

    /// The value itself
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Splits into `(version, value)`
    #[inline]
    pub fn into_parts(self) -> (V, T) {
        (self.version, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::VersionedValue;

    #[test]
    fn version_has_priority() {
        assert!(VersionedValue::new(2, 1) > VersionedValue::new(1, 10));
        assert!(VersionedValue::new(2, 2) > VersionedValue::new(2, 1));
        assert_eq!(VersionedValue::new(2, 2), VersionedValue::new(2, 2));
    }

    #[test]
    fn accessors() {
        let v = VersionedValue::new(7_u64, "seven");
        assert_eq!(v.version(), &7);
        assert_eq!(v.value(), &"seven");
        assert_eq!(v.into_parts(), (7, "seven"));
    }
}
