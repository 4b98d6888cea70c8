//! Lazy, single-pass combination of step-function data series.
//!
//! A series is an iterator over [`DataPoint`]s sorted by point. Each data point is read as a step
//! function: its value becomes active at its point and stays active until the next data point of
//! the same series, or forever if it is the last one.
//!
//! This crate provides two adaptors over such series:
//! * [`Union`] combines two series into the series of breakpoints where the combined active state
//!   changes, reporting at each breakpoint which side(s) hold a value ([`UnionResult`]);
//! * [`Merge`] compacts a series by dropping data points repeating the value before them.
//!
//! Both are lazy, pull at most one element ahead from each input and never buffer whole
//! series. The crate is `no_std` and doesn't allocate.
//!
//! # Quick start
//!
//! ```
//! use dataseries::{Series, UnionResult, datapoint};
//!
//! let s1 = [datapoint(3, 50)];
//! let s2 = [datapoint(4, 100), datapoint(7, 110)];
//!
//! let union = s1.into_iter().union(s2.into_iter(), UnionResult::into_options);
//! assert!(union.eq([
//!     datapoint(3, (Some(50), None)),
//!     datapoint(4, (Some(50), Some(100))),
//!     datapoint(7, (Some(50), Some(110))),
//! ]));
//! ```
//!
//! Note that only the points of the inputs are compared. If the inputs aren't sorted by point,
//! or contain duplicate points, the result is unspecified.
//!
//! # Intersection
//!
//! Keep only the breakpoints where both series are active:
//!
//! ```
//! use dataseries::{UnionResult, datapoint, union};
//!
//! let s1 = [datapoint(3, 50)];
//! let s2 = [datapoint(4, 100), datapoint(7, 110)];
//!
//! let intersection = union(s1, s2, |x| match x {
//!     UnionResult::Both(left, right) => Some((left, right)),
//!     UnionResult::LeftOnly(_) | UnionResult::RightOnly(_) => None,
//! })
//! .filter_map(|x| {
//!     let (point, data) = x.into_parts();
//!     data.map(|data| datapoint(point, data))
//! });
//! assert!(intersection.eq([datapoint(4, (50, 100)), datapoint(7, (50, 110))]));
//! ```
//!
//! # Compaction
//!
//! A union often produces consecutive breakpoints with the same combined value, [`Merge`]
//! removes them without changing the step function:
//!
//! ```
//! use dataseries::{Series, UnionResult, datapoint};
//!
//! let on_call = [datapoint(0, true), datapoint(8, false), datapoint(18, true)];
//! let at_desk = [datapoint(8, true), datapoint(18, false)];
//!
//! let available = on_call
//!     .into_iter()
//!     .union(at_desk.into_iter(), |x: UnionResult<bool, bool>| {
//!         let (on_call, at_desk) = x.into_options();
//!         on_call.unwrap_or(false) || at_desk.unwrap_or(false)
//!     })
//!     .merge();
//! assert!(available.eq([datapoint(0, true)]));
//! ```
//!
//! # Crate Features
//! - `log` (default): traces state transitions of the adaptors with the [`log`] facade
//!
//! [`log`]: https://docs.rs/log
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(any(fuzzing, test))]
extern crate alloc;

/// Logs at trace level when the `log` feature is enabled, compiles to nothing otherwise
macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        log::trace!($($arg)+);
        #[cfg(not(feature = "log"))]
        let _ = format_args!($($arg)+);
    }};
}

mod convenience;
mod datapoint;
mod error;
pub mod internal;
pub mod merge;
mod series;
pub mod union;
mod versioned;

pub use convenience::*;
pub use datapoint::{DataPoint, datapoint};
pub use error::Exhausted;
pub use merge::Merge;
pub use series::Series;
pub use union::{Union, UnionResult};
pub use versioned::VersionedValue;


#[doc(hidden)]
#[doc = include_str!("../README.md")]
struct _ReadmeTest;
