//! Internal building blocks of the [`Union`](crate::Union) engine.
//!
//! Typically you shouldn't need to touch these types, they are public so that the engine's
//! invariants can be tested and fuzzed in isolation.
//!
//! Every series is read through a [`CursorIter`], which exposes each sample together with the
//! sample following it as a [`Cursor`]. The second element bounds the validity of the first one,
//! so a cursor represents the half-open interval `[first, second)`, or `[first, +∞)` for the last
//! sample of a series. Interval ends are compared as [`OrderedEnd`]s, and two cursors are
//! considered simultaneously active when [`can_overlap`] returns true.
mod cursor;
mod cursor_iter;
mod end;

pub use cursor::{Cursor, can_overlap};
pub use cursor_iter::CursorIter;
pub use end::OrderedEnd;
