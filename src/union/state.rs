use core::cmp::{self, Ordering};

use super::UnionResult;
use crate::{
    DataPoint,
    internal::{Cursor, CursorIter, OrderedEnd, can_overlap},
};

type Side<P, T> = Cursor<DataPoint<P, T>>;

/// Position of the union engine over both series.
#[derive(Debug, Clone)]
pub(crate) enum UnionState<P, L, R> {
    /// Nothing pulled yet, or both series are exhausted
    None,
    /// Right series is exhausted
    LeftOnly(Side<P, L>),
    /// Left series is exhausted
    RightOnly(Side<P, R>),
    /// Intervals of the current cursors do not intersect
    Disjointed(Side<P, L>, Side<P, R>),
    /// Intervals of the current cursors intersect
    Overlapped(Side<P, L>, Side<P, R>),
}

impl<P, L, R> Default for UnionState<P, L, R> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<P, L, R> UnionState<P, L, R> {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::LeftOnly(_) => "left-only",
            Self::RightOnly(_) => "right-only",
            Self::Disjointed(..) => "disjointed",
            Self::Overlapped(..) => "overlapped",
        }
    }
}

#[inline]
fn points<P, T>(cursor: &Side<P, T>) -> Cursor<&P> {
    cursor.map(DataPoint::point)
}

#[inline]
fn end<P, T>(cursor: &Side<P, T>) -> OrderedEnd<&P> {
    cursor.end().map(DataPoint::point)
}

/// Pulls the next cursor of a series, checking the ordering precondition in debug builds
#[inline]
fn pull<IT, P, T>(side: &mut CursorIter<IT>) -> Option<Side<P, T>>
where
    IT: Iterator<Item = DataPoint<P, T>>,
    P: Ord + Clone,
    T: Clone,
{
    let cursor = side.next()?;
    debug_assert!(
        !matches!(points(&cursor), Cursor::Two(first, second) if first > second),
        "series points must be sorted in ascending order"
    );
    Some(cursor)
}

impl<P, L, R> UnionState<P, L, R>
where
    P: Ord + Clone,
    L: Clone,
    R: Clone,
{
    /// State for a freshly pulled pair of cursors
    #[inline]
    fn classify(left: Side<P, L>, right: Side<P, R>) -> Self {
        if left.first().point() == right.first().point() {
            Self::Overlapped(left, right)
        } else {
            Self::Disjointed(left, right)
        }
    }

    /// Computes the next state, pulling from at most the sides that fell behind
    pub(crate) fn advance<LI, RI>(
        self, left_iter: &mut CursorIter<LI>, right_iter: &mut CursorIter<RI>,
    ) -> Self
    where
        LI: Iterator<Item = DataPoint<P, L>>,
        RI: Iterator<Item = DataPoint<P, R>>,
    {
        let next = match self {
            Self::None => match (pull(left_iter), pull(right_iter)) {
                (Some(left), Some(right)) => Some(Self::classify(left, right)),
                (Some(left), None) => Some(Self::LeftOnly(left)),
                (None, Some(right)) => Some(Self::RightOnly(right)),
                (None, None) => None,
            },
            Self::LeftOnly(_) => pull(left_iter).map(Self::LeftOnly),
            Self::RightOnly(_) => pull(right_iter).map(Self::RightOnly),
            Self::Overlapped(left, right) => {
                let ordering = end(&left).cmp(&end(&right));
                match ordering {
                    Ordering::Less => pull(left_iter).map(|left| Self::Overlapped(left, right)),
                    Ordering::Greater => {
                        pull(right_iter).map(|right| Self::Overlapped(left, right))
                    }
                    Ordering::Equal => match (pull(left_iter), pull(right_iter)) {
                        (Some(left), Some(right)) => Some(Self::Overlapped(left, right)),
                        _ => None,
                    },
                }
            }
            Self::Disjointed(left, right) if can_overlap(&points(&left), &points(&right)) => {
                Some(Self::Overlapped(left, right))
            }
            Self::Disjointed(left, right) => {
                if end(&left) < end(&right) {
                    pull(left_iter).map(|left| Self::classify(left, right))
                } else {
                    pull(right_iter).map(|right| Self::classify(left, right))
                }
            }
        };
        next.unwrap_or_default()
    }

    /// Data point of the current state, `None` once both series are exhausted
    pub(crate) fn emit<F, T>(&self, func: &mut F) -> Option<DataPoint<P, T>>
    where
        F: FnMut(UnionResult<L, R>) -> T,
    {
        let (point, result) = match self {
            Self::None => return None,
            Self::LeftOnly(left) => {
                let left = left.first();
                (left.point(), UnionResult::LeftOnly(left.data().clone()))
            }
            Self::RightOnly(right) => {
                let right = right.first();
                (right.point(), UnionResult::RightOnly(right.data().clone()))
            }
            Self::Disjointed(left, right) => {
                let (left, right) = (left.first(), right.first());
                if left.point() < right.point() {
                    (left.point(), UnionResult::LeftOnly(left.data().clone()))
                } else {
                    (right.point(), UnionResult::RightOnly(right.data().clone()))
                }
            }
            Self::Overlapped(left, right) => {
                let (left, right) = (left.first(), right.first());
                (
                    cmp::max(left.point(), right.point()),
                    UnionResult::Both(left.data().clone(), right.data().clone()),
                )
            }
        };
        Some(DataPoint::new(point.clone(), func(result)))
    }

    /// Point of the current state, without invoking the combining function
    pub(crate) fn point(&self) -> Option<&P> {
        match self {
            Self::None => None,
            Self::LeftOnly(left) => Some(left.first().point()),
            Self::RightOnly(right) => Some(right.first().point()),
            Self::Disjointed(left, right) => {
                Some(cmp::min(left.first().point(), right.first().point()))
            }
            Self::Overlapped(left, right) => {
                Some(cmp::max(left.first().point(), right.first().point()))
            }
        }
    }
}
