/// Which side(s) of a [`Union`](crate::Union) are active at a point, and their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnionResult<L, R> {
    /// Only the left series holds a value
    LeftOnly(L),
    /// Only the right series holds a value
    RightOnly(R),
    /// Both series hold a value
    Both(L, R),
}

impl<L, R> UnionResult<L, R> {
    /// Result where only the left series is active
    #[inline]
    pub const fn left_only(left: L) -> Self {
        Self::LeftOnly(left)
    }

    /// Result where only the right series is active
    #[inline]
    pub const fn right_only(right: R) -> Self {
        Self::RightOnly(right)
    }

    /// Result where both series are active
    #[inline]
    pub const fn both(left: L, right: R) -> Self {
        Self::Both(left, right)
    }

    /// Left value, if the left series is active
    #[inline]
    pub const fn left(&self) -> Option<&L> {
        match self {
            Self::LeftOnly(left) | Self::Both(left, _) => Some(left),
            Self::RightOnly(_) => None,
        }
    }

    /// Right value, if the right series is active
    #[inline]
    pub const fn right(&self) -> Option<&R> {
        match self {
            Self::RightOnly(right) | Self::Both(_, right) => Some(right),
            Self::LeftOnly(_) => None,
        }
    }

    /// Converts into a pair of options, at least one of which is `Some`
    ///
    /// ```
    /// use dataseries::UnionResult;
    ///
    /// assert_eq!(UnionResult::<_, u8>::left_only(1).into_options(), (Some(1), None));
    /// assert_eq!(UnionResult::both(1, 2).into_options(), (Some(1), Some(2)));
    /// ```
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::LeftOnly(left) => (Some(left), None),
            Self::RightOnly(right) => (None, Some(right)),
            Self::Both(left, right) => (Some(left), Some(right)),
        }
    }

    /// Exchanges the sides, as if the union was computed with swapped arguments
    #[inline]
    pub fn swap(self) -> UnionResult<R, L> {
        match self {
            Self::LeftOnly(left) => UnionResult::RightOnly(left),
            Self::RightOnly(right) => UnionResult::LeftOnly(right),
            Self::Both(left, right) => UnionResult::Both(right, left),
        }
    }

    /// Maps the left value, leaving the right one untouched
    #[inline]
    pub fn map_left<U, F>(self, func: F) -> UnionResult<U, R>
    where
        F: FnOnce(L) -> U,
    {
        match self {
            Self::LeftOnly(left) => UnionResult::LeftOnly(func(left)),
            Self::RightOnly(right) => UnionResult::RightOnly(right),
            Self::Both(left, right) => UnionResult::Both(func(left), right),
        }
    }

    /// Maps the right value, leaving the left one untouched
    #[inline]
    pub fn map_right<U, F>(self, func: F) -> UnionResult<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::LeftOnly(left) => UnionResult::LeftOnly(left),
            Self::RightOnly(right) => UnionResult::RightOnly(func(right)),
            Self::Both(left, right) => UnionResult::Both(left, func(right)),
        }
    }
}

impl<T> UnionResult<T, T> {
    /// Returns the single active value, or folds both values with `func`.
    ///
    /// Picking the greatest value on conflicts:
    /// ```
    /// use dataseries::UnionResult;
    ///
    /// assert_eq!(UnionResult::both(3, 7).reduce(core::cmp::max), 7);
    /// assert_eq!(UnionResult::right_only(3).reduce(core::cmp::max), 3);
    /// ```
    #[inline]
    pub fn reduce<F>(self, func: F) -> T
    where
        F: FnOnce(T, T) -> T,
    {
        match self {
            Self::LeftOnly(value) | Self::RightOnly(value) => value,
            Self::Both(left, right) => func(left, right),
        }
    }
}
