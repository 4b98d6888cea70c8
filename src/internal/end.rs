use core::cmp::Ordering;

/// End of a half-open validity interval: either a concrete point or unbounded (+∞).
///
/// [`Unbounded`](OrderedEnd::Unbounded) compares greater than every
/// [`Bounded`](OrderedEnd::Bounded) value, two bounded ends compare by their points and two
/// unbounded ends are equal. The derived ordering relies on the variant declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderedEnd<P> {
    /// Interval ends right before this point
    Bounded(P),
    /// Interval never ends
    Unbounded,
}

impl<P> OrderedEnd<P> {
    /// Converts from `&OrderedEnd<P>` to `OrderedEnd<&P>`
    #[inline]
    pub const fn as_ref(&self) -> OrderedEnd<&P> {
        match self {
            Self::Bounded(p) => OrderedEnd::Bounded(p),
            Self::Unbounded => OrderedEnd::Unbounded,
        }
    }

    /// Maps the bounded point with `func`
    #[inline]
    pub fn map<U, F>(self, func: F) -> OrderedEnd<U>
    where
        F: FnOnce(P) -> U,
    {
        match self {
            Self::Bounded(p) => OrderedEnd::Bounded(func(p)),
            Self::Unbounded => OrderedEnd::Unbounded,
        }
    }

    /// Returns the point if the end is bounded
    #[inline]
    pub fn bounded(self) -> Option<P> {
        match self {
            Self::Bounded(p) => Some(p),
            Self::Unbounded => None,
        }
    }
}

impl<P: Ord> OrderedEnd<P> {
    /// `self > other`
    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// `self < other`
    #[inline]
    pub fn less_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }
}

impl<P> From<Option<P>> for OrderedEnd<P> {
    /// `None` is treated as the absence of an upper bound
    #[inline]
    fn from(value: Option<P>) -> Self {
        value.map_or(Self::Unbounded, Self::Bounded)
    }
}
