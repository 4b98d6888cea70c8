/// Returned by [`Series::try_next`](crate::Series::try_next) when the series has no next data
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("series exhausted: no next data point")]
pub struct Exhausted;
