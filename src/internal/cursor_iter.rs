use core::{iter::FusedIterator, mem};

use super::Cursor;

#[derive(Debug, Clone)]
enum Lookahead<T> {
    NotPulled,
    /// Element that was exposed as the second item of the last cursor
    Pending(T),
    Done,
}

/// Turns an iterator over `[a, b, c]` into an iterator over cursors
/// `[Two(a, b), Two(b, c), One(c)]`.
///
/// Every element of the wrapped iterator is pulled exactly once, only one element ahead of what
/// the caller has already seen. The adaptor yields as many cursors as the wrapped iterator
/// yields elements, and the last cursor is always [`Cursor::One`].
#[derive(Debug, Clone)]
pub struct CursorIter<IT: Iterator> {
    iter: IT,
    state: Lookahead<IT::Item>,
}

impl<IT: Iterator> CursorIter<IT> {
    /// Wraps the iterator, nothing is pulled until the first call to `next`
    #[inline]
    pub fn new<I>(iter: I) -> Self
    where
        I: IntoIterator<IntoIter = IT>,
    {
        Self {
            iter: iter.into_iter(),
            state: Lookahead::NotPulled,
        }
    }

    /// Builds the cursor starting at `current`, pulling one more element to bound it
    #[inline]
    fn window(&mut self, current: IT::Item) -> Cursor<IT::Item>
    where
        IT::Item: Clone,
    {
        match self.iter.next() {
            Some(next) => {
                self.state = Lookahead::Pending(next.clone());
                Cursor::Two(current, next)
            }
            None => Cursor::One(current),
        }
    }
}

impl<IT> Iterator for CursorIter<IT>
where
    IT: Iterator,
    IT::Item: Clone,
{
    type Item = Cursor<IT::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        // Done unless `window` finds another element
        match mem::replace(&mut self.state, Lookahead::Done) {
            Lookahead::Done => None,
            Lookahead::NotPulled => {
                let current = self.iter.next()?;
                Some(self.window(current))
            }
            Lookahead::Pending(current) => Some(self.window(current)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            Lookahead::NotPulled => self.iter.size_hint(),
            Lookahead::Pending(_) => {
                let (min, max) = self.iter.size_hint();
                (
                    min.saturating_add(1),
                    max.and_then(|max| max.checked_add(1)),
                )
            }
            Lookahead::Done => (0, Some(0)),
        }
    }
}

// Once `Done` is reached the wrapped iterator is never polled again
impl<IT> FusedIterator for CursorIter<IT>
where
    IT: Iterator,
    IT::Item: Clone,
{
}
