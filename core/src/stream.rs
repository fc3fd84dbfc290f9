//! Lazy pipelines over cursors.
//!
//! A [`Stream`] is a boxed iterator of `Result<X>`: cursor failures surface
//! as an `Err` item and end the stream. A [`ParStream`] bridges a stream into
//! rayon with [`ParallelBridge`], which pulls from the sequential source on
//! demand. No splitting is invented where the source has none.

use rayon::iter::{IterBridge, ParallelBridge};

use crate::error::Result;
use crate::traits::PrimitiveCursor;

pub type Stream<'a, X> = Box<dyn Iterator<Item = Result<X>> + Send + 'a>;

pub type ParStream<'a, X> = IterBridge<Stream<'a, X>>;

/// Iterator adapter over a [`PrimitiveCursor`].
#[derive(Debug)]
pub struct CursorIter<C> {
    cursor: C,
    done: bool,
}

impl<C: PrimitiveCursor> CursorIter<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            cursor,
            done: false,
        }
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: PrimitiveCursor> Iterator for CursorIter<C> {
    type Item = Result<C::Elem>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = match self.cursor.has_next() {
            Ok(true) => self.cursor.next(),
            Ok(false) => {
                self.done = true;
                return None;
            }
            Err(err) => Err(err),
        };
        if item.is_err() {
            self.done = true;
        }
        Some(item)
    }
}

/// Box a cursor into a [`Stream`].
pub fn from_cursor<'a, C>(cursor: C) -> Stream<'a, C::Elem>
where
    C: PrimitiveCursor + 'a,
{
    Box::new(CursorIter::new(cursor))
}

/// Bridge a sequential stream into rayon.
pub fn parallel<X: Send>(stream: Stream<'_, X>) -> ParStream<'_, X> {
    stream.par_bridge()
}
