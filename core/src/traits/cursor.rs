//! Cursor contracts.
//!
//! A cursor is a stateful traversal: `has_next` reports whether another
//! element can be produced, `next`/`next_value` produce it, and `remove`
//! deletes the element produced last from the underlying container.

use crate::error::Result;
use crate::traits::Primitive;
use crate::value::Value;

/// Type-erased cursor producing boxed [`Value`]s.
///
/// Cursors are `Send` so that pipelines built on top of them can be bridged
/// into rayon.
pub trait Cursor: Send {
    fn has_next(&mut self) -> Result<bool>;

    /// Produce the next element boxed.
    fn next_value(&mut self) -> Result<Value>;

    /// Remove the element produced last.
    fn remove(&mut self) -> Result<()>;

    /// Feed every remaining element to `action`.
    fn for_each_remaining_value(&mut self, action: &mut dyn FnMut(Value)) -> Result<()> {
        while self.has_next()? {
            action(self.next_value()?);
        }
        Ok(())
    }
}

/// Cursor over raw primitive elements.
///
/// Implementors also provide the boxed [`Cursor`] surface; `next_value` is
/// normally just `self.next().map(Primitive::boxed)`.
pub trait PrimitiveCursor: Cursor {
    type Elem: Primitive;

    /// Produce the next element without boxing.
    fn next(&mut self) -> Result<Self::Elem>;

    /// Feed every remaining element to `action` without boxing.
    fn for_each_remaining(&mut self, action: &mut dyn FnMut(Self::Elem)) -> Result<()> {
        while self.has_next()? {
            action(self.next()?);
        }
        Ok(())
    }
}

macro_rules! forward_cursor {
    ($($ty:ty),*) => {$(
        impl<C: Cursor + ?Sized> Cursor for $ty {
            fn has_next(&mut self) -> Result<bool> {
                (**self).has_next()
            }

            fn next_value(&mut self) -> Result<Value> {
                (**self).next_value()
            }

            fn remove(&mut self) -> Result<()> {
                (**self).remove()
            }

            fn for_each_remaining_value(&mut self, action: &mut dyn FnMut(Value)) -> Result<()> {
                (**self).for_each_remaining_value(action)
            }
        }

        impl<C: PrimitiveCursor + ?Sized> PrimitiveCursor for $ty {
            type Elem = C::Elem;

            fn next(&mut self) -> Result<Self::Elem> {
                (**self).next()
            }

            fn for_each_remaining(&mut self, action: &mut dyn FnMut(Self::Elem)) -> Result<()> {
                (**self).for_each_remaining(action)
            }
        }
    )*};
}

forward_cursor!(Box<C>, &mut C);
