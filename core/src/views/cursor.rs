//! Cursor views.
//!
//! `has_next` and `remove` always reach the backing cursor. Production and
//! bulk remaining-traversal follow the policy's `next`/`next_value` routes.

use crate::error::{Error, Result};
use crate::policy::{ForwardingPolicy, Route, Routes, route};
use crate::traits::{Cursor, Primitive, PrimitiveCursor};
use crate::value::Value;

/// A view over a type-erased cursor.
///
/// Only bulk remaining-traversal depends on the policy: it is forwarded under
/// `Pure` and rebuilt from `has_next`/`next_value` otherwise.
#[derive(Debug)]
pub struct CursorView<C> {
    cursor: C,
    policy: ForwardingPolicy,
    routes: Routes,
}

impl<C: Cursor> CursorView<C> {
    pub fn new(cursor: C, policy: ForwardingPolicy) -> Self {
        tracing::trace!(%policy, "boxed cursor view created");
        Self {
            cursor,
            policy,
            routes: Routes::from(policy),
        }
    }
}

impl<C> CursorView<C> {
    pub fn policy(&self) -> ForwardingPolicy {
        self.policy
    }

    pub fn routes(&self) -> Routes {
        self.routes
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Cursor for CursorView<C> {
    fn has_next(&mut self) -> Result<bool> {
        self.cursor.has_next()
    }

    fn next_value(&mut self) -> Result<Value> {
        self.cursor.next_value()
    }

    fn remove(&mut self) -> Result<()> {
        self.cursor.remove()
    }

    fn for_each_remaining_value(&mut self, action: &mut dyn FnMut(Value)) -> Result<()> {
        route!(self.routes, next_value, "for_each_remaining_value",
            direct => self.cursor.for_each_remaining_value(action),
            derived => {
                while self.has_next()? {
                    action(self.next_value()?);
                }
                Ok(())
            },
        )
    }
}

/// A view over a primitive cursor.
///
/// Under `Minimal` the backing cursor cannot produce elements: `next` is
/// refused, and since `next_value` and the bulk traversals are rebuilt on top
/// of `next`, they are refused too. `has_next` and `remove` still work.
#[derive(Debug)]
pub struct PrimitiveCursorView<C> {
    cursor: C,
    policy: ForwardingPolicy,
    routes: Routes,
}

impl<C: PrimitiveCursor> PrimitiveCursorView<C> {
    pub fn new(cursor: C, policy: ForwardingPolicy) -> Self {
        tracing::trace!(
            %policy,
            element = <C::Elem as Primitive>::NAME,
            "cursor view created"
        );
        Self {
            cursor,
            policy,
            routes: Routes::from(policy),
        }
    }
}

impl<C> PrimitiveCursorView<C> {
    pub fn policy(&self) -> ForwardingPolicy {
        self.policy
    }

    pub fn routes(&self) -> Routes {
        self.routes
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: PrimitiveCursor> Cursor for PrimitiveCursorView<C> {
    fn has_next(&mut self) -> Result<bool> {
        self.cursor.has_next()
    }

    fn next_value(&mut self) -> Result<Value> {
        route!(self.routes, next_value, "next_value",
            direct => self.cursor.next_value(),
            derived => Ok(self.next()?.boxed()),
        )
    }

    fn remove(&mut self) -> Result<()> {
        self.cursor.remove()
    }

    fn for_each_remaining_value(&mut self, action: &mut dyn FnMut(Value)) -> Result<()> {
        route!(self.routes, next_value, "for_each_remaining_value",
            direct => self.cursor.for_each_remaining_value(action),
            derived => {
                while self.has_next()? {
                    action(self.next_value()?);
                }
                Ok(())
            },
        )
    }
}

impl<C: PrimitiveCursor> PrimitiveCursor for PrimitiveCursorView<C> {
    type Elem = C::Elem;

    fn next(&mut self) -> Result<Self::Elem> {
        match self.routes.next() {
            Route::Absent => Err(Error::absent("next")),
            Route::Direct | Route::Derived => self.cursor.next(),
        }
    }

    fn for_each_remaining(&mut self, action: &mut dyn FnMut(Self::Elem)) -> Result<()> {
        route!(self.routes, next_value, "for_each_remaining",
            direct => self.cursor.for_each_remaining(action),
            derived => {
                while self.has_next()? {
                    action(self.next()?);
                }
                Ok(())
            },
        )
    }
}

/// Wraps any cursor so that `remove` is refused with
/// [`Error::Unsupported`]. Everything else is forwarded.
#[derive(Debug)]
pub struct ReadOnlyCursor<C> {
    cursor: C,
}

impl<C> ReadOnlyCursor<C> {
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Cursor for ReadOnlyCursor<C> {
    fn has_next(&mut self) -> Result<bool> {
        self.cursor.has_next()
    }

    fn next_value(&mut self) -> Result<Value> {
        self.cursor.next_value()
    }

    fn remove(&mut self) -> Result<()> {
        Err(Error::unsupported("remove"))
    }

    fn for_each_remaining_value(&mut self, action: &mut dyn FnMut(Value)) -> Result<()> {
        self.cursor.for_each_remaining_value(action)
    }
}

impl<C: PrimitiveCursor> PrimitiveCursor for ReadOnlyCursor<C> {
    type Elem = C::Elem;

    fn next(&mut self) -> Result<Self::Elem> {
        self.cursor.next()
    }

    fn for_each_remaining(&mut self, action: &mut dyn FnMut(Self::Elem)) -> Result<()> {
        self.cursor.for_each_remaining(action)
    }
}
