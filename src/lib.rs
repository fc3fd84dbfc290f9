//! Primview - forwarding views over primitive-valued containers
//!
//! # Overview
//!
//! Authors of a container of raw `i32`, `i64` or `f64` values implement only
//! a small primitive surface:
//!
//! - `size`
//! - primitive `add`, `remove` and `contains`
//! - a cursor factory
//!
//! Wrapping such a container in a view provides the rest of the collection
//! contract: boxed access, bulk set operations, filtering, array extraction,
//! sequential and parallel pipelines, and set equality and hashing.
//!
//! # Forwarding policies
//!
//! Every view is built with a [`ForwardingPolicy`] that is resolved once into
//! per-operation [`Routes`]:
//!
//! 1. **Pure**: every operation calls the backing container's own version.
//! 2. **Shallow**: only the primitive surface and the cursor are trusted;
//!    everything else is rebuilt on top of them.
//! 3. **Minimal**: the backing container cannot be traversed. Anything that
//!    needs a cursor fails with [`Error::CapabilityAbsent`] before the
//!    backing container is touched.
//!
//! # Quick Start
//!
//! ```ignore
//! use primview::prelude::*;
//!
//! let mut view = SetView::shallow(&mut my_int_set);
//! view.add(3)?;
//! view.retain_all(&mut other_int_set)?;
//! let remaining: Vec<i32> = view.to_vec()?;
//! ```

pub use primview_core::{
    ContainerView, CursorIter, CursorView, Error, ForwardingPolicy, ImmutableSetView,
    ParStream, ParsePolicyError, PrimitiveCursorView, ReadOnlyCursor, Result, Route, Routes,
    SetView, Stream, Value,
};
pub use primview_core::{derived, stream, traits};

/// Traits and views needed to use or implement a primitive container.
pub mod prelude {
    pub use primview_core::{
        Collection, ContainerView, Cursor, Error, ForwardingPolicy, ImmutableSetView, Primitive,
        PrimitiveCollection, PrimitiveCursor, PrimitiveCursorView, PrimitiveSet, Result, SetView,
        Value,
    };
}
