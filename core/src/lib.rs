//! Forwarding views over primitive-valued containers.
//!
//! A backing container only has to provide the minimal primitive surface of
//! [`PrimitiveCollection`]: `size`, `add`, `remove`, `contains` and a cursor
//! factory. Wrapping it in a view yields the full contract (bulk set
//! operations, filtering, array extraction, pipelines, boxed access) with a
//! [`ForwardingPolicy`] deciding, per operation, whether to call straight
//! through to the backing container, reconstruct the operation from the
//! primitive surface, or refuse it.
//!
//! # Example
//!
//! ```ignore
//! use primview_core::{ContainerView, ForwardingPolicy, PrimitiveCollection};
//!
//! let mut view = ContainerView::new(&mut backing, ForwardingPolicy::Shallow);
//! view.add(7)?;
//! let all = view.to_vec()?;
//! ```

#![deny(unsafe_code)]

pub mod derived;
pub mod error;
pub mod policy;
pub mod stream;
pub mod traits;
pub mod value;
pub mod views;

pub use error::{Error, Result};
pub use policy::{ForwardingPolicy, ParsePolicyError, Route, Routes};
pub use stream::{CursorIter, ParStream, Stream};
pub use traits::{
    Collection, Cursor, Primitive, PrimitiveCollection, PrimitiveCursor, PrimitiveSet,
    TypedCollection,
};
pub use value::Value;
pub use views::{
    ContainerView, CursorView, ImmutableSetView, PrimitiveCursorView, ReadOnlyCursor, SetView,
};
