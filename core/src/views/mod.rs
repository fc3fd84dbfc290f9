//! The view family.
//!
//! - [`ContainerView`] adapts any [`PrimitiveCollection`](crate::PrimitiveCollection)
//!   and, when the backing container is a [`PrimitiveSet`](crate::PrimitiveSet),
//!   is also a set view ([`SetView`]).
//! - [`ImmutableSetView`] wraps a set view and refuses every mutation.
//! - [`CursorView`] and [`PrimitiveCursorView`] adapt cursors;
//!   [`ReadOnlyCursor`] refuses removal on any cursor.

mod container;
mod cursor;
mod immutable;

pub use container::{ContainerView, SetView};
pub use cursor::{CursorView, PrimitiveCursorView, ReadOnlyCursor};
pub use immutable::ImmutableSetView;
