mod collection;
mod cursor;
mod primitive;

pub use collection::{Collection, PrimitiveCollection, PrimitiveSet};
pub use cursor::{Cursor, PrimitiveCursor};
pub use primitive::{Primitive, TypedCollection};
