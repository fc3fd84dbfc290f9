//! Per-value-type capability abstraction.
//!
//! [`Primitive`] is implemented for `i32`, `i64` and `f64`. It ties each raw
//! type to its [`Value`] variant and to the diversion hook used by bulk
//! operations to detect arguments that are primitive containers of the same
//! type.

use core::fmt::Debug;

use crate::traits::{Collection, PrimitiveCollection};
use crate::value::Value;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// A collection seen through its primitive element type.
///
/// Returned by [`Collection::typed`] so a caller can recover the primitive
/// surface of a type-erased argument without boxing its elements.
pub enum TypedCollection<'a> {
    Int(&'a mut dyn PrimitiveCollection<Elem = i32>),
    Long(&'a mut dyn PrimitiveCollection<Elem = i64>),
    Double(&'a mut dyn PrimitiveCollection<Elem = f64>),
}

impl TypedCollection<'_> {
    pub fn type_name(&self) -> &'static str {
        match self {
            TypedCollection::Int(_) => i32::NAME,
            TypedCollection::Long(_) => i64::NAME,
            TypedCollection::Double(_) => f64::NAME,
        }
    }
}

/// A raw element type a primitive container can hold.
pub trait Primitive: sealed::Sealed + Copy + PartialEq + Debug + Send + Sync + 'static {
    const NAME: &'static str;

    /// Box into the matching [`Value`] variant.
    fn boxed(self) -> Value;

    /// Unbox if `value` is this type's own variant.
    fn unboxed(value: &Value) -> Option<Self>;

    /// Order-independent hash contribution used by set hashing.
    ///
    /// Values that compare equal with `==` hash identically.
    fn element_hash(self) -> u64;

    fn widen<'a>(collection: &'a mut dyn PrimitiveCollection<Elem = Self>) -> TypedCollection<'a>;

    fn narrow<'a>(typed: TypedCollection<'a>) -> Option<&'a mut dyn PrimitiveCollection<Elem = Self>>;

    /// Recover the primitive surface of `argument` if it holds this type.
    ///
    /// Always asks the argument, even when it is empty.
    fn divert<'a>(
        argument: &'a mut dyn Collection,
    ) -> Option<&'a mut dyn PrimitiveCollection<Elem = Self>> {
        let typed = Self::narrow(argument.typed()?)?;
        tracing::trace!(element = Self::NAME, "diverting bulk argument to primitive overload");
        Some(typed)
    }
}

// Murmur3 64-bit finalizer.
fn mix(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    h
}

impl Primitive for i32 {
    const NAME: &'static str = "i32";

    fn boxed(self) -> Value {
        Value::Int(self)
    }

    fn unboxed(value: &Value) -> Option<Self> {
        value.as_int()
    }

    fn element_hash(self) -> u64 {
        mix(self as i64 as u64)
    }

    fn widen<'a>(collection: &'a mut dyn PrimitiveCollection<Elem = Self>) -> TypedCollection<'a> {
        TypedCollection::Int(collection)
    }

    fn narrow<'a>(typed: TypedCollection<'a>) -> Option<&'a mut dyn PrimitiveCollection<Elem = Self>> {
        match typed {
            TypedCollection::Int(c) => Some(c),
            _ => None,
        }
    }
}

impl Primitive for i64 {
    const NAME: &'static str = "i64";

    fn boxed(self) -> Value {
        Value::Long(self)
    }

    fn unboxed(value: &Value) -> Option<Self> {
        value.as_long()
    }

    fn element_hash(self) -> u64 {
        mix(self as u64)
    }

    fn widen<'a>(collection: &'a mut dyn PrimitiveCollection<Elem = Self>) -> TypedCollection<'a> {
        TypedCollection::Long(collection)
    }

    fn narrow<'a>(typed: TypedCollection<'a>) -> Option<&'a mut dyn PrimitiveCollection<Elem = Self>> {
        match typed {
            TypedCollection::Long(c) => Some(c),
            _ => None,
        }
    }
}

impl Primitive for f64 {
    const NAME: &'static str = "f64";

    fn boxed(self) -> Value {
        Value::Double(self)
    }

    fn unboxed(value: &Value) -> Option<Self> {
        value.as_double()
    }

    fn element_hash(self) -> u64 {
        // -0.0 == 0.0, so both must land on the same bits.
        let bits = if self == 0.0 {
            0
        } else if self.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.to_bits()
        };
        mix(bits)
    }

    fn widen<'a>(collection: &'a mut dyn PrimitiveCollection<Elem = Self>) -> TypedCollection<'a> {
        TypedCollection::Double(collection)
    }

    fn narrow<'a>(typed: TypedCollection<'a>) -> Option<&'a mut dyn PrimitiveCollection<Elem = Self>> {
        match typed {
            TypedCollection::Double(c) => Some(c),
            _ => None,
        }
    }
}
