//! Container contracts.
//!
//! [`PrimitiveCollection`] is the full primitive contract. Only `size`,
//! `add`, `remove`, `contains` and `cursor` are required; every other
//! operation has a default body in [`derived`](crate::derived) built from
//! those five. Implementors override what they can do better, and views
//! decide per policy whether to trust those overrides.
//!
//! [`Collection`] is the object-safe boxed face every primitive collection
//! gets for free. Bulk operations take their argument as `&mut dyn
//! Collection` so any collection, of any element type, can be passed.

use crate::derived;
use crate::error::Result;
use crate::stream::{ParStream, Stream};
use crate::traits::{Cursor, Primitive, PrimitiveCursor, TypedCollection};
use crate::value::Value;

/// Type-erased collection of boxed values.
pub trait Collection {
    fn len(&self) -> Result<usize>;

    /// Whether an element equal to `value` is present. Values of another
    /// element type are never present.
    fn has_value(&self, value: &Value) -> Result<bool>;

    /// A cursor producing boxed elements.
    fn values(&mut self) -> Result<Box<dyn Cursor + '_>>;

    /// The primitive surface behind this collection, if it has one.
    fn typed(&mut self) -> Option<TypedCollection<'_>> {
        None
    }
}

impl<T: PrimitiveCollection> Collection for T {
    fn len(&self) -> Result<usize> {
        self.size()
    }

    fn has_value(&self, value: &Value) -> Result<bool> {
        PrimitiveCollection::contains_value(self, value)
    }

    fn values(&mut self) -> Result<Box<dyn Cursor + '_>> {
        Ok(Box::new(self.cursor()?))
    }

    fn typed(&mut self) -> Option<TypedCollection<'_>> {
        Some(<T::Elem as Primitive>::widen(self))
    }
}

/// A container of raw primitive elements.
pub trait PrimitiveCollection {
    type Elem: Primitive;

    fn size(&self) -> Result<usize>;

    /// Returns `true` if the container changed.
    fn add(&mut self, element: Self::Elem) -> Result<bool>;

    /// Returns `true` if the container changed.
    fn remove(&mut self, element: Self::Elem) -> Result<bool>;

    fn contains(&self, element: Self::Elem) -> Result<bool>;

    fn cursor(&mut self) -> Result<Box<dyn PrimitiveCursor<Elem = Self::Elem> + '_>>;

    fn is_empty(&self) -> Result<bool> {
        derived::is_empty(self)
    }

    /// Add a boxed element. Fails with
    /// [`Error::IncompatibleElement`](crate::Error::IncompatibleElement) when
    /// `value` is not this container's element type.
    fn add_value(&mut self, value: Value) -> Result<bool> {
        derived::add_value(self, value)
    }

    /// Remove a boxed element. Values of another element type are never
    /// present, so removing one is a no-op.
    fn remove_value(&mut self, value: &Value) -> Result<bool> {
        derived::remove_value(self, value)
    }

    /// Whether a boxed element is present. Values of another element type
    /// are never present.
    fn contains_value(&self, value: &Value) -> Result<bool> {
        derived::contains_value(self, value)
    }

    fn contains_all(&self, other: &mut dyn Collection) -> Result<bool> {
        derived::contains_all(self, other)
    }

    fn contains_all_primitive(
        &self,
        other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
    ) -> Result<bool> {
        derived::contains_all_primitive(self, other)
    }

    fn add_all(&mut self, other: &mut dyn Collection) -> Result<bool> {
        derived::add_all(self, other)
    }

    fn add_all_primitive(
        &mut self,
        other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
    ) -> Result<bool> {
        derived::add_all_primitive(self, other)
    }

    fn remove_all(&mut self, other: &mut dyn Collection) -> Result<bool> {
        derived::remove_all(self, other)
    }

    fn remove_all_primitive(
        &mut self,
        other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
    ) -> Result<bool> {
        derived::remove_all_primitive(self, other)
    }

    fn retain_all(&mut self, other: &mut dyn Collection) -> Result<bool> {
        derived::retain_all(self, other)
    }

    fn retain_all_primitive(
        &mut self,
        other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
    ) -> Result<bool> {
        derived::retain_all_primitive(self, other)
    }

    fn clear(&mut self) -> Result<()> {
        derived::clear(self)
    }

    /// Remove every element for which `filter` holds.
    fn remove_if(&mut self, filter: &mut dyn FnMut(Self::Elem) -> bool) -> Result<bool> {
        derived::remove_if(self, filter)
    }

    /// Like [`remove_if`](Self::remove_if), with the test applied to boxed
    /// elements.
    fn remove_values_if(&mut self, filter: &mut dyn FnMut(&Value) -> bool) -> Result<bool> {
        derived::remove_values_if(self, filter)
    }

    fn to_vec(&mut self) -> Result<Vec<Self::Elem>> {
        derived::to_vec(self)
    }

    fn to_values(&mut self) -> Result<Vec<Value>> {
        derived::to_values(self)
    }

    fn stream(&mut self) -> Result<Stream<'_, Self::Elem>> {
        derived::stream(self)
    }

    fn par_stream(&mut self) -> Result<ParStream<'_, Self::Elem>> {
        derived::par_stream(self)
    }
}

/// A primitive container with set semantics.
pub trait PrimitiveSet: PrimitiveCollection {
    /// Membership equality: same size and every element of `self` is in
    /// `other`.
    fn set_equals(&mut self, other: &mut dyn Collection) -> Result<bool> {
        derived::set_equals(self, other)
    }

    /// Order-independent hash consistent with [`set_equals`](Self::set_equals).
    fn set_hash(&mut self) -> Result<u64> {
        derived::set_hash(self)
    }
}

macro_rules! forward_collection {
    ($($ty:ty),*) => {$(
        impl<T: PrimitiveCollection + ?Sized> PrimitiveCollection for $ty {
            type Elem = T::Elem;

            fn size(&self) -> Result<usize> {
                (**self).size()
            }

            fn add(&mut self, element: Self::Elem) -> Result<bool> {
                (**self).add(element)
            }

            fn remove(&mut self, element: Self::Elem) -> Result<bool> {
                (**self).remove(element)
            }

            fn contains(&self, element: Self::Elem) -> Result<bool> {
                (**self).contains(element)
            }

            fn cursor(&mut self) -> Result<Box<dyn PrimitiveCursor<Elem = Self::Elem> + '_>> {
                (**self).cursor()
            }

            fn is_empty(&self) -> Result<bool> {
                (**self).is_empty()
            }

            fn add_value(&mut self, value: Value) -> Result<bool> {
                (**self).add_value(value)
            }

            fn remove_value(&mut self, value: &Value) -> Result<bool> {
                (**self).remove_value(value)
            }

            fn contains_value(&self, value: &Value) -> Result<bool> {
                (**self).contains_value(value)
            }

            fn contains_all(&self, other: &mut dyn Collection) -> Result<bool> {
                (**self).contains_all(other)
            }

            fn contains_all_primitive(
                &self,
                other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
            ) -> Result<bool> {
                (**self).contains_all_primitive(other)
            }

            fn add_all(&mut self, other: &mut dyn Collection) -> Result<bool> {
                (**self).add_all(other)
            }

            fn add_all_primitive(
                &mut self,
                other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
            ) -> Result<bool> {
                (**self).add_all_primitive(other)
            }

            fn remove_all(&mut self, other: &mut dyn Collection) -> Result<bool> {
                (**self).remove_all(other)
            }

            fn remove_all_primitive(
                &mut self,
                other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
            ) -> Result<bool> {
                (**self).remove_all_primitive(other)
            }

            fn retain_all(&mut self, other: &mut dyn Collection) -> Result<bool> {
                (**self).retain_all(other)
            }

            fn retain_all_primitive(
                &mut self,
                other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
            ) -> Result<bool> {
                (**self).retain_all_primitive(other)
            }

            fn clear(&mut self) -> Result<()> {
                (**self).clear()
            }

            fn remove_if(&mut self, filter: &mut dyn FnMut(Self::Elem) -> bool) -> Result<bool> {
                (**self).remove_if(filter)
            }

            fn remove_values_if(&mut self, filter: &mut dyn FnMut(&Value) -> bool) -> Result<bool> {
                (**self).remove_values_if(filter)
            }

            fn to_vec(&mut self) -> Result<Vec<Self::Elem>> {
                (**self).to_vec()
            }

            fn to_values(&mut self) -> Result<Vec<Value>> {
                (**self).to_values()
            }

            fn stream(&mut self) -> Result<Stream<'_, Self::Elem>> {
                (**self).stream()
            }

            fn par_stream(&mut self) -> Result<ParStream<'_, Self::Elem>> {
                (**self).par_stream()
            }
        }

        impl<T: PrimitiveSet + ?Sized> PrimitiveSet for $ty {
            fn set_equals(&mut self, other: &mut dyn Collection) -> Result<bool> {
                (**self).set_equals(other)
            }

            fn set_hash(&mut self) -> Result<u64> {
                (**self).set_hash()
            }
        }
    )*};
}

forward_collection!(Box<T>, &mut T);
