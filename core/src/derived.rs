//! The full contract rebuilt from the primitive surface.
//!
//! Every function here is generic over the collection it operates on and only
//! calls `size`, `add`, `remove`, `contains` and `cursor` on it, plus the
//! `*_primitive` overloads after a successful diversion. They serve as the
//! default bodies of [`PrimitiveCollection`] and as the `Derived` route of the
//! views. When a view passes itself in, every call goes back through the view,
//! so a view whose cursor factory refuses makes each cursor-based function
//! here refuse too, without the backing container being touched.
//!
//! Bulk functions taking a `&mut dyn Collection` first try
//! [`Primitive::divert`]. If the argument holds the same element type the
//! matching `*_primitive` overload of the collection is called instead and
//! nothing is boxed. The `*_primitive` functions never divert again.

use crate::error::{Error, Result};
use crate::stream::{self, ParStream, Stream};
use crate::traits::{
    Collection, Cursor, Primitive, PrimitiveCollection, PrimitiveCursor, PrimitiveSet,
};
use crate::value::Value;

pub fn is_empty<C: PrimitiveCollection + ?Sized>(c: &C) -> Result<bool> {
    Ok(c.size()? == 0)
}

pub fn contains_value<C: PrimitiveCollection + ?Sized>(c: &C, value: &Value) -> Result<bool> {
    match <C::Elem as Primitive>::unboxed(value) {
        Some(element) => c.contains(element),
        None => Ok(false),
    }
}

pub fn add_value<C: PrimitiveCollection + ?Sized>(c: &mut C, value: Value) -> Result<bool> {
    let element = <C::Elem as Primitive>::unboxed(&value).ok_or(Error::IncompatibleElement {
        value,
        expected: <C::Elem as Primitive>::NAME,
    })?;
    c.add(element)
}

pub fn remove_value<C: PrimitiveCollection + ?Sized>(c: &mut C, value: &Value) -> Result<bool> {
    match <C::Elem as Primitive>::unboxed(value) {
        Some(element) => c.remove(element),
        None => Ok(false),
    }
}

pub fn contains_all<C: PrimitiveCollection + ?Sized>(
    c: &C,
    other: &mut dyn Collection,
) -> Result<bool> {
    if let Some(other) = <C::Elem as Primitive>::divert(other) {
        return c.contains_all_primitive(other);
    }
    let mut values = other.values()?;
    while values.has_next()? {
        if !contains_value(c, &values.next_value()?)? {
            return Ok(false);
        }
    }
    Ok(true)
}

pub fn contains_all_primitive<C: PrimitiveCollection + ?Sized>(
    c: &C,
    other: &mut dyn PrimitiveCollection<Elem = C::Elem>,
) -> Result<bool> {
    let mut cursor = other.cursor()?;
    while cursor.has_next()? {
        if !c.contains(cursor.next()?)? {
            return Ok(false);
        }
    }
    Ok(true)
}

pub fn add_all<C: PrimitiveCollection + ?Sized>(
    c: &mut C,
    other: &mut dyn Collection,
) -> Result<bool> {
    if let Some(other) = <C::Elem as Primitive>::divert(other) {
        return c.add_all_primitive(other);
    }
    let mut values = other.values()?;
    let mut changed = false;
    while values.has_next()? {
        changed |= add_value(c, values.next_value()?)?;
    }
    Ok(changed)
}

pub fn add_all_primitive<C: PrimitiveCollection + ?Sized>(
    c: &mut C,
    other: &mut dyn PrimitiveCollection<Elem = C::Elem>,
) -> Result<bool> {
    let mut cursor = other.cursor()?;
    let mut changed = false;
    while cursor.has_next()? {
        changed |= c.add(cursor.next()?)?;
    }
    Ok(changed)
}

pub fn remove_all<C: PrimitiveCollection + ?Sized>(
    c: &mut C,
    other: &mut dyn Collection,
) -> Result<bool> {
    if let Some(other) = <C::Elem as Primitive>::divert(other) {
        return c.remove_all_primitive(other);
    }
    let mut values = other.values()?;
    let mut changed = false;
    while values.has_next()? {
        changed |= remove_value(c, &values.next_value()?)?;
    }
    Ok(changed)
}

pub fn remove_all_primitive<C: PrimitiveCollection + ?Sized>(
    c: &mut C,
    other: &mut dyn PrimitiveCollection<Elem = C::Elem>,
) -> Result<bool> {
    let mut cursor = other.cursor()?;
    let mut changed = false;
    while cursor.has_next()? {
        changed |= c.remove(cursor.next()?)?;
    }
    Ok(changed)
}

pub fn retain_all<C: PrimitiveCollection + ?Sized>(
    c: &mut C,
    other: &mut dyn Collection,
) -> Result<bool> {
    if let Some(other) = <C::Elem as Primitive>::divert(other) {
        return c.retain_all_primitive(other);
    }
    let mut cursor = c.cursor()?;
    let mut changed = false;
    while cursor.has_next()? {
        let element = cursor.next()?;
        if !other.has_value(&element.boxed())? {
            cursor.remove()?;
            changed = true;
        }
    }
    Ok(changed)
}

pub fn retain_all_primitive<C: PrimitiveCollection + ?Sized>(
    c: &mut C,
    other: &mut dyn PrimitiveCollection<Elem = C::Elem>,
) -> Result<bool> {
    let mut cursor = c.cursor()?;
    let mut changed = false;
    while cursor.has_next()? {
        if !other.contains(cursor.next()?)? {
            cursor.remove()?;
            changed = true;
        }
    }
    Ok(changed)
}

pub fn clear<C: PrimitiveCollection + ?Sized>(c: &mut C) -> Result<()> {
    let mut cursor = c.cursor()?;
    while cursor.has_next()? {
        cursor.next()?;
        cursor.remove()?;
    }
    Ok(())
}

pub fn remove_if<C: PrimitiveCollection + ?Sized>(
    c: &mut C,
    filter: &mut dyn FnMut(C::Elem) -> bool,
) -> Result<bool> {
    let mut cursor = c.cursor()?;
    let mut changed = false;
    while cursor.has_next()? {
        if filter(cursor.next()?) {
            cursor.remove()?;
            changed = true;
        }
    }
    Ok(changed)
}

pub fn remove_values_if<C: PrimitiveCollection + ?Sized>(
    c: &mut C,
    filter: &mut dyn FnMut(&Value) -> bool,
) -> Result<bool> {
    remove_if(c, &mut |element| filter(&element.boxed()))
}

pub fn to_vec<C: PrimitiveCollection + ?Sized>(c: &mut C) -> Result<Vec<C::Elem>> {
    let mut out = Vec::with_capacity(c.size()?);
    let mut cursor = c.cursor()?;
    while cursor.has_next()? {
        out.push(cursor.next()?);
    }
    Ok(out)
}

pub fn to_values<C: PrimitiveCollection + ?Sized>(c: &mut C) -> Result<Vec<Value>> {
    let mut out = Vec::with_capacity(c.size()?);
    let mut cursor = c.cursor()?;
    while cursor.has_next()? {
        out.push(cursor.next()?.boxed());
    }
    Ok(out)
}

pub fn stream<C: PrimitiveCollection + ?Sized>(c: &mut C) -> Result<Stream<'_, C::Elem>> {
    Ok(stream::from_cursor(c.cursor()?))
}

pub fn par_stream<C: PrimitiveCollection + ?Sized>(c: &mut C) -> Result<ParStream<'_, C::Elem>> {
    Ok(stream::parallel(c.stream()?))
}

pub fn set_equals<S: PrimitiveSet + ?Sized>(s: &mut S, other: &mut dyn Collection) -> Result<bool> {
    if s.size()? != other.len()? {
        return Ok(false);
    }
    let mut cursor = s.cursor()?;
    match <S::Elem as Primitive>::divert(other) {
        Some(other) => {
            while cursor.has_next()? {
                if !other.contains(cursor.next()?)? {
                    return Ok(false);
                }
            }
        }
        None => {
            while cursor.has_next()? {
                if !other.has_value(&cursor.next()?.boxed())? {
                    return Ok(false);
                }
            }
        }
    }
    Ok(true)
}

pub fn set_hash<S: PrimitiveSet + ?Sized>(s: &mut S) -> Result<u64> {
    let mut cursor = s.cursor()?;
    let mut hash = 0u64;
    while cursor.has_next()? {
        hash = hash.wrapping_add(cursor.next()?.element_hash());
    }
    Ok(hash)
}
