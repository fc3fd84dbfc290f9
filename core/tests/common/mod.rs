//! Shared fakes for view integration tests.
//!
//! - [`RecordingSet`] implements every operation itself and logs each call,
//!   so tests can see exactly which backing operations a view reached.
//! - [`CountingFilter`] is an approximate-membership backing that cannot be
//!   traversed; asking it for a cursor panics.
//! - [`Tracked`] wraps an argument collection and logs what a view asks of it.
//! - [`Values`] is a boxed-only argument with no primitive surface.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use primview_core::stream::{self, ParStream, Stream};
use primview_core::{
    Collection, Cursor, Error, Primitive, PrimitiveCollection, PrimitiveCursor, PrimitiveSet,
    Result, TypedCollection, Value,
};

/// Initialize tracing output for a test. Safe to call more than once.
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("primview_core=trace"));
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}

/// Element types under test, built from small integers.
pub trait Sample: Primitive + PartialOrd {
    fn sample(n: i32) -> Self;
}

impl Sample for i32 {
    fn sample(n: i32) -> Self {
        n
    }
}

impl Sample for i64 {
    fn sample(n: i32) -> Self {
        i64::from(n) << 33
    }
}

impl Sample for f64 {
    fn sample(n: i32) -> Self {
        f64::from(n) + 0.5
    }
}

pub fn samples<X: Sample>(ns: &[i32]) -> Vec<X> {
    ns.iter().map(|&n| X::sample(n)).collect()
}

pub fn boxed<X: Sample>(ns: &[i32]) -> Vec<Value> {
    ns.iter().map(|&n| X::sample(n).boxed()).collect()
}

/// Shared, cloneable record of calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    pub fn record(&self, call: &'static str) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|c| **c == call).count()
    }

    pub fn reset(&self) {
        self.0.lock().unwrap().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

fn insert<X: Primitive>(items: &mut Vec<X>, element: X) -> bool {
    if items.contains(&element) {
        return false;
    }
    items.push(element);
    true
}

fn delete<X: Primitive>(items: &mut Vec<X>, element: X) -> bool {
    match items.iter().position(|item| *item == element) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

/// Elements of a bulk argument, boxed. Diverts the same way a derived
/// operation would, so a same-type argument is asked for `typed` once.
fn argument_values<X: Primitive>(other: &mut dyn Collection) -> Result<Vec<Value>> {
    if let Some(typed) = X::divert(other) {
        return Ok(typed.to_vec()?.into_iter().map(X::boxed).collect());
    }
    let mut values = other.values()?;
    let mut out = Vec::new();
    while values.has_next()? {
        out.push(values.next_value()?);
    }
    Ok(out)
}

fn contained<X: Primitive>(values: &[Value], element: X) -> bool {
    values.contains(&element.boxed())
}

/// A set that implements every operation on its own storage and logs each
/// call by name. Cursor calls are logged with a `cursor.` prefix.
#[derive(Debug, Default)]
pub struct RecordingSet<X> {
    items: Vec<X>,
    log: CallLog,
}

impl<X: Sample> RecordingSet<X> {
    pub fn of(ns: &[i32]) -> Self {
        let mut items = Vec::new();
        for x in samples::<X>(ns) {
            insert(&mut items, x);
        }
        RecordingSet {
            items,
            log: CallLog::default(),
        }
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    pub fn items(&self) -> &[X] {
        &self.items
    }

    pub fn sorted(&self) -> Vec<X> {
        let mut items = self.items.clone();
        items.sort_by(|a, b| a.partial_cmp(b).unwrap());
        items
    }
}

impl<X: Primitive> PrimitiveCollection for RecordingSet<X> {
    type Elem = X;

    fn size(&self) -> Result<usize> {
        self.log.record("size");
        Ok(self.items.len())
    }

    fn add(&mut self, element: X) -> Result<bool> {
        self.log.record("add");
        Ok(insert(&mut self.items, element))
    }

    fn remove(&mut self, element: X) -> Result<bool> {
        self.log.record("remove");
        Ok(delete(&mut self.items, element))
    }

    fn contains(&self, element: X) -> Result<bool> {
        self.log.record("contains");
        Ok(self.items.contains(&element))
    }

    fn cursor(&mut self) -> Result<Box<dyn PrimitiveCursor<Elem = X> + '_>> {
        self.log.record("cursor");
        Ok(Box::new(RecordingCursor {
            items: &mut self.items,
            pos: 0,
            current: false,
            log: self.log.clone(),
        }))
    }

    fn is_empty(&self) -> Result<bool> {
        self.log.record("is_empty");
        Ok(self.items.is_empty())
    }

    fn add_value(&mut self, value: Value) -> Result<bool> {
        self.log.record("add_value");
        let element = X::unboxed(&value).ok_or(Error::IncompatibleElement {
            value,
            expected: X::NAME,
        })?;
        Ok(insert(&mut self.items, element))
    }

    fn remove_value(&mut self, value: &Value) -> Result<bool> {
        self.log.record("remove_value");
        Ok(X::unboxed(value).is_some_and(|element| delete(&mut self.items, element)))
    }

    fn contains_value(&self, value: &Value) -> Result<bool> {
        self.log.record("contains_value");
        Ok(X::unboxed(value).is_some_and(|element| self.items.contains(&element)))
    }

    fn contains_all(&self, other: &mut dyn Collection) -> Result<bool> {
        self.log.record("contains_all");
        let values = argument_values::<X>(other)?;
        Ok(values
            .iter()
            .all(|v| X::unboxed(v).is_some_and(|e| self.items.contains(&e))))
    }

    fn contains_all_primitive(
        &self,
        other: &mut dyn PrimitiveCollection<Elem = X>,
    ) -> Result<bool> {
        self.log.record("contains_all_primitive");
        Ok(other.to_vec()?.iter().all(|e| self.items.contains(e)))
    }

    fn add_all(&mut self, other: &mut dyn Collection) -> Result<bool> {
        self.log.record("add_all");
        let mut changed = false;
        for value in argument_values::<X>(other)? {
            let element = X::unboxed(&value).ok_or(Error::IncompatibleElement {
                value,
                expected: X::NAME,
            })?;
            changed |= insert(&mut self.items, element);
        }
        Ok(changed)
    }

    fn add_all_primitive(&mut self, other: &mut dyn PrimitiveCollection<Elem = X>) -> Result<bool> {
        self.log.record("add_all_primitive");
        let mut changed = false;
        for element in other.to_vec()? {
            changed |= insert(&mut self.items, element);
        }
        Ok(changed)
    }

    fn remove_all(&mut self, other: &mut dyn Collection) -> Result<bool> {
        self.log.record("remove_all");
        let values = argument_values::<X>(other)?;
        let before = self.items.len();
        self.items.retain(|e| !contained(&values, *e));
        Ok(self.items.len() != before)
    }

    fn remove_all_primitive(
        &mut self,
        other: &mut dyn PrimitiveCollection<Elem = X>,
    ) -> Result<bool> {
        self.log.record("remove_all_primitive");
        let removed = other.to_vec()?;
        let before = self.items.len();
        self.items.retain(|e| !removed.contains(e));
        Ok(self.items.len() != before)
    }

    fn retain_all(&mut self, other: &mut dyn Collection) -> Result<bool> {
        self.log.record("retain_all");
        let values = argument_values::<X>(other)?;
        let before = self.items.len();
        self.items.retain(|e| contained(&values, *e));
        Ok(self.items.len() != before)
    }

    fn retain_all_primitive(
        &mut self,
        other: &mut dyn PrimitiveCollection<Elem = X>,
    ) -> Result<bool> {
        self.log.record("retain_all_primitive");
        let kept = other.to_vec()?;
        let before = self.items.len();
        self.items.retain(|e| kept.contains(e));
        Ok(self.items.len() != before)
    }

    fn clear(&mut self) -> Result<()> {
        self.log.record("clear");
        self.items.clear();
        Ok(())
    }

    fn remove_if(&mut self, filter: &mut dyn FnMut(X) -> bool) -> Result<bool> {
        self.log.record("remove_if");
        let before = self.items.len();
        self.items.retain(|e| !filter(*e));
        Ok(self.items.len() != before)
    }

    fn remove_values_if(&mut self, filter: &mut dyn FnMut(&Value) -> bool) -> Result<bool> {
        self.log.record("remove_values_if");
        let before = self.items.len();
        self.items.retain(|e| !filter(&e.boxed()));
        Ok(self.items.len() != before)
    }

    fn to_vec(&mut self) -> Result<Vec<X>> {
        self.log.record("to_vec");
        Ok(self.items.clone())
    }

    fn to_values(&mut self) -> Result<Vec<Value>> {
        self.log.record("to_values");
        Ok(self.items.iter().map(|e| e.boxed()).collect())
    }

    fn stream(&mut self) -> Result<Stream<'_, X>> {
        self.log.record("stream");
        Ok(Box::new(self.items.clone().into_iter().map(Ok::<X, Error>)))
    }

    fn par_stream(&mut self) -> Result<ParStream<'_, X>> {
        self.log.record("par_stream");
        let items: Stream<'_, X> = Box::new(self.items.clone().into_iter().map(Ok::<X, Error>));
        Ok(stream::parallel(items))
    }
}

impl<X: Primitive> PrimitiveSet for RecordingSet<X> {
    fn set_equals(&mut self, other: &mut dyn Collection) -> Result<bool> {
        self.log.record("set_equals");
        let values = argument_values::<X>(other)?;
        Ok(values.len() == self.items.len() && self.items.iter().all(|e| contained(&values, *e)))
    }

    fn set_hash(&mut self) -> Result<u64> {
        self.log.record("set_hash");
        Ok(self
            .items
            .iter()
            .fold(0u64, |hash, e| hash.wrapping_add(e.element_hash())))
    }
}

/// Cursor over a [`RecordingSet`]'s storage.
pub struct RecordingCursor<'a, X> {
    items: &'a mut Vec<X>,
    pos: usize,
    current: bool,
    log: CallLog,
}

impl<X: Primitive> RecordingCursor<'_, X> {
    fn take(&mut self) -> Result<X> {
        let item = *self.items.get(self.pos).ok_or(Error::Exhausted)?;
        self.pos += 1;
        self.current = true;
        Ok(item)
    }
}

impl<X: Primitive> Cursor for RecordingCursor<'_, X> {
    fn has_next(&mut self) -> Result<bool> {
        self.log.record("cursor.has_next");
        Ok(self.pos < self.items.len())
    }

    fn next_value(&mut self) -> Result<Value> {
        self.log.record("cursor.next_value");
        self.take().map(X::boxed)
    }

    fn remove(&mut self) -> Result<()> {
        self.log.record("cursor.remove");
        if !self.current {
            return Err(Error::NoCurrent);
        }
        self.pos -= 1;
        self.items.remove(self.pos);
        self.current = false;
        Ok(())
    }

    fn for_each_remaining_value(&mut self, action: &mut dyn FnMut(Value)) -> Result<()> {
        self.log.record("cursor.for_each_remaining_value");
        while self.pos < self.items.len() {
            action(self.take()?.boxed());
        }
        Ok(())
    }
}

impl<X: Primitive> PrimitiveCursor for RecordingCursor<'_, X> {
    type Elem = X;

    fn next(&mut self) -> Result<X> {
        self.log.record("cursor.next");
        self.take()
    }

    fn for_each_remaining(&mut self, action: &mut dyn FnMut(X)) -> Result<()> {
        self.log.record("cursor.for_each_remaining");
        while self.pos < self.items.len() {
            action(self.take()?);
        }
        Ok(())
    }
}

const FILTER_SLOTS: usize = 64;

/// Counting approximate-membership filter. Supports size, add, remove and
/// contains; elements cannot be enumerated, so `cursor` panics.
#[derive(Debug)]
pub struct CountingFilter<X> {
    counts: [u8; FILTER_SLOTS],
    len: usize,
    log: CallLog,
    _elem: std::marker::PhantomData<X>,
}

impl<X: Primitive> Default for CountingFilter<X> {
    fn default() -> Self {
        CountingFilter {
            counts: [0; FILTER_SLOTS],
            len: 0,
            log: CallLog::default(),
            _elem: std::marker::PhantomData,
        }
    }
}

impl<X: Primitive> CountingFilter<X> {
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    fn slot(element: X) -> usize {
        (element.element_hash() % FILTER_SLOTS as u64) as usize
    }
}

impl<X: Primitive> PrimitiveCollection for CountingFilter<X> {
    type Elem = X;

    fn size(&self) -> Result<usize> {
        self.log.record("size");
        Ok(self.len)
    }

    fn add(&mut self, element: X) -> Result<bool> {
        self.log.record("add");
        let slot = &mut self.counts[Self::slot(element)];
        if *slot > 0 {
            return Ok(false);
        }
        *slot = 1;
        self.len += 1;
        Ok(true)
    }

    fn remove(&mut self, element: X) -> Result<bool> {
        self.log.record("remove");
        let slot = &mut self.counts[Self::slot(element)];
        if *slot == 0 {
            return Ok(false);
        }
        *slot = 0;
        self.len -= 1;
        Ok(true)
    }

    fn contains(&self, element: X) -> Result<bool> {
        self.log.record("contains");
        Ok(self.counts[Self::slot(element)] > 0)
    }

    fn cursor(&mut self) -> Result<Box<dyn PrimitiveCursor<Elem = X> + '_>> {
        panic!("approximate membership cannot be traversed")
    }
}

impl<X: Primitive> PrimitiveSet for CountingFilter<X> {}

/// Wraps an argument collection and logs what is asked of it.
pub struct Tracked<T> {
    inner: T,
    log: CallLog,
}

impl<T> Tracked<T> {
    pub fn new(inner: T) -> Self {
        Tracked {
            inner,
            log: CallLog::default(),
        }
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }
}

impl<T: PrimitiveCollection> Collection for Tracked<T> {
    fn len(&self) -> Result<usize> {
        self.log.record("len");
        self.inner.size()
    }

    fn has_value(&self, value: &Value) -> Result<bool> {
        self.log.record("has_value");
        self.inner.has_value(value)
    }

    fn values(&mut self) -> Result<Box<dyn Cursor + '_>> {
        self.log.record("values");
        self.inner.values()
    }

    fn typed(&mut self) -> Option<TypedCollection<'_>> {
        self.log.record("typed");
        self.inner.typed()
    }
}

/// A boxed-only collection.
#[derive(Debug, Clone, Default)]
pub struct Values(pub Vec<Value>);

impl Collection for Values {
    fn len(&self) -> Result<usize> {
        Ok(self.0.len())
    }

    fn has_value(&self, value: &Value) -> Result<bool> {
        Ok(self.0.contains(value))
    }

    fn values(&mut self) -> Result<Box<dyn Cursor + '_>> {
        Ok(Box::new(ValuesCursor {
            items: &self.0,
            pos: 0,
        }))
    }
}

struct ValuesCursor<'a> {
    items: &'a [Value],
    pos: usize,
}

impl Cursor for ValuesCursor<'_> {
    fn has_next(&mut self) -> Result<bool> {
        Ok(self.pos < self.items.len())
    }

    fn next_value(&mut self) -> Result<Value> {
        let value = *self.items.get(self.pos).ok_or(Error::Exhausted)?;
        self.pos += 1;
        Ok(value)
    }

    fn remove(&mut self) -> Result<()> {
        Err(Error::Unsupported { operation: "remove" })
    }
}

/// The operation named by a `CapabilityAbsent` refusal, if that is what
/// `result` holds.
pub fn absent<T>(result: Result<T>) -> Option<&'static str> {
    match result {
        Err(Error::CapabilityAbsent { operation }) => Some(operation),
        _ => None,
    }
}

/// The operation named by an `Unsupported` refusal, if that is what `result`
/// holds.
pub fn unsupported<T>(result: Result<T>) -> Option<&'static str> {
    match result {
        Err(Error::Unsupported { operation }) => Some(operation),
        _ => None,
    }
}

/// Whether every logged call is the cursor factory or a cursor operation.
pub fn only_cursor_calls(calls: &[&str]) -> bool {
    calls
        .iter()
        .all(|call| *call == "cursor" || call.starts_with("cursor."))
}
