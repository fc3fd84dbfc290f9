use crate::error::{Error, Result};
use crate::policy::{ForwardingPolicy, Routes};
use crate::stream::{ParStream, Stream};
use crate::traits::{Collection, PrimitiveCollection, PrimitiveCursor, PrimitiveSet};
use crate::value::Value;
use crate::views::{ReadOnlyCursor, SetView};

/// A set view that refuses every mutation.
///
/// Mutators fail with [`Error::Unsupported`] without touching the backing
/// container. Reads are served by the inner [`SetView`] under its policy, and
/// cursors handed out refuse `remove`.
#[derive(Debug, Clone)]
pub struct ImmutableSetView<B> {
    inner: SetView<B>,
}

impl<B: PrimitiveSet> ImmutableSetView<B> {
    pub fn new(backing: B, policy: ForwardingPolicy) -> Self {
        Self::from_view(SetView::new(backing, policy))
    }

    pub fn from_view(inner: SetView<B>) -> Self {
        Self { inner }
    }
}

impl<B> ImmutableSetView<B> {
    pub fn policy(&self) -> ForwardingPolicy {
        self.inner.policy()
    }

    pub fn routes(&self) -> Routes {
        self.inner.routes()
    }

    pub fn backing(&self) -> &B {
        self.inner.backing()
    }

    pub fn into_inner(self) -> B {
        self.inner.into_inner()
    }
}

impl<B: PrimitiveCollection> PrimitiveCollection for ImmutableSetView<B> {
    type Elem = B::Elem;

    fn size(&self) -> Result<usize> {
        self.inner.size()
    }

    fn add(&mut self, _element: Self::Elem) -> Result<bool> {
        Err(Error::unsupported("add"))
    }

    fn remove(&mut self, _element: Self::Elem) -> Result<bool> {
        Err(Error::unsupported("remove"))
    }

    fn contains(&self, element: Self::Elem) -> Result<bool> {
        self.inner.contains(element)
    }

    fn cursor(&mut self) -> Result<Box<dyn PrimitiveCursor<Elem = Self::Elem> + '_>> {
        let cursor = self.inner.cursor()?;
        Ok(Box::new(ReadOnlyCursor::new(cursor)))
    }

    fn is_empty(&self) -> Result<bool> {
        self.inner.is_empty()
    }

    fn add_value(&mut self, _value: Value) -> Result<bool> {
        Err(Error::unsupported("add_value"))
    }

    fn remove_value(&mut self, _value: &Value) -> Result<bool> {
        Err(Error::unsupported("remove_value"))
    }

    fn contains_value(&self, value: &Value) -> Result<bool> {
        self.inner.contains_value(value)
    }

    fn contains_all(&self, other: &mut dyn Collection) -> Result<bool> {
        self.inner.contains_all(other)
    }

    fn contains_all_primitive(
        &self,
        other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
    ) -> Result<bool> {
        self.inner.contains_all_primitive(other)
    }

    fn add_all(&mut self, _other: &mut dyn Collection) -> Result<bool> {
        Err(Error::unsupported("add_all"))
    }

    fn add_all_primitive(
        &mut self,
        _other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
    ) -> Result<bool> {
        Err(Error::unsupported("add_all_primitive"))
    }

    fn remove_all(&mut self, _other: &mut dyn Collection) -> Result<bool> {
        Err(Error::unsupported("remove_all"))
    }

    fn remove_all_primitive(
        &mut self,
        _other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
    ) -> Result<bool> {
        Err(Error::unsupported("remove_all_primitive"))
    }

    fn retain_all(&mut self, _other: &mut dyn Collection) -> Result<bool> {
        Err(Error::unsupported("retain_all"))
    }

    fn retain_all_primitive(
        &mut self,
        _other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
    ) -> Result<bool> {
        Err(Error::unsupported("retain_all_primitive"))
    }

    fn clear(&mut self) -> Result<()> {
        Err(Error::unsupported("clear"))
    }

    fn remove_if(&mut self, _filter: &mut dyn FnMut(Self::Elem) -> bool) -> Result<bool> {
        Err(Error::unsupported("remove_if"))
    }

    fn remove_values_if(&mut self, _filter: &mut dyn FnMut(&Value) -> bool) -> Result<bool> {
        Err(Error::unsupported("remove_values_if"))
    }

    fn to_vec(&mut self) -> Result<Vec<Self::Elem>> {
        self.inner.to_vec()
    }

    fn to_values(&mut self) -> Result<Vec<Value>> {
        self.inner.to_values()
    }

    fn stream(&mut self) -> Result<Stream<'_, Self::Elem>> {
        self.inner.stream()
    }

    fn par_stream(&mut self) -> Result<ParStream<'_, Self::Elem>> {
        self.inner.par_stream()
    }
}

impl<B: PrimitiveSet> PrimitiveSet for ImmutableSetView<B> {
    fn set_equals(&mut self, other: &mut dyn Collection) -> Result<bool> {
        self.inner.set_equals(other)
    }

    fn set_hash(&mut self) -> Result<u64> {
        self.inner.set_hash()
    }
}
