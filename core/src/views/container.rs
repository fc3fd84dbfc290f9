//! Container and set views.

use crate::derived;
use crate::error::{Error, Result};
use crate::policy::{ForwardingPolicy, Route, Routes, route};
use crate::stream::{ParStream, Stream};
use crate::traits::{Collection, Primitive, PrimitiveCollection, PrimitiveCursor, PrimitiveSet};
use crate::value::Value;

/// Adapts a primitive container to the full contract under a
/// [`ForwardingPolicy`].
///
/// `size` and the primitive `add`/`remove`/`contains` always go straight to
/// the backing container. Every other operation follows the view's
/// [`Routes`]. Nothing is cached, so each query sees the backing container as
/// it is at call time.
///
/// The backing container is held by value; pass `&mut container` to keep
/// ownership.
#[derive(Debug, Clone)]
pub struct ContainerView<B> {
    backing: B,
    policy: ForwardingPolicy,
    routes: Routes,
}

/// A [`ContainerView`] over a [`PrimitiveSet`] additionally implements
/// [`PrimitiveSet`], with equality and hash routed by the policy.
pub type SetView<B> = ContainerView<B>;

impl<B: PrimitiveCollection> ContainerView<B> {
    pub fn new(backing: B, policy: ForwardingPolicy) -> Self {
        let routes = Routes::from(policy);
        tracing::trace!(
            %policy,
            element = <B::Elem as Primitive>::NAME,
            ?routes,
            "container view created"
        );
        Self {
            backing,
            policy,
            routes,
        }
    }

    pub fn pure(backing: B) -> Self {
        Self::new(backing, ForwardingPolicy::Pure)
    }

    pub fn shallow(backing: B) -> Self {
        Self::new(backing, ForwardingPolicy::Shallow)
    }

    pub fn minimal(backing: B) -> Self {
        Self::new(backing, ForwardingPolicy::Minimal)
    }
}

impl<B> ContainerView<B> {
    pub fn policy(&self) -> ForwardingPolicy {
        self.policy
    }

    pub fn routes(&self) -> Routes {
        self.routes
    }

    pub fn backing(&self) -> &B {
        &self.backing
    }

    pub fn into_inner(self) -> B {
        self.backing
    }

    /// Refuses when the cursor factory is absent. Derived bodies that query
    /// `size` before traversing check this first.
    fn require_cursor(&self) -> Result<()> {
        match self.routes.cursor() {
            Route::Absent => Err(Error::absent("cursor")),
            Route::Direct | Route::Derived => Ok(()),
        }
    }
}

impl<B: PrimitiveCollection> PrimitiveCollection for ContainerView<B> {
    type Elem = B::Elem;

    fn size(&self) -> Result<usize> {
        self.backing.size()
    }

    fn add(&mut self, element: Self::Elem) -> Result<bool> {
        self.backing.add(element)
    }

    fn remove(&mut self, element: Self::Elem) -> Result<bool> {
        self.backing.remove(element)
    }

    fn contains(&self, element: Self::Elem) -> Result<bool> {
        self.backing.contains(element)
    }

    fn cursor(&mut self) -> Result<Box<dyn PrimitiveCursor<Elem = Self::Elem> + '_>> {
        self.require_cursor()?;
        self.backing.cursor()
    }

    fn is_empty(&self) -> Result<bool> {
        route!(self.routes, higher, "is_empty",
            direct => self.backing.is_empty(),
            derived => derived::is_empty(self),
        )
    }

    fn add_value(&mut self, value: Value) -> Result<bool> {
        route!(self.routes, higher, "add_value",
            direct => self.backing.add_value(value),
            derived => derived::add_value(self, value),
        )
    }

    fn remove_value(&mut self, value: &Value) -> Result<bool> {
        route!(self.routes, higher, "remove_value",
            direct => self.backing.remove_value(value),
            derived => derived::remove_value(self, value),
        )
    }

    fn contains_value(&self, value: &Value) -> Result<bool> {
        route!(self.routes, higher, "contains_value",
            direct => self.backing.contains_value(value),
            derived => derived::contains_value(self, value),
        )
    }

    fn contains_all(&self, other: &mut dyn Collection) -> Result<bool> {
        route!(self.routes, higher, "contains_all",
            direct => self.backing.contains_all(other),
            derived => derived::contains_all(self, other),
        )
    }

    fn contains_all_primitive(
        &self,
        other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
    ) -> Result<bool> {
        route!(self.routes, higher, "contains_all_primitive",
            direct => self.backing.contains_all_primitive(other),
            derived => derived::contains_all_primitive(self, other),
        )
    }

    fn add_all(&mut self, other: &mut dyn Collection) -> Result<bool> {
        route!(self.routes, higher, "add_all",
            direct => self.backing.add_all(other),
            derived => derived::add_all(self, other),
        )
    }

    fn add_all_primitive(
        &mut self,
        other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
    ) -> Result<bool> {
        route!(self.routes, higher, "add_all_primitive",
            direct => self.backing.add_all_primitive(other),
            derived => derived::add_all_primitive(self, other),
        )
    }

    fn remove_all(&mut self, other: &mut dyn Collection) -> Result<bool> {
        route!(self.routes, higher, "remove_all",
            direct => self.backing.remove_all(other),
            derived => derived::remove_all(self, other),
        )
    }

    fn remove_all_primitive(
        &mut self,
        other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
    ) -> Result<bool> {
        route!(self.routes, higher, "remove_all_primitive",
            direct => self.backing.remove_all_primitive(other),
            derived => derived::remove_all_primitive(self, other),
        )
    }

    fn retain_all(&mut self, other: &mut dyn Collection) -> Result<bool> {
        route!(self.routes, higher, "retain_all",
            direct => self.backing.retain_all(other),
            derived => derived::retain_all(self, other),
        )
    }

    fn retain_all_primitive(
        &mut self,
        other: &mut dyn PrimitiveCollection<Elem = Self::Elem>,
    ) -> Result<bool> {
        route!(self.routes, higher, "retain_all_primitive",
            direct => self.backing.retain_all_primitive(other),
            derived => derived::retain_all_primitive(self, other),
        )
    }

    fn clear(&mut self) -> Result<()> {
        route!(self.routes, higher, "clear",
            direct => self.backing.clear(),
            derived => derived::clear(self),
        )
    }

    fn remove_if(&mut self, filter: &mut dyn FnMut(Self::Elem) -> bool) -> Result<bool> {
        route!(self.routes, higher, "remove_if",
            direct => self.backing.remove_if(filter),
            derived => derived::remove_if(self, filter),
        )
    }

    fn remove_values_if(&mut self, filter: &mut dyn FnMut(&Value) -> bool) -> Result<bool> {
        route!(self.routes, higher, "remove_values_if",
            direct => self.backing.remove_values_if(filter),
            derived => derived::remove_values_if(self, filter),
        )
    }

    fn to_vec(&mut self) -> Result<Vec<Self::Elem>> {
        route!(self.routes, higher, "to_vec",
            direct => self.backing.to_vec(),
            derived => {
                self.require_cursor()?;
                derived::to_vec(self)
            },
        )
    }

    fn to_values(&mut self) -> Result<Vec<Value>> {
        route!(self.routes, higher, "to_values",
            direct => self.backing.to_values(),
            derived => {
                self.require_cursor()?;
                derived::to_values(self)
            },
        )
    }

    fn stream(&mut self) -> Result<Stream<'_, Self::Elem>> {
        route!(self.routes, higher, "stream",
            direct => self.backing.stream(),
            derived => derived::stream(self),
        )
    }

    fn par_stream(&mut self) -> Result<ParStream<'_, Self::Elem>> {
        route!(self.routes, higher, "par_stream",
            direct => self.backing.par_stream(),
            derived => derived::par_stream(self),
        )
    }
}

impl<B: PrimitiveSet> PrimitiveSet for ContainerView<B> {
    fn set_equals(&mut self, other: &mut dyn Collection) -> Result<bool> {
        route!(self.routes, identity, "set_equals",
            direct => self.backing.set_equals(other),
            derived => derived::set_equals(self, other),
        )
    }

    fn set_hash(&mut self) -> Result<u64> {
        route!(self.routes, identity, "set_hash",
            direct => self.backing.set_hash(),
            derived => derived::set_hash(self),
        )
    }
}
