//! Forwarding policies and the route table they resolve to.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// How much of the full contract the backing container is trusted to implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ForwardingPolicy {
    /// Every operation calls the identically-shaped backing operation.
    Pure,
    /// Only the primitive surface and the cursor factory are trusted; higher
    /// level operations are rebuilt on top of them.
    Shallow,
    /// The backing container cannot be traversed. Anything needing a cursor
    /// is refused before the backing container is touched.
    Minimal,
}

static_assertions::assert_eq_size!(ForwardingPolicy, u8);

impl ForwardingPolicy {
    pub const ALL: [ForwardingPolicy; 3] = [
        ForwardingPolicy::Pure,
        ForwardingPolicy::Shallow,
        ForwardingPolicy::Minimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ForwardingPolicy::Pure => "pure",
            ForwardingPolicy::Shallow => "shallow",
            ForwardingPolicy::Minimal => "minimal",
        }
    }

    pub fn routes(self) -> Routes {
        Routes::from(self)
    }
}

impl fmt::Display for ForwardingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown forwarding policy `{0}` (expected `pure`, `shallow` or `minimal`)")]
pub struct ParsePolicyError(pub String);

impl FromStr for ForwardingPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pure" => Ok(ForwardingPolicy::Pure),
            "shallow" => Ok(ForwardingPolicy::Shallow),
            "minimal" => Ok(ForwardingPolicy::Minimal),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// Where a single operation is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Call the identically-shaped backing operation.
    Direct,
    /// Rebuild the operation from the view's own primitive surface.
    Derived,
    /// Refuse with [`Error::CapabilityAbsent`](crate::Error::CapabilityAbsent).
    Absent,
}

static_assertions::assert_eq_size!(Route, u8);

/// Per-group routes, resolved once when a view is constructed.
///
/// `size`, primitive `add`/`remove`/`contains`, cursor `has_next` and cursor
/// `remove` are direct under every policy and have no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Routes {
    higher: Route,
    cursor: Route,
    identity: Route,
    next: Route,
    next_value: Route,
}

impl Routes {
    /// Bulk operations, emptiness, clearing, filtering, array extraction and
    /// pipeline factories.
    pub fn higher(&self) -> Route {
        self.higher
    }

    /// The cursor factory.
    pub fn cursor(&self) -> Route {
        self.cursor
    }

    /// Set equality and hash.
    pub fn identity(&self) -> Route {
        self.identity
    }

    /// A cursor's primitive `next`.
    pub fn next(&self) -> Route {
        self.next
    }

    /// A cursor's boxed `next_value` and bulk remaining-traversal.
    pub fn next_value(&self) -> Route {
        self.next_value
    }
}

impl From<ForwardingPolicy> for Routes {
    fn from(policy: ForwardingPolicy) -> Self {
        use Route::*;
        match policy {
            ForwardingPolicy::Pure => Routes {
                higher: Direct,
                cursor: Direct,
                identity: Direct,
                next: Direct,
                next_value: Direct,
            },
            // Set identity stays direct here even though other traversal-based
            // operations are rebuilt.
            ForwardingPolicy::Shallow => Routes {
                higher: Derived,
                cursor: Direct,
                identity: Direct,
                next: Direct,
                next_value: Derived,
            },
            ForwardingPolicy::Minimal => Routes {
                higher: Derived,
                cursor: Absent,
                identity: Absent,
                next: Absent,
                next_value: Derived,
            },
        }
    }
}

/// Dispatch on a route group. `Absent` refuses with the given operation name.
macro_rules! route {
    ($routes:expr, $group:ident, $op:literal, direct => $direct:expr, derived => $derived:expr $(,)?) => {
        match $routes.$group() {
            $crate::policy::Route::Direct => $direct,
            $crate::policy::Route::Derived => $derived,
            $crate::policy::Route::Absent => Err($crate::error::Error::absent($op)),
        }
    };
}

pub(crate) use route;
