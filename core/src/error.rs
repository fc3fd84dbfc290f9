//! Error type shared by views, backing containers and cursors.

use std::sync::Arc;

use thiserror::Error;

use crate::value::Value;

/// Failures raised by views or propagated from the containers they wrap.
///
/// Views only ever construct [`Error::Unsupported`] and
/// [`Error::CapabilityAbsent`] themselves. Everything else comes from a call
/// the view actually made and is handed back unchanged.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The operation mutates and the view is permanently read-only.
    #[error("`{operation}` is not supported: the view does not permit mutation")]
    Unsupported { operation: &'static str },

    /// The operation needs traversal that the backing container cannot provide.
    #[error("`{operation}` requires a capability the backing container does not provide")]
    CapabilityAbsent { operation: &'static str },

    /// A cursor was asked to produce past its last element.
    #[error("cursor has no more elements")]
    Exhausted,

    /// A cursor was asked to remove without a preceding produce.
    #[error("cursor has no current element to remove")]
    NoCurrent,

    /// A boxed value of the wrong variant was offered for storage.
    #[error("{value} cannot be stored in a `{expected}` container")]
    IncompatibleElement { value: Value, expected: &'static str },

    /// A failure reported by the backing container itself.
    #[error("backing container failed: {0}")]
    Backing(Arc<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    /// Wrap a collaborator's own error.
    pub fn backing(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Backing(Arc::new(err))
    }

    pub(crate) fn unsupported(operation: &'static str) -> Self {
        tracing::debug!(operation, "rejected mutation on read-only view");
        Error::Unsupported { operation }
    }

    pub(crate) fn absent(operation: &'static str) -> Self {
        tracing::debug!(operation, "capability absent under minimal forwarding");
        Error::CapabilityAbsent { operation }
    }

    /// The operation name carried by refusals raised by a view.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::Unsupported { operation } | Error::CapabilityAbsent { operation } => {
                Some(*operation)
            }
            _ => None,
        }
    }
}

static_assertions::assert_impl_all!(Error: Send, Sync, Clone);
