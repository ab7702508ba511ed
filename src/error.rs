use std::fmt;

use thiserror::Error;

/// Shorthand for results whose error is this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// One of the three operations every transformer must offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Produces an empty accumulator.
    Init,
    /// Folds one item into the accumulator.
    Step,
    /// Finalizes the accumulator.
    Complete,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Capability::Init => "init",
            Capability::Step => "step",
            Capability::Complete => "complete",
        })
    }
}

/// Errors raised while building or running a pipeline.
///
/// Every error is raised synchronously, before any item of the source is consumed
/// by the failing operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value used as a transformer lacks one of its capabilities.
    #[error("not a transformer: missing the `{capability}` capability")]
    MissingCapability {
        /// The first capability found missing.
        capability: Capability,
    },
    /// A numeric parameter is out of range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// What the parameter should have been.
        reason: &'static str,
    },
}

impl Error {
    pub(crate) fn missing_capability(capability: Capability) -> Self {
        debug!(%capability, "value rejected as a transformer");
        Error::MissingCapability { capability }
    }

    pub(crate) fn invalid_argument(name: &'static str, reason: &'static str) -> Self {
        debug!(name, reason, "transducer argument rejected");
        Error::InvalidArgument { name, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::missing_capability(Capability::Complete).to_string(),
            "not a transformer: missing the `complete` capability"
        );
        assert_eq!(
            Error::invalid_argument("n", "must be at least 1").to_string(),
            "invalid argument `n`: must be at least 1"
        );
    }
}
