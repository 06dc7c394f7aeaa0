use thiserror::Error;

/// Unified error type for the tickstat workspace.
///
/// Upstream transport/decode failures are recovered inside the history path
/// by synthetic substitution and normally never reach a caller; the variants
/// a caller sees are the data-sufficiency ones (`NotFound`,
/// `InsufficientOverlap`) and argument validation.
#[derive(Debug, Error)]
pub enum TickstatError {
    /// Network or decode failure talking to the upstream price service.
    #[error("{source_name} upstream failure: {msg}")]
    Upstream {
        /// Name of the source that failed.
        source_name: String,
        /// Human-readable failure reason.
        msg: String,
    },

    /// A fully resolved series (real or synthetic) was still empty.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "price history for AAPL".
        what: String,
    },

    /// Both series resolved but share fewer than 2 common timestamps.
    /// Client-visible and non-retryable; distinct from `NotFound`.
    #[error("insufficient overlap: {common} common timestamp(s), need at least 2")]
    InsufficientOverlap {
        /// Number of timestamps the two series actually share.
        common: usize,
    },

    /// Invalid caller input.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),
}

impl TickstatError {
    /// Helper: build an `Upstream` error with the source name and message.
    pub fn upstream(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Upstream {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Whether this error was produced by the upstream transport layer.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }
}
