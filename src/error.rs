/// Failure modes of the representation-dependent sorts (counting, radix,
/// bucket). The comparison-based sorts never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The element could not be converted to the numeric domain the
    /// algorithm requires, or the derived key would index out of bounds.
    #[error("invalid precondition: {message}")]
    InvalidPrecondition { message: String },

    /// The derived key range is too large to allocate scratch space for.
    #[error("unbounded resource: {message}")]
    UnboundedResource { message: String },
}

impl SortError {
    pub(crate) fn invalid_precondition(message: impl Into<String>) -> Self {
        Self::InvalidPrecondition {
            message: message.into(),
        }
    }

    pub(crate) fn unbounded_resource(message: impl Into<String>) -> Self {
        Self::UnboundedResource {
            message: message.into(),
        }
    }
}
