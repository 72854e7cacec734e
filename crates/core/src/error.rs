//! Error model.

use thiserror::Error;

/// Result type used by the model helpers.
pub type ModelResult<T> = Result<T, ModelError>;

/// Model-level error.
///
/// Records themselves never fail: absent fields, unknown enumeration text and
/// out-of-range values are all representable and are left for the service to
/// reject. These errors only come out of the opt-in strict helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Text is not one of the canonical values of a closed enumeration.
    #[error("unknown {enumeration} value: {value:?}")]
    UnknownVariant {
        enumeration: &'static str,
        value: String,
    },

    /// A value broke a service constraint the model can check locally.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl ModelError {
    pub fn unknown_variant(enumeration: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            enumeration,
            value: value.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Failure while walking a paginated operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError<E> {
    /// The caller-supplied fetch failed.
    #[error("page fetch failed: {0}")]
    Fetch(E),

    /// The service handed back a continuation token that was already consumed.
    #[error("continuation token repeated: {0}")]
    RepeatedToken(String),
}

impl<E> PaginationError<E> {
    pub fn into_fetch_error(self) -> Option<E> {
        match self {
            PaginationError::Fetch(e) => Some(e),
            PaginationError::RepeatedToken(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_message_names_enumeration_and_value() {
        let err = ModelError::unknown_variant("InstanceType", "z9.huge");
        assert_eq!(err.to_string(), "unknown InstanceType value: \"z9.huge\"");
    }

    #[test]
    fn validation_message_is_prefixed() {
        let err = ModelError::validation("client token must be ASCII");
        assert_eq!(err, ModelError::Validation("client token must be ASCII".into()));
        assert_eq!(err.to_string(), "validation failed: client token must be ASCII");
    }

    #[test]
    fn pagination_error_exposes_fetch_error() {
        let err: PaginationError<&str> = PaginationError::Fetch("throttled");
        assert_eq!(err.to_string(), "page fetch failed: throttled");
        assert_eq!(err.into_fetch_error(), Some("throttled"));

        let err: PaginationError<&str> = PaginationError::RepeatedToken("t1".into());
        assert_eq!(err.into_fetch_error(), None);
    }
}
