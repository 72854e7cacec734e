//! Client tokens for idempotent (mutating) requests.

use uuid::Uuid;

use crate::error::{ModelError, ModelResult};

/// Longest client token the service accepts.
pub const MAX_CLIENT_TOKEN_LEN: usize = 64;

/// Generate a fresh client token.
///
/// UUIDv7 (time-ordered), at most [`MAX_CLIENT_TOKEN_LEN`] ASCII characters.
pub fn client_token() -> String {
    Uuid::now_v7().to_string()
}

/// Strict check of a caller-supplied token. Builders accept any text.
pub fn validate_client_token(token: &str) -> ModelResult<()> {
    if !token.is_ascii() {
        return Err(ModelError::validation("client token must be ASCII"));
    }
    if token.len() > MAX_CLIENT_TOKEN_LEN {
        return Err(ModelError::validation(format!(
            "client token is {} characters, at most {MAX_CLIENT_TOKEN_LEN} allowed",
            token.len()
        )));
    }
    Ok(())
}

/// Builders of requests that carry a `ClientToken`.
///
/// Wired up by [`idempotent!`](crate::idempotent).
pub trait IdempotentRequest: Sized {
    fn existing_client_token(&self) -> Option<&str>;

    fn with_client_token(self, token: String) -> Self;

    /// Fill in a generated token unless the caller already supplied one.
    fn ensure_client_token(self) -> Self {
        if self.existing_client_token().is_some() {
            return self;
        }
        let token = client_token();
        tracing::trace!(%token, "generated client token");
        self.with_client_token(token)
    }

    /// Validate the token currently set, if any.
    fn check_client_token(&self) -> ModelResult<()> {
        self.existing_client_token().map_or(Ok(()), validate_client_token)
    }
}

/// Implement [`IdempotentRequest`] for a builder with a `client_token` field.
#[macro_export]
macro_rules! idempotent {
    ($($builder:ty),* $(,)?) => {
        $(
            impl $crate::idempotency::IdempotentRequest for $builder {
                fn existing_client_token(&self) -> ::core::option::Option<&str> {
                    self.client_token.as_deref()
                }

                fn with_client_token(self, token: ::std::string::String) -> Self {
                    self.client_token(token)
                }
            }
        )*
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique_and_short() {
        let a = client_token();
        let b = client_token();
        assert_ne!(a, b);
        assert!(a.len() <= MAX_CLIENT_TOKEN_LEN);
        assert!(a.is_ascii());
        assert_eq!(validate_client_token(&a), Ok(()));
    }

    #[test]
    fn overlong_or_non_ascii_tokens_fail_validation() {
        assert_eq!(validate_client_token(&"a".repeat(64)), Ok(()));
        assert_eq!(
            validate_client_token(&"a".repeat(65)),
            Err(ModelError::Validation(
                "client token is 65 characters, at most 64 allowed".to_string()
            ))
        );
        let err = validate_client_token("jeton-é").unwrap_err();
        assert_eq!(err.to_string(), "validation failed: client token must be ASCII");
    }
}
