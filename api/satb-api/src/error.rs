//! api/satb-api/src/error.rs
//! API error taxonomy: the only errors a handler needs to translate into a status code.

use thiserror::Error;

/// Errors surfaced across the request boundary. `EmptyVoicingSet` and `KeyParseFallback` are
/// deliberately absent: both degrade gracefully into a 200 response instead
/// of failing the request, so they are not error variants at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A required field was absent or empty (e.g. no bass notes, no progression).
    #[error("missing input: {0}")]
    InputMissing(String),
    /// A supplied field could not be parsed (bad note name, bad key string, length mismatch).
    #[error("malformed input: {0}")]
    InputMalformed(String),
    /// Any other failure that is not the caller's fault.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP-equivalent status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InputMissing(_) | Self::InputMalformed(_) => 400,
            Self::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_map_to_400() {
        assert_eq!(ApiError::InputMissing("bass_notes".into()).status_code(), 400);
        assert_eq!(ApiError::InputMalformed("key".into()).status_code(), 400);
    }

    #[test]
    fn internal_errors_map_to_500() {
        assert_eq!(ApiError::Internal("dp produced no path".into()).status_code(), 500);
    }
}
