//! Error types for the Imobiliar client.
//!
//! # Design
//! Failures are grouped the way callers react to them: local validation
//! (`MissingField`), session problems (`InvalidBase`, `InvalidSession`),
//! messages reported by the backend (`Backend`), responses that claim
//! success but do not have the expected shape (`MalformedResponse` and the
//! error-probe variants), and transport failures. The batch runner renders
//! any of these into a per-entry message with `to_string()`.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by the session manager, actions and the transport.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required local field was empty; detected before any network call.
    #[error("campo '{0}' vazio")]
    MissingField(&'static str),

    /// An action was invoked without a live session.
    #[error("base inválida")]
    InvalidBase,

    /// The backend rejected the session id (expired or already logged out).
    #[error("sessão inválida")]
    InvalidSession,

    /// Application-level error reported in the response `Erros` list.
    #[error("{message}")]
    Backend {
        field: Option<String>,
        message: String,
    },

    /// `Header.Error` was absent or not a boolean.
    #[error("response header has no boolean 'Error' flag")]
    MissingErrorFlag,

    /// `Header.Error` was true but `Body.Erros` was empty.
    #[error("erro lançado, mas nenhum encontrado")]
    ErrorFlaggedWithoutEntries,

    /// The backend reported success but a required field was absent.
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),

    /// The request could not be delivered or its response read.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The call's deadline passed before or while the request ran.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// A batch entry panicked; the panic payload is kept as text.
    #[error("entry panicked: {0}")]
    Panicked(String),
}
