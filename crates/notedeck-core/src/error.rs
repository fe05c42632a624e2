//! Error types for backend requests and view configuration.

use thiserror::Error;

/// Failure of a single JSON request.
///
/// Every variant displays as a plain human-readable message. A non-success
/// status displays the response body verbatim, since the backend puts its
/// error text there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
  /// The request never produced a response.
  #[error("{0}")]
  Transport(String),

  /// The backend answered outside 200-299.
  #[error("{body}")]
  Status {
    /// HTTP status code.
    status: u16,
    /// Raw response text.
    body:   String
  },

  /// The response body was not the expected JSON.
  #[error("invalid JSON response: {0}")]
  Decode(String),

  /// The request payload could not be encoded.
  #[error("failed to encode request: {0}")]
  Encode(String)
}

impl FetchError {
  pub fn status(&self) -> Option<u16> {
    match self {
      | Self::Status {
        status,
        ..
      } => Some(*status),
      | _ => None
    }
  }
}

/// Errors raised while building a [`crate::ViewConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
  #[error("invalid view config: {0}")]
  Parse(String),

  #[error("unknown view config key: {0}")]
  UnknownKey(String),

  #[error("expected KEY=VALUE, got: {0}")]
  MalformedOverride(String)
}
