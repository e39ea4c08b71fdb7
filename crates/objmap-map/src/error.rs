//! Error types for mapping registration and execution.

use thiserror::Error;

/// Errors surfaced by the registry and the engine.
///
/// Every error is terminal for the call that produced it: `register` leaves
/// the registry unchanged on failure, and a failed `map` returns no partial
/// destination.
#[derive(Debug, Error)]
pub enum MapError {
    /// A definition for this ordered type pair is already registered.
    #[error("Mapping for {source_type} -> {dest_type} already exists")]
    AlreadyExists {
        source_type: &'static str,
        dest_type: &'static str,
    },
    /// `map` was called for a type pair with no registered definition.
    #[error("No mapping defined for {source_type} -> {dest_type}")]
    NotFound {
        source_type: &'static str,
        dest_type: &'static str,
    },
    /// A transform override failed, or produced a value the destination
    /// field cannot hold. The original failure is preserved as the source.
    #[error("Invalid mapping function while setting property {dest_type}.{field}")]
    InvalidFunction {
        dest_type: &'static str,
        field: String,
        #[source]
        cause: anyhow::Error,
    },
    /// A missing source was passed without `allow_none`.
    #[error("cannot enumerate fields of a missing source (set allow_none to map it to None)")]
    NullSource,
}

pub type Result<T> = std::result::Result<T, MapError>;
