//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a local, non-fatal outcome: the operation that produced it
/// left the inventory exactly as it was (undo conflicts additionally consume
/// the blocked log entry). Presentation is the caller's job.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Insert rejected: a record with this id is already stored.
    #[error("item id {0} already exists")]
    DuplicateId(ItemId),

    /// Insert rejected: a record with this name (case-insensitive) is already stored.
    #[error("item name {0:?} already exists")]
    DuplicateName(String),

    /// Lookup, removal or update target is absent.
    #[error("item {0:?} not found")]
    NotFound(String),

    /// The undo log is empty.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Undo blocked: the removed record's id is in use again.
    #[error("cannot undo: item id {0} already exists")]
    ConflictId(ItemId),

    /// Undo blocked: the removed record's name is in use again.
    #[error("cannot undo: item name {0:?} already exists")]
    ConflictName(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn conflict_name(name: impl Into<String>) -> Self {
        Self::ConflictName(name.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// True for the two undo-conflict outcomes.
    pub fn is_undo_conflict(&self) -> bool {
        matches!(self, Self::ConflictId(_) | Self::ConflictName(_))
    }
}
