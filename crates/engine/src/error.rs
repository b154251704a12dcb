//! The module contains the errors the engine can return.
//!
//! There are exactly two recoverable kinds: the client sent bad input
//! ([`Validation`]) or the store failed ([`Database`]). Callers branch on
//! the variant, never on string contents.
//!
//! [`Validation`]: EngineError::Validation
//! [`Database`]: EngineError::Database

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The payload violated one or more validation rules. Carries every
    /// violated rule in field order; nothing was persisted.
    #[error("Validation failed")]
    Validation(Vec<String>),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
