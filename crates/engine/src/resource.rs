//! The shared create/list contract every tracked resource implements.

use std::future::Future;

use sea_orm::{DatabaseConnection, DbErr};
use serde::Serialize;
use serde_json::Value;

/// Descriptor for one tracked resource (sales, expenses, inventory).
///
/// Implementations supply validation and the two storage operations; the
/// generic [`Engine`](crate::Engine) composes them so the create/list flow
/// is written once instead of per resource.
///
/// Futures are declared `Send` explicitly so callers can hold them across
/// task boundaries (the HTTP layer requires this).
pub trait Resource: Send + Sync + 'static {
    /// Validated fields, ready to insert. String fields are already
    /// trimmed.
    type Draft: Send + 'static;
    /// The fully persisted row as serialized to clients.
    type Record: Serialize + Send + Sync + 'static;

    /// Lowercase singular, e.g. "sale". Used in client-facing messages.
    const SINGULAR: &'static str;
    /// Lowercase plural, e.g. "sales".
    const PLURAL: &'static str;
    /// Capitalized display name, e.g. "Sale".
    const DISPLAY: &'static str;

    /// Checks the raw payload against every rule for this resource.
    ///
    /// Rules are evaluated independently so the error list contains all
    /// violations, in field order. The only short-circuit is the
    /// payload-is-object check.
    fn validate(payload: &Value) -> Result<Self::Draft, Vec<String>>;

    /// Inserts one row, leaving `id` and `created_at` to the store, and
    /// returns the persisted row including the generated fields.
    fn insert(
        database: &DatabaseConnection,
        draft: Self::Draft,
    ) -> impl Future<Output = Result<Self::Record, DbErr>> + Send;

    /// Returns every row, ordered by `created_at` descending with ties
    /// broken by `id` descending so the latest insert always comes first.
    fn list_all(
        database: &DatabaseConnection,
    ) -> impl Future<Output = Result<Vec<Self::Record>, DbErr>> + Send;
}
