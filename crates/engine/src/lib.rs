//! Domain core for the bottega record keeper.
//!
//! Each resource (sales, expenses, inventory) follows the same contract:
//! validate a raw JSON payload, insert a row, list all rows most recent
//! first. The contract lives in the [`Resource`] trait and [`Engine`] runs
//! it against an injected database connection.

use sea_orm::DatabaseConnection;
use serde_json::Value;

pub use error::EngineError;
pub use expenses::Expense;
pub use inventory::InventoryItem;
pub use resource::Resource;
pub use sales::Sale;

mod error;
mod resource;
pub mod validate;

pub mod expenses;
pub mod inventory;
pub mod sales;

type ResultEngine<T> = Result<T, EngineError>;

/// Resource service: validation plus storage, nothing else.
///
/// The connection is passed in at construction so tests can point the
/// engine at any database they like; there is no global handle.
#[derive(Clone, Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }

    /// Validates `payload` and persists a new record.
    ///
    /// Invalid input fails with [`EngineError::Validation`] carrying every
    /// violated rule; storage is not touched in that case. Valid input is
    /// inserted and the full persisted row (including the store-assigned
    /// `id` and `created_at`) is returned unchanged.
    pub async fn create<R: Resource>(&self, payload: &Value) -> ResultEngine<R::Record> {
        let draft = R::validate(payload).map_err(EngineError::Validation)?;
        Ok(R::insert(&self.database, draft).await?)
    }

    /// Returns every record of the resource, most recent first.
    ///
    /// An empty table yields an empty vec; storage faults propagate as
    /// [`EngineError::Database`] instead of masquerading as "no data".
    pub async fn list<R: Resource>(&self) -> ResultEngine<Vec<R::Record>> {
        Ok(R::list_all(&self.database).await?)
    }
}
