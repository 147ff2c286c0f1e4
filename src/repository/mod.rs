//! Persistence boundary: a shared store hands out per-request units of work.
//!
//! Handlers only see these traits, so the HTTP layer does not depend on SQLite.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::AppError;
use crate::model::{Customer, CustomerInput};
use async_trait::async_trait;

/// One unit of work. Changes stay pending until [`save`](CustomerRepository::save);
/// dropping the session without saving discards them.
#[async_trait]
pub trait CustomerRepository: Send {
    /// All customers in id order.
    async fn list(&mut self) -> Result<Vec<Customer>, AppError>;

    async fn find(&mut self, id: i64) -> Result<Option<Customer>, AppError>;

    /// Stage an insert. The id is assigned here by storage, never taken from the caller.
    async fn add(&mut self, input: CustomerInput) -> Result<Customer, AppError>;

    /// Stage a full replace of every mutable field of an existing row.
    async fn replace(&mut self, customer: &Customer) -> Result<(), AppError>;

    /// Stage a delete. `NotFound` when no row has `id`.
    async fn remove(&mut self, id: i64) -> Result<(), AppError>;

    /// Commit everything staged since the previous call, atomically.
    async fn save(&mut self) -> Result<(), AppError>;
}

/// Shared handle to customer storage, held in application state.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Unit of work for reads.
    async fn begin(&self) -> Result<Box<dyn CustomerRepository>, AppError>;

    /// Unit of work that will write. Takes the write lock up front, so a read
    /// followed by a write cannot be invalidated by another request committing
    /// in between; concurrent writers queue and the last one wins.
    async fn begin_write(&self) -> Result<Box<dyn CustomerRepository>, AppError>;

    /// Cheap reachability check backing `/ready`.
    async fn ping(&self) -> Result<(), AppError>;
}
