//! Customer API: CRUD over a single customer table in a SQLite file, with OpenAPI docs.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod settings;
pub mod state;
pub mod store;
pub mod validation;

pub use error::{AppError, ConfigError};
pub use model::{project, Customer, CustomerInput, CustomerView};
pub use repository::{CustomerRepository, CustomerStore, MemoryStore, SqliteStore};
pub use routes::app;
pub use settings::{Environment, Settings};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, CUSTOMERS_DDL};
