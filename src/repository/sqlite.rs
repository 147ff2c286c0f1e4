//! SQLite-backed store: one transaction per unit of work.

use super::{CustomerRepository, CustomerStore};
use crate::error::AppError;
use crate::model::{Customer, CustomerInput};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnection, SqlitePool, SqliteRow};
use sqlx::{Row, Sqlite, Transaction};

const SELECT_COLUMNS: &str = "SELECT ID, FirstName, Surname, Age, Secret FROM Customers";

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn session(&self, mode: TxMode) -> Box<dyn CustomerRepository> {
        Box::new(SqliteSession {
            pool: self.pool.clone(),
            mode,
            tx: None,
        })
    }
}

#[async_trait]
impl CustomerStore for SqliteStore {
    async fn begin(&self) -> Result<Box<dyn CustomerRepository>, AppError> {
        Ok(self.session(TxMode::Deferred))
    }

    async fn begin_write(&self) -> Result<Box<dyn CustomerRepository>, AppError> {
        Ok(self.session(TxMode::Immediate))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TxMode {
    Deferred,
    /// Reserve the write lock at BEGIN. A deferred transaction that reads and
    /// then writes fails with SQLITE_BUSY_SNAPSHOT if another writer committed
    /// since its read; an immediate one waits on the busy timeout instead.
    Immediate,
}

/// Transaction is opened on first use and reopened after each `save`.
pub(crate) struct SqliteSession {
    pool: SqlitePool,
    mode: TxMode,
    tx: Option<Transaction<'static, Sqlite>>,
}

impl SqliteSession {
    async fn conn(&mut self) -> Result<&mut SqliteConnection, AppError> {
        let tx = match self.tx.take() {
            Some(tx) => tx,
            None => match self.mode {
                TxMode::Deferred => self.pool.begin().await?,
                TxMode::Immediate => self.pool.begin_with("BEGIN IMMEDIATE").await?,
            },
        };
        Ok(&mut **self.tx.insert(tx))
    }
}

#[async_trait]
impl CustomerRepository for SqliteSession {
    async fn list(&mut self) -> Result<Vec<Customer>, AppError> {
        let sql = format!("{} ORDER BY ID", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let conn = self.conn().await?;
        let rows = sqlx::query(&sql).fetch_all(&mut *conn).await?;
        rows.into_iter().map(row_to_customer).collect()
    }

    async fn find(&mut self, id: i64) -> Result<Option<Customer>, AppError> {
        let sql = format!("{} WHERE ID = ?", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let conn = self.conn().await?;
        let row = sqlx::query(&sql).bind(id).fetch_optional(&mut *conn).await?;
        row.map(row_to_customer).transpose()
    }

    async fn add(&mut self, input: CustomerInput) -> Result<Customer, AppError> {
        let conn = self.conn().await?;
        let result = sqlx::query(
            "INSERT INTO Customers (FirstName, Surname, Age, Secret) VALUES (?, ?, ?, ?)",
        )
        .bind(&input.first_name)
        .bind(&input.surname)
        .bind(input.age)
        .bind(&input.secret)
        .execute(&mut *conn)
        .await?;
        let id = result.last_insert_rowid();
        tracing::debug!(id, "staged insert");
        Ok(Customer::from_input(id, input))
    }

    async fn replace(&mut self, customer: &Customer) -> Result<(), AppError> {
        let conn = self.conn().await?;
        let result = sqlx::query(
            "UPDATE Customers SET FirstName = ?, Surname = ?, Age = ?, Secret = ? WHERE ID = ?",
        )
        .bind(&customer.first_name)
        .bind(&customer.surname)
        .bind(customer.age)
        .bind(&customer.secret)
        .bind(customer.id)
        .execute(&mut *conn)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(customer.id.to_string()));
        }
        Ok(())
    }

    async fn remove(&mut self, id: i64) -> Result<(), AppError> {
        let conn = self.conn().await?;
        let result = sqlx::query("DELETE FROM Customers WHERE ID = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn save(&mut self) -> Result<(), AppError> {
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
        }
        Ok(())
    }
}

fn row_to_customer(row: SqliteRow) -> Result<Customer, AppError> {
    Ok(Customer {
        id: row.try_get("ID")?,
        first_name: row.try_get("FirstName")?,
        surname: row.try_get("Surname")?,
        age: row.try_get("Age")?,
        secret: row.try_get("Secret")?,
    })
}
