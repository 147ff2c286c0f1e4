//! In-process store. Sessions stage changes locally and apply them under one lock on `save`.

use super::{CustomerRepository, CustomerStore};
use crate::error::AppError;
use crate::model::{Customer, CustomerInput};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    customers: BTreeMap<i64, Customer>,
    last_id: i64,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock(tables: &Mutex<Tables>) -> MutexGuard<'_, Tables> {
    tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn begin(&self) -> Result<Box<dyn CustomerRepository>, AppError> {
        Ok(Box::new(MemorySession {
            tables: Arc::clone(&self.tables),
            pending: Vec::new(),
        }))
    }

    async fn begin_write(&self) -> Result<Box<dyn CustomerRepository>, AppError> {
        self.begin().await
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[derive(Debug)]
enum Change {
    Upsert(Customer),
    Remove(i64),
}

pub struct MemorySession {
    tables: Arc<Mutex<Tables>>,
    pending: Vec<Change>,
}

impl MemorySession {
    /// Committed rows with this session's pending changes applied on top.
    fn view(&self) -> BTreeMap<i64, Customer> {
        let mut rows = lock(&self.tables).customers.clone();
        apply(&mut rows, &self.pending);
        rows
    }
}

fn apply<'a>(rows: &mut BTreeMap<i64, Customer>, changes: impl IntoIterator<Item = &'a Change>) {
    for change in changes {
        match change {
            Change::Upsert(c) => {
                rows.insert(c.id, c.clone());
            }
            Change::Remove(id) => {
                rows.remove(id);
            }
        }
    }
}

#[async_trait]
impl CustomerRepository for MemorySession {
    async fn list(&mut self) -> Result<Vec<Customer>, AppError> {
        Ok(self.view().into_values().collect())
    }

    async fn find(&mut self, id: i64) -> Result<Option<Customer>, AppError> {
        Ok(self.view().remove(&id))
    }

    async fn add(&mut self, input: CustomerInput) -> Result<Customer, AppError> {
        let id = {
            let mut tables = lock(&self.tables);
            tables.last_id += 1;
            tables.last_id
        };
        let customer = Customer::from_input(id, input);
        self.pending.push(Change::Upsert(customer.clone()));
        Ok(customer)
    }

    async fn replace(&mut self, customer: &Customer) -> Result<(), AppError> {
        if !self.view().contains_key(&customer.id) {
            return Err(AppError::NotFound(customer.id.to_string()));
        }
        self.pending.push(Change::Upsert(customer.clone()));
        Ok(())
    }

    async fn remove(&mut self, id: i64) -> Result<(), AppError> {
        if !self.view().contains_key(&id) {
            return Err(AppError::NotFound(id.to_string()));
        }
        self.pending.push(Change::Remove(id));
        Ok(())
    }

    async fn save(&mut self) -> Result<(), AppError> {
        let changes = std::mem::take(&mut self.pending);
        let mut tables = lock(&self.tables);
        apply(&mut tables.customers, &changes);
        Ok(())
    }
}
