use async_trait::async_trait;
use thiserror::Error;

use crate::model::employee::{Employee, EmployeeUpdate, NewEmployee};

pub mod mongo;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("employee not found")]
    NotFound,

    #[error("validation failed: {0}")]
    Validation(String),

    // Distinct from `Database`; the HTTP layer still answers 500 for both.
    #[error("malformed employee id: {0}")]
    MalformedId(#[from] bson::oid::Error),

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Data-access seam for the employee collection. Object-safe so the app runs
/// against MongoDB while tests inject an in-memory implementation.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All records, in store-native order.
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Employee, StoreError>;

    /// Validates the record, assigns id and both timestamps, and returns the
    /// stored result.
    async fn insert(&self, new: NewEmployee) -> Result<Employee, StoreError>;

    /// Applies the provided fields, refreshes `updated_at`, and returns the
    /// post-update record.
    async fn update_by_id(
        &self,
        id: &str,
        changes: EmployeeUpdate,
    ) -> Result<Employee, StoreError>;

    /// Removes the record and returns its former contents.
    async fn delete_by_id(&self, id: &str) -> Result<Employee, StoreError>;
}
