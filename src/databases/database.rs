use async_trait::async_trait;

use crate::error::SeedError;
use crate::seed::document::{FormKey, SeedDocument};

/// Rows removed by the cleanup step, per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletedRows {
    pub document_rows: u64,
    pub index_rows: u64,
}

#[async_trait]
pub trait Database {
    fn name(&self) -> &'static str;

    async fn connect(&mut self) -> Result<(), SeedError>;

    async fn disconnect(&mut self) -> Result<(), SeedError>;

    /// Delete every document and index row filed under `key`. Index rows go
    /// first so a reference never outlives its document row.
    async fn delete_documents(&mut self, key: &FormKey) -> Result<DeletedRows, SeedError>;

    /// Insert the document row, read back its database-assigned surrogate id,
    /// and insert the index row referencing it, committed as one unit. A
    /// failure anywhere in the unit rolls the whole unit back.
    async fn insert_document(&mut self, document: &SeedDocument) -> Result<i64, SeedError>;
}
