use async_trait::async_trait;
use log::warn;
use tokio_postgres::{Client, NoTls, Transaction};

use super::database::{Database, DeletedRows};
use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::seed::document::{FormKey, SeedDocument};

const INSERT_DOCUMENT: &str = "INSERT INTO document_data \
     (created, last_modified, app, form, form_version, document_id, deleted, draft, xml) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9::text::xml) \
     RETURNING data_id";

const INSERT_INDEX: &str = "INSERT INTO document_index \
     (data_id, created, last_modified, app, form, form_version, document_id, draft) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8)";

pub struct PostgreSQL {
    params: String,
    client: Option<Client>,
    connection: Option<tokio::task::JoinHandle<()>>,
}

#[async_trait]
impl Database for PostgreSQL {
    fn name(&self) -> &'static str {
        "PostgreSQL"
    }

    async fn connect(&mut self) -> Result<(), SeedError> {
        let (client, connection) = tokio_postgres::connect(&self.params, NoTls).await?;

        let connection_task = tokio::spawn(async move {
            if let Err(e) = connection.await {
                eprintln!("PostgreSQL connection error: {}", e);
            }
        });

        self.client = Some(client);
        self.connection = Some(connection_task);
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), SeedError> {
        // Dropping the client closes the session; the driver task ends with it.
        self.client.take();
        if let Some(handle) = self.connection.take() {
            handle.abort();
        }
        Ok(())
    }

    async fn delete_documents(&mut self, key: &FormKey) -> Result<DeletedRows, SeedError> {
        let client = self.client.as_mut().ok_or(SeedError::NotConnected)?;

        let index_rows = client
            .execute(
                "DELETE FROM document_index \
                 WHERE app = $1 AND form = $2 AND form_version = $3",
                &[&key.app, &key.form, &key.form_version],
            )
            .await?;
        let document_rows = client
            .execute(
                "DELETE FROM document_data \
                 WHERE app = $1 AND form = $2 AND form_version = $3",
                &[&key.app, &key.form, &key.form_version],
            )
            .await?;

        Ok(DeletedRows {
            document_rows,
            index_rows,
        })
    }

    async fn insert_document(&mut self, document: &SeedDocument) -> Result<i64, SeedError> {
        let client = self.client.as_mut().ok_or(SeedError::NotConnected)?;

        let transaction = client.transaction().await?;
        match Self::insert_rows(&transaction, document).await {
            Ok(data_id) => {
                transaction.commit().await?;
                Ok(data_id)
            }
            Err(err) => {
                if let Err(rollback_err) = transaction.rollback().await {
                    warn!("rollback after failed insert also failed: {}", rollback_err);
                }
                Err(err.into())
            }
        }
    }
}

impl PostgreSQL {
    pub fn new(config: &SeedConfig) -> Self {
        PostgreSQL {
            params: config.connection_string(),
            client: None,
            connection: None,
        }
    }

    async fn insert_rows(
        transaction: &Transaction<'_>,
        document: &SeedDocument,
    ) -> Result<i64, tokio_postgres::Error> {
        let row = transaction
            .query_one(
                INSERT_DOCUMENT,
                &[
                    &document.created,
                    &document.last_modified,
                    &document.key.app,
                    &document.key.form,
                    &document.key.form_version,
                    &document.document_id,
                    &document.deleted,
                    &document.draft,
                    &document.xml,
                ],
            )
            .await?;
        let data_id: i64 = row.get(0);

        transaction
            .execute(
                INSERT_INDEX,
                &[
                    &data_id,
                    &document.created,
                    &document.last_modified,
                    &document.key.app,
                    &document.key.form,
                    &document.key.form_version,
                    &document.document_id,
                    &document.draft,
                ],
            )
            .await?;

        Ok(data_id)
    }
}
