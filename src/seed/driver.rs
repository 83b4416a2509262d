use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SeedConfig;
use crate::databases::database::{Database, DeletedRows};
use crate::error::SeedError;
use crate::seed::corpus::Corpus;
use crate::seed::document::SeedDocument;

#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    pub deleted: DeletedRows,
    pub inserted: usize,
}

/// Run the whole seed: connect, delete rows left by previous runs under the
/// configured key, then insert and commit one document per iteration.
/// Disconnects on the success path and on every failure path.
pub async fn run_seed(
    db: &mut dyn Database,
    config: &SeedConfig,
    corpus: &Corpus,
) -> Result<SeedSummary, SeedError> {
    db.connect().await?;
    info!("connected to {}", db.name());

    let result = seed_documents(db, config, corpus).await;

    let closed = db.disconnect().await;
    match result {
        Ok(summary) => {
            closed?;
            Ok(summary)
        }
        Err(err) => {
            if let Err(close_err) = closed {
                warn!("disconnect after failed run: {}", close_err);
            }
            Err(err)
        }
    }
}

async fn seed_documents(
    db: &mut dyn Database,
    config: &SeedConfig,
    corpus: &Corpus,
) -> Result<SeedSummary, SeedError> {
    let key = config.form_key();

    let deleted = db.delete_documents(&key).await?;
    info!(
        "removed {} document rows and {} index rows under {}/{} v{}",
        deleted.document_rows, deleted.index_rows, key.app, key.form, key.form_version
    );

    let mut rng = StdRng::from_entropy();
    for sequence in 1..=config.document_count {
        let document = SeedDocument::synthesize(&key, config.document_size, corpus, &mut rng);
        let data_id = db.insert_document(&document).await?;
        debug!(
            "committed document {}/{} as data_id {}",
            sequence, config.document_count, data_id
        );
    }

    Ok(SeedSummary {
        deleted,
        inserted: config.document_count,
    })
}
