use std::process;

use log::{error, info};

use fts_seed::config::SeedConfig;
use fts_seed::databases::postgres::PostgreSQL;
use fts_seed::driver::run_seed;
use fts_seed::seed::corpus::Corpus;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match SeedConfig::load() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    let corpus = match Corpus::load(config.corpus_path.as_deref()) {
        Ok(corpus) => corpus,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    info!(
        "seeding {} documents of at least {} chars into {}",
        config.document_count, config.document_size, config.dbname
    );

    let mut db = PostgreSQL::new(&config);
    match run_seed(&mut db, &config, &corpus).await {
        Ok(summary) => {
            info!(
                "done: {} documents seeded ({} document rows and {} index rows from earlier runs removed)",
                summary.inserted, summary.deleted.document_rows, summary.deleted.index_rows
            );
        }
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
