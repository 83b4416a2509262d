use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Connection, statement, or commit failure against the store.
    #[error("database operation failed: {0}")]
    Database(String),

    #[error("word corpus {} could not be read: {source}", .path.display())]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word corpus contains no words")]
    CorpusEmpty,

    #[error("config file {} could not be read: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {} is not valid JSON: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("database operation failed: store is not connected")]
    NotConnected,
}

impl From<tokio_postgres::Error> for SeedError {
    fn from(err: tokio_postgres::Error) -> Self {
        SeedError::Database(err.to_string())
    }
}

impl SeedError {
    /// True for the one error kind the driver treats as a failed database
    /// operation, as opposed to a bad corpus or config.
    pub fn is_database(&self) -> bool {
        matches!(self, SeedError::Database(_) | SeedError::NotConnected)
    }
}
