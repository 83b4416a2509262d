use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SeedError;
use crate::seed::document::FormKey;

/// Environment variable naming an optional JSON config file. Without it the
/// compiled-in defaults are used.
pub const CONFIG_ENV_VAR: &str = "FTS_SEED_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,

    /// Logical key the seeded rows are filed under. The cleanup step deletes
    /// only rows matching this key.
    pub app: String,
    pub form: String,
    pub form_version: i32,

    pub document_count: usize,
    /// Minimum character length of each generated document body.
    pub document_size: usize,

    /// Whitespace-separated word file; the built-in corpus when absent.
    pub corpus_path: Option<PathBuf>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            host: "localhost".to_string(),
            port: 5432,
            dbname: "benchmark".to_string(),
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            app: "benchmark".to_string(),
            form: "fulltext".to_string(),
            form_version: 1,
            document_count: 3000,
            document_size: 1024,
            corpus_path: None,
        }
    }
}

impl SeedConfig {
    /// Defaults, overridden by the JSON file named in `FTS_SEED_CONFIG` when
    /// that variable is set.
    pub fn load() -> Result<Self, SeedError> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Fields absent from the file keep their default values.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let raw = fs::read_to_string(path).map_err(|source| SeedError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| SeedError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn form_key(&self) -> FormKey {
        FormKey {
            app: self.app.clone(),
            form: self.form.clone(),
            form_version: self.form_version,
        }
    }

    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={}",
            self.host, self.port, self.user, self.password, self.dbname
        )
    }
}
