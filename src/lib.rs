pub mod config;
pub mod databases;
pub mod error;
pub mod seed;

pub use databases::{database, postgres};
pub use seed::{corpus, driver, generator};
