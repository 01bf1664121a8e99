use recordset_core::{HydrateError, RegistryError};
use thiserror::Error;

/// Errors from building, executing or hydrating a collection query.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Hydration error: {0}")]
    Hydrate(#[from] HydrateError),
    #[error("No connection supplied and no default connection installed")]
    NoDefaultConnection,
    #[error("Default connection unavailable: a previous holder panicked")]
    DefaultUnavailable,
}

/// Errors from opening a database or checking it against a registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("Table '{0}' does not exist")]
    MissingTable(String),
    #[error("Column '{column}' not found in table '{table}'")]
    MissingColumn { table: String, column: String },
    #[error("Config error: {0}")]
    Config(String),
}
