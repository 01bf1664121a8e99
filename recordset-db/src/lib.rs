//! SQLite retrieval layer for record collections.
//!
//! Builds single `SELECT` statements from [`recordset_core::Criteria`],
//! executes them through the [`Connection`] contract and hydrates typed
//! records from the rows (via rusqlite with bundled feature).

pub mod collection;
pub mod config;
pub mod connection;
pub mod default;
pub mod error;
pub mod query;
pub mod schema;

pub use collection::{Collection, get_all, get_collection, get_one, get_with};
pub use config::DbConfig;
pub use connection::Connection;
pub use error::{QueryError, SchemaError};
pub use query::build_select;
pub use schema::{open_database, open_memory, verify_registry};
