//! Process-wide default connection.
//!
//! Collection queries take an explicit connection. Passing `None` borrows the
//! default installed here instead, which top-level entry points set up with
//! [`init`] or [`install`] and release with [`teardown`].

use std::sync::Mutex;

use crate::config::DbConfig;
use crate::connection::Connection;
use crate::error::{QueryError, SchemaError};
use crate::schema::open_database;

static DEFAULT: Mutex<Option<rusqlite::Connection>> = Mutex::new(None);

/// Open the configured database and install it as the default connection.
pub fn init(config: &DbConfig) -> Result<(), SchemaError> {
    let conn = open_database(config)?;
    log::info!("default connection opened at {}", config.path.display());
    install(conn);
    Ok(())
}

/// Install `conn` as the default connection, returning the one it replaces.
pub fn install(conn: rusqlite::Connection) -> Option<rusqlite::Connection> {
    let mut slot = DEFAULT.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    log::info!("default connection installed");
    slot.replace(conn)
}

/// Remove the default connection and hand it back for closing.
pub fn teardown() -> Option<rusqlite::Connection> {
    let mut slot = DEFAULT.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let previous = slot.take();
    if previous.is_some() {
        log::info!("default connection torn down");
    }
    previous
}

pub fn is_installed() -> bool {
    DEFAULT.lock().is_ok_and(|slot| slot.is_some())
}

/// Run `f` against the default connection, holding it for the call.
pub fn with_default<T>(
    f: impl FnOnce(&dyn Connection) -> Result<T, QueryError>,
) -> Result<T, QueryError> {
    let slot = DEFAULT.lock().map_err(|_| QueryError::DefaultUnavailable)?;
    let conn = slot.as_ref().ok_or(QueryError::NoDefaultConnection)?;
    f(conn)
}

/// Run `f` against `conn`, or the default connection when `conn` is `None`.
pub fn with_connection<T>(
    conn: Option<&dyn Connection>,
    f: impl FnOnce(&dyn Connection) -> Result<T, QueryError>,
) -> Result<T, QueryError> {
    match conn {
        Some(conn) => f(conn),
        None => with_default(f),
    }
}
