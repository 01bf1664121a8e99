//! Opening databases and checking registries against them.

use recordset_core::Registry;
use rusqlite::Connection;

use crate::config::DbConfig;
use crate::error::SchemaError;

/// Open or create the database described by `config` and apply its pragmas.
pub fn open_database(config: &DbConfig) -> Result<Connection, SchemaError> {
    let conn = Connection::open(&config.path)?;
    configure(&conn, config)?;
    Ok(conn)
}

/// Open an in-memory database. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

fn configure(conn: &Connection, config: &DbConfig) -> Result<(), SchemaError> {
    let foreign_keys = if config.foreign_keys { "ON" } else { "OFF" };
    conn.execute_batch(&format!("PRAGMA foreign_keys={foreign_keys};"))?;

    if let Some(mode) = &config.journal_mode {
        if !mode.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(SchemaError::Config(format!("invalid journal_mode '{mode}'")));
        }
        conn.execute_batch(&format!("PRAGMA journal_mode={mode};"))?;
    }

    if let Some(ms) = config.busy_timeout_ms {
        conn.busy_timeout(std::time::Duration::from_millis(ms))?;
    }

    Ok(())
}

/// Check that a registry is valid and every registered column exists.
///
/// Meant to run once at startup for each record type, so that queries never
/// reference columns the table lacks.
pub fn verify_registry(conn: &Connection, registry: &Registry) -> Result<(), SchemaError> {
    registry.validate()?;

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let existing = stmt
        .query_map([registry.table()], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    if existing.is_empty() {
        return Err(SchemaError::MissingTable(registry.table().to_string()));
    }

    for column in registry.columns() {
        if !existing.iter().any(|name| name == column) {
            return Err(SchemaError::MissingColumn {
                table: registry.table().to_string(),
                column: (*column).to_string(),
            });
        }
    }

    log::debug!(
        "verified registry for '{}' ({} columns)",
        registry.table(),
        registry.columns().len()
    );
    Ok(())
}
