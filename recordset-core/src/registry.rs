//! Column registries: the table and columns a record type maps to.

use crate::error::RegistryError;
use crate::naming::column_name;

/// Table name and registered columns for one record type.
///
/// Registries are declared as `static` data next to the record they
/// describe and checked once with [`Registry::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registry {
    table: &'static str,
    columns: &'static [&'static str],
}

impl Registry {
    pub const fn new(table: &'static str, columns: &'static [&'static str]) -> Self {
        Self { table, columns }
    }

    pub const fn table(&self) -> &'static str {
        self.table
    }

    pub const fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| *c == column)
    }

    /// Map a logical property name to its registered column.
    ///
    /// Returns `None` for properties with no registered column.
    pub fn resolve(&self, property: &str) -> Option<&'static str> {
        let column = column_name(property);
        self.columns.iter().copied().find(|c| *c == column)
    }

    /// Base `SELECT` for the record, without WHERE/ORDER BY/LIMIT.
    pub fn select_query(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(|c| quote_identifier(c))
            .collect::<Vec<_>>()
            .join(", ");
        format!("SELECT {columns} FROM {}", quote_identifier(self.table))
    }

    /// Check the registry is usable for query building.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.table.is_empty() {
            return Err(RegistryError::EmptyTable);
        }
        if !is_identifier(self.table) {
            return Err(RegistryError::InvalidIdentifier(self.table.to_string()));
        }
        if self.columns.is_empty() {
            return Err(RegistryError::NoColumns(self.table.to_string()));
        }
        for (i, column) in self.columns.iter().enumerate() {
            if !is_identifier(column) {
                return Err(RegistryError::InvalidIdentifier((*column).to_string()));
            }
            if self.columns[..i].contains(column) {
                return Err(RegistryError::DuplicateColumn {
                    table: self.table.to_string(),
                    column: (*column).to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Quote a registry identifier for interpolation into SQL.
///
/// Registry identifiers are plain names (see [`Registry::validate`]), so no
/// escaping is applied.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{name}\"")
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
