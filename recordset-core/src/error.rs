use thiserror::Error;

/// Errors raised while populating a record from a result row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HydrateError {
    /// Strict hydration found no value for a registered column
    #[error("Missing column '{column}' in result row")]
    MissingColumn { column: String },

    /// The stored value cannot be converted into the field's type
    #[error("Column '{column}': expected {expected}, found {found}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The stored integer does not fit the field's type
    #[error("Column '{column}': value {value} out of range for {target}")]
    OutOfRange {
        column: String,
        value: i64,
        target: &'static str,
    },
}

impl HydrateError {
    pub fn missing(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// The column the error refers to.
    pub fn column(&self) -> &str {
        match self {
            Self::MissingColumn { column }
            | Self::TypeMismatch { column, .. }
            | Self::OutOfRange { column, .. } => column,
        }
    }
}

/// Errors found when validating a column registry at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Registry has an empty table name")]
    EmptyTable,

    #[error("Registry for table '{0}' declares no columns")]
    NoColumns(String),

    /// Table or column name is not a plain SQL identifier
    #[error("Invalid identifier '{0}'")]
    InvalidIdentifier(String),

    #[error("Column '{column}' declared twice in table '{table}'")]
    DuplicateColumn { table: String, column: String },
}
