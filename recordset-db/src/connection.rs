//! The connection contract the query builder and executor run against.

use std::fmt::Write;

use recordset_core::{Row, Value};
use rusqlite::types::ValueRef;

use crate::error::QueryError;

/// A live database handle, borrowed for the duration of one query.
///
/// Every value interpolated into generated SQL goes through
/// [`Connection::quote`].
pub trait Connection {
    /// Render `value` as a safely escaped SQL literal.
    fn quote(&self, value: &Value) -> String;

    /// Execute `sql` and fetch every row.
    fn query(&self, sql: &str) -> Result<Vec<Row>, QueryError>;
}

impl Connection for rusqlite::Connection {
    fn quote(&self, value: &Value) -> String {
        quote_literal(value)
    }

    fn query(&self, sql: &str) -> Result<Vec<Row>, QueryError> {
        let mut stmt = self.prepare(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let mut rows = stmt.query([])?;
        let mut fetched = Vec::new();
        while let Some(row) = rows.next()? {
            let mut record = Row::with_capacity(columns.len());
            for (i, name) in columns.iter().enumerate() {
                record.push(name.as_str(), value_from_sql(row.get_ref(i)?));
            }
            fetched.push(record);
        }
        Ok(fetched)
    }
}

/// SQLite literal for a value.
///
/// Text doubles embedded single quotes. SQLite ends a quoted literal at a NUL
/// byte, so text containing one is rendered as a hex blob cast to TEXT.
/// Non-finite reals have no literal form and render as `NULL`.
pub fn quote_literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Real(r) if r.is_finite() => format!("{r:?}"),
        Value::Real(_) => "NULL".to_string(),
        Value::Text(s) if s.contains('\0') => {
            format!("CAST({} AS TEXT)", hex_literal(s.as_bytes()))
        }
        Value::Text(s) => format!("'{}'", s.replace('\'', "''")),
        Value::Blob(bytes) => hex_literal(bytes),
    }
}

fn hex_literal(bytes: &[u8]) -> String {
    let mut literal = String::with_capacity(bytes.len() * 2 + 3);
    literal.push_str("X'");
    for b in bytes {
        let _ = write!(literal, "{b:02X}");
    }
    literal.push('\'');
    literal
}

fn value_from_sql(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(n) => Value::Integer(n),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    }
}
