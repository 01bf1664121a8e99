//! SQL composition for collection queries.
//!
//! A query is the record's base `SELECT` followed, in this fixed order, by an
//! optional WHERE, ORDER BY and LIMIT clause. Property and order names are
//! checked against the record's registry; anything unknown is dropped rather
//! than reported. Filter values are interpolated only through
//! [`Connection::quote`].

use recordset_core::registry::quote_identifier;
use recordset_core::{Criteria, Direction, Filter, Filters, Record, Registry, Value};

use crate::connection::Connection;

/// Compose the full statement selecting the `R` records matching `criteria`.
pub fn build_select<R: Record>(conn: &dyn Connection, criteria: &Criteria) -> String {
    let registry = R::registry();
    compose(
        &R::select_query(),
        where_clause(registry, conn, &criteria.filters).as_deref(),
        order_clause(registry, &criteria.order, criteria.direction).as_deref(),
        limit_clause(&criteria.limit).as_deref(),
    )
}

/// Concatenate a base query with optional clauses, each of which carries its
/// own leading space.
pub fn compose(
    base: &str,
    where_: Option<&str>,
    order: Option<&str>,
    limit: Option<&str>,
) -> String {
    let mut sql = String::from(base);
    for clause in [where_, order, limit].into_iter().flatten() {
        sql.push_str(clause);
    }
    sql
}

// ── WHERE ───────────────────────────────────────────────────────────────────

/// ` WHERE ...` over the honoured filters, or `None` if none validate.
///
/// When two properties resolve to the same column the later filter wins and
/// the column keeps its first position.
pub fn where_clause(
    registry: &Registry,
    conn: &dyn Connection,
    filters: &Filters,
) -> Option<String> {
    let mut columns: Vec<(&'static str, &Filter)> = Vec::new();
    for (property, filter) in filters.iter() {
        let Some(column) = registry.resolve(property) else {
            log::debug!(
                "dropping filter on '{property}': no such column in '{}'",
                registry.table()
            );
            continue;
        };
        match columns.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = filter,
            None => columns.push((column, filter)),
        }
    }

    let conditions: Vec<String> = columns
        .into_iter()
        .filter_map(|(column, filter)| condition(conn, column, filter))
        .collect();

    if conditions.is_empty() {
        None
    } else {
        Some(format!(" WHERE {}", conditions.join(" AND ")))
    }
}

fn condition(conn: &dyn Connection, column: &str, filter: &Filter) -> Option<String> {
    let column = quote_identifier(column);
    match filter {
        Filter::Equals(value) => Some(equals(conn, &column, value)),
        Filter::OneOf(values) => match values.as_slice() {
            [] => {
                log::debug!("dropping empty membership filter on {column}");
                None
            }
            [value] => Some(equals(conn, &column, value)),
            values => {
                let list = values
                    .iter()
                    .map(|v| conn.quote(v))
                    .collect::<Vec<_>>()
                    .join(", ");
                Some(format!("{column} IN ({list})"))
            }
        },
    }
}

fn equals(conn: &dyn Connection, column: &str, value: &Value) -> String {
    format!("{column} = {}", conn.quote(value))
}

// ── ORDER BY ────────────────────────────────────────────────────────────────

/// ` ORDER BY ...` over the validated names, or `None` if none validate.
pub fn order_clause(registry: &Registry, order: &[String], direction: Direction) -> Option<String> {
    let columns: Vec<String> = order
        .iter()
        .filter_map(|property| {
            let column = registry.resolve(property);
            if column.is_none() {
                log::debug!(
                    "dropping order on '{property}': no such column in '{}'",
                    registry.table()
                );
            }
            column
        })
        .map(quote_identifier)
        .collect();

    if columns.is_empty() {
        None
    } else {
        Some(format!(" ORDER BY {} {}", columns.join(", "), direction.as_sql()))
    }
}

// ── LIMIT ───────────────────────────────────────────────────────────────────

/// ` LIMIT <first>[, <second>]` from positional bounds.
///
/// The bounds are rendered exactly as given, so two values follow SQLite's
/// comma form: the first skips rows and the second caps them. A malformed
/// first value drops the clause; a malformed second value is left out.
pub fn limit_clause(limit: &[Value]) -> Option<String> {
    let first = limit.first()?;
    let Some(first) = first.as_limit_bound() else {
        log::debug!("ignoring malformed limit value {first:?}");
        return None;
    };

    let mut clause = format!(" LIMIT {first}");
    if let Some(second) = limit.get(1) {
        match second.as_limit_bound() {
            Some(second) => clause.push_str(&format!(", {second}")),
            None => log::debug!("ignoring malformed limit value {second:?}"),
        }
    }
    Some(clause)
}

/// ` LIMIT <count> OFFSET <offset>`.
pub fn window_clause(count: u64, offset: u64) -> String {
    format!(" LIMIT {count} OFFSET {offset}")
}
