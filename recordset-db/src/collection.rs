//! Batch retrieval over a record type.
//!
//! A collection is a stateless companion to a record type. Implementing
//! [`Collection`] is all a data model needs to get `get_all`, `get_with`,
//! `get_one` and `get_collection`:
//!
//! ```
//! use recordset_core::{HydrateError, Record, Registry, Row};
//! use recordset_db::{Collection, open_memory};
//!
//! static USERS: Registry = Registry::new("users", &["id", "status"]);
//!
//! struct User {
//!     id: i64,
//!     status: String,
//! }
//!
//! impl Record for User {
//!     const NAME: &'static str = "User";
//!
//!     fn registry() -> &'static Registry {
//!         &USERS
//!     }
//!
//!     fn hydrate(row: &Row, strict: bool) -> Result<Self, HydrateError> {
//!         Ok(Self {
//!             id: row.read_or_default("id", strict)?,
//!             status: row.read_or_default("status", strict)?,
//!         })
//!     }
//! }
//!
//! struct UserCollection;
//!
//! impl Collection for UserCollection {
//!     type Record = User;
//! }
//!
//! let conn = open_memory().unwrap();
//! conn.execute_batch("CREATE TABLE users (id INTEGER PRIMARY KEY, status TEXT NOT NULL);
//!                     INSERT INTO users VALUES (1, 'active'), (2, 'inactive');")
//!     .unwrap();
//!
//! let users = UserCollection::get_all(Some(&conn)).unwrap();
//! assert_eq!(users.len(), 2);
//! assert_eq!(UserCollection::name(), "UserCollection");
//! ```

use recordset_core::{Criteria, Record, naming};

use crate::connection::Connection;
use crate::default::with_connection;
use crate::error::QueryError;
use crate::query::{build_select, compose, order_clause, where_clause, window_clause};

/// Companion type exposing batch queries over `Self::Record`.
///
/// Every method takes an optional connection; `None` uses the default
/// connection (see [`crate::default`]).
pub trait Collection {
    type Record: Record;

    /// Collection name derived from the record name.
    fn name() -> String {
        naming::collection_name(<Self::Record as Record>::NAME)
    }

    /// Every record, in storage order.
    fn get_all(conn: Option<&dyn Connection>) -> Result<Vec<Self::Record>, QueryError> {
        get_all::<Self::Record>(conn)
    }

    /// Records matching `criteria`. Empty filters return no records.
    fn get_with(
        conn: Option<&dyn Connection>,
        criteria: &Criteria,
    ) -> Result<Vec<Self::Record>, QueryError> {
        get_with::<Self::Record>(conn, criteria)
    }

    /// The single record matching `criteria`, see [`get_one`].
    fn get_one(
        conn: Option<&dyn Connection>,
        criteria: &Criteria,
        offset: u64,
        coalesce: bool,
    ) -> Result<Option<Self::Record>, QueryError> {
        get_one::<Self::Record>(conn, criteria, offset, coalesce)
    }

    /// Records hydrated from an arbitrary query over the record's table.
    fn get_collection(
        conn: Option<&dyn Connection>,
        sql: &str,
    ) -> Result<Vec<Self::Record>, QueryError> {
        get_collection::<Self::Record>(conn, sql)
    }
}

/// Every `R`, unfiltered, in storage order.
pub fn get_all<R: Record>(conn: Option<&dyn Connection>) -> Result<Vec<R>, QueryError> {
    with_connection(conn, |conn| fetch(conn, &R::select_query()))
}

/// Every `R` matching `criteria`.
///
/// Empty filters mean "no criteria", not "match everything": nothing is
/// queried and no records are returned. Use [`get_all`] for the latter.
/// Filters and order names that do not resolve to registered columns are
/// ignored, so criteria may end up selecting every row.
pub fn get_with<R: Record>(
    conn: Option<&dyn Connection>,
    criteria: &Criteria,
) -> Result<Vec<R>, QueryError> {
    if criteria.filters.is_empty() {
        log::debug!("get_with on '{}' without filters", R::registry().table());
        return Ok(Vec::new());
    }

    with_connection(conn, |conn| {
        let sql = build_select::<R>(conn, criteria);
        fetch(conn, &sql)
    })
}

/// The `R` matching `criteria` at `offset`, in `criteria`'s order.
///
/// With `coalesce`, the first match is returned however many rows match.
/// Without it, `None` is returned unless exactly one row matches, which lets
/// callers detect non-unique matches. `criteria.limit` is ignored.
pub fn get_one<R: Record>(
    conn: Option<&dyn Connection>,
    criteria: &Criteria,
    offset: u64,
    coalesce: bool,
) -> Result<Option<R>, QueryError> {
    if criteria.filters.is_empty() {
        return Ok(None);
    }

    // One extra row is enough to tell a unique match from an ambiguous one.
    let count = if coalesce { 1 } else { 2 };

    let mut records: Vec<R> = with_connection(conn, |conn| {
        let registry = R::registry();
        let sql = compose(
            &R::select_query(),
            where_clause(registry, conn, &criteria.filters).as_deref(),
            order_clause(registry, &criteria.order, criteria.direction).as_deref(),
            Some(window_clause(count, offset).as_str()),
        );
        fetch(conn, &sql)
    })?;

    if records.len() == 1 || (coalesce && !records.is_empty()) {
        Ok(Some(records.swap_remove(0)))
    } else {
        Ok(None)
    }
}

/// Run `sql` and strictly hydrate one `R` per row.
pub fn get_collection<R: Record>(
    conn: Option<&dyn Connection>,
    sql: &str,
) -> Result<Vec<R>, QueryError> {
    with_connection(conn, |conn| fetch(conn, sql))
}

fn fetch<R: Record>(conn: &dyn Connection, sql: &str) -> Result<Vec<R>, QueryError> {
    log::debug!("{sql}");
    let rows = conn.query(sql)?;
    log::debug!("fetched {} {} row(s)", rows.len(), R::NAME);
    rows.iter()
        .map(|row| R::hydrate(row, true).map_err(QueryError::from))
        .collect()
}
