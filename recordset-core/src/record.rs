use crate::error::HydrateError;
use crate::registry::Registry;
use crate::row::Row;

/// A type mapped to one table row.
///
/// Implementors declare their registry as static data and build themselves
/// from fetched rows. Each hydrated row produces a new, independently owned
/// value.
///
/// ```
/// use recordset_core::{HydrateError, Record, Registry, Row};
///
/// static USERS: Registry = Registry::new("users", &["id", "status"]);
///
/// struct User {
///     id: i64,
///     status: String,
/// }
///
/// impl Record for User {
///     const NAME: &'static str = "User";
///
///     fn registry() -> &'static Registry {
///         &USERS
///     }
///
///     fn hydrate(row: &Row, strict: bool) -> Result<Self, HydrateError> {
///         Ok(Self {
///             id: row.read_or_default("id", strict)?,
///             status: row.read_or_default("status", strict)?,
///         })
///     }
/// }
///
/// let user = User::hydrate(&Row::new().with("id", 7).with("status", "active"), true).unwrap();
/// assert_eq!(user.id, 7);
/// assert_eq!(User::select_query(), r#"SELECT "id", "status" FROM "users""#);
/// ```
pub trait Record: Sized {
    /// Type name, used to derive the collection name.
    const NAME: &'static str;

    fn registry() -> &'static Registry;

    /// Base `SELECT` without WHERE/ORDER BY/LIMIT.
    fn select_query() -> String {
        Self::registry().select_query()
    }

    /// Populate a new record from a row.
    ///
    /// `strict` is set for rows fetched through a collection: every
    /// registered column is expected to be present.
    fn hydrate(row: &Row, strict: bool) -> Result<Self, HydrateError>;
}
