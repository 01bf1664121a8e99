//! Naming convention tying collections to records and properties to columns.
//!
//! A collection is named after its record with a fixed suffix
//! (`User` → `UserCollection`), and logical property names are written in
//! camelCase while physical columns are snake_case (`createdAt` → `created_at`).

use convert_case::{Boundary, Case, Casing};

/// Word boundaries in a property name. Digits stay attached to the word
/// they follow, so `line1` names the `line1` column.
const PROPERTY_BOUNDARIES: [Boundary; 4] = [
    Boundary::Underscore,
    Boundary::LowerUpper,
    Boundary::DigitUpper,
    Boundary::Acronym,
];

/// Suffix appended to a record name to form its collection name.
pub const COLLECTION_SUFFIX: &str = "Collection";

/// Collection name for a record name.
///
/// ```
/// use recordset_core::naming::collection_name;
///
/// assert_eq!(collection_name("User"), "UserCollection");
/// ```
pub fn collection_name(record: &str) -> String {
    format!("{record}{COLLECTION_SUFFIX}")
}

/// Record name for a collection name, or `None` if the name does not follow
/// the convention.
///
/// ```
/// use recordset_core::naming::record_name;
///
/// assert_eq!(record_name("UserCollection"), Some("User"));
/// assert_eq!(record_name("User"), None);
/// assert_eq!(record_name("Collection"), None);
/// ```
pub fn record_name(collection: &str) -> Option<&str> {
    collection
        .strip_suffix(COLLECTION_SUFFIX)
        .filter(|name| !name.is_empty())
}

/// Physical column name for a logical property name.
///
/// ```
/// use recordset_core::naming::column_name;
///
/// assert_eq!(column_name("createdAt"), "created_at");
/// assert_eq!(column_name("status"), "status");
/// assert_eq!(column_name("addressLine2"), "address_line2");
/// ```
pub fn column_name(property: &str) -> String {
    property
        .set_boundaries(&PROPERTY_BOUNDARIES)
        .to_case(Case::Snake)
}
