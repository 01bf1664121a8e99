use recordset_core::{Registry, RegistryError};

static USERS: Registry = Registry::new("users", &["id", "status", "created_at"]);

#[test]
fn resolve_maps_properties_to_columns() {
    assert_eq!(USERS.resolve("status"), Some("status"));
    assert_eq!(USERS.resolve("createdAt"), Some("created_at"));
    assert_eq!(USERS.resolve("created_at"), Some("created_at"));
}

#[test]
fn resolve_rejects_unknown_properties() {
    assert_eq!(USERS.resolve("bogus"), None);
    assert_eq!(USERS.resolve("updatedAt"), None);
}

#[test]
fn select_query_lists_registered_columns() {
    assert_eq!(
        USERS.select_query(),
        r#"SELECT "id", "status", "created_at" FROM "users""#
    );
}

#[test]
fn valid_registry_passes() {
    assert_eq!(USERS.validate(), Ok(()));
}

#[test]
fn empty_table_rejected() {
    let registry = Registry::new("", &["id"]);
    assert_eq!(registry.validate(), Err(RegistryError::EmptyTable));
}

#[test]
fn missing_columns_rejected() {
    let registry = Registry::new("users", &[]);
    assert_eq!(
        registry.validate(),
        Err(RegistryError::NoColumns("users".to_string()))
    );
}

#[test]
fn invalid_identifiers_rejected() {
    let registry = Registry::new("users", &["id", "name; DROP TABLE users"]);
    assert!(matches!(
        registry.validate(),
        Err(RegistryError::InvalidIdentifier(_))
    ));

    let registry = Registry::new("1users", &["id"]);
    assert_eq!(
        registry.validate(),
        Err(RegistryError::InvalidIdentifier("1users".to_string()))
    );
}

#[test]
fn duplicate_columns_rejected() {
    let registry = Registry::new("users", &["id", "status", "id"]);
    assert_eq!(
        registry.validate(),
        Err(RegistryError::DuplicateColumn {
            table: "users".to_string(),
            column: "id".to_string(),
        })
    );
}

#[test]
fn contains_checks_physical_names() {
    assert!(USERS.contains("created_at"));
    assert!(!USERS.contains("createdAt"));
    assert_eq!(USERS.table(), "users");
    assert_eq!(USERS.columns().len(), 3);
}

#[test]
fn resolve_finds_columns_with_digits() {
    static ADDRESSES: Registry = Registry::new("addresses", &["id", "line1", "line2", "sha1_hash"]);
    assert!(ADDRESSES.validate().is_ok());
    assert_eq!(ADDRESSES.resolve("line1"), Some("line1"));
    assert_eq!(ADDRESSES.resolve("line2"), Some("line2"));
    assert_eq!(ADDRESSES.resolve("sha1Hash"), Some("sha1_hash"));
}
