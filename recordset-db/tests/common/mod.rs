#![allow(dead_code)]

use recordset_core::{HydrateError, Record, Registry, Row};
use recordset_db::{Collection, open_memory};

pub static USERS: Registry = Registry::new(
    "users",
    &["id", "status", "email", "created_at", "login_count"],
);

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub status: String,
    pub email: Option<String>,
    pub created_at: Option<String>,
    pub login_count: u32,
}

impl Record for User {
    const NAME: &'static str = "User";

    fn registry() -> &'static Registry {
        &USERS
    }

    fn hydrate(row: &Row, strict: bool) -> Result<Self, HydrateError> {
        Ok(Self {
            id: row.read("id")?,
            status: row.read_or_default("status", strict)?,
            email: row.read_or_default("email", strict)?,
            created_at: row.read_or_default("created_at", strict)?,
            login_count: row.read_or_default("login_count", strict)?,
        })
    }
}

pub struct UserCollection;

impl Collection for UserCollection {
    type Record = User;
}

const USERS_TABLE: &str = "CREATE TABLE users (
    id INTEGER PRIMARY KEY,
    status TEXT NOT NULL,
    email TEXT,
    created_at TEXT,
    login_count INTEGER NOT NULL DEFAULT 0
);";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The three-user fixture: 1 active, 2 inactive, 3 active.
pub fn setup_db() -> rusqlite::Connection {
    init_logging();
    let conn = open_memory().unwrap();
    conn.execute_batch(USERS_TABLE).unwrap();
    conn.execute_batch(
        "INSERT INTO users (id, status, email, created_at) VALUES
            (1, 'active', 'ada@example.com', '2024-01-01'),
            (2, 'inactive', NULL, '2024-02-01'),
            (3, 'active', 'grace@example.com', '2024-03-01');",
    )
    .unwrap();
    conn
}

/// Twelve users with ids 1..=12, alternating active/inactive.
pub fn setup_large_db() -> rusqlite::Connection {
    init_logging();
    let conn = open_memory().unwrap();
    conn.execute_batch(USERS_TABLE).unwrap();
    for id in 1..=12i64 {
        let status = if id % 2 == 1 { "active" } else { "inactive" };
        conn.execute(
            "INSERT INTO users (id, status) VALUES (?1, ?2)",
            rusqlite::params![id, status],
        )
        .unwrap();
    }
    conn
}

pub fn ids(users: &[User]) -> Vec<i64> {
    users.iter().map(|u| u.id).collect()
}

pub static ADDRESSES: Registry = Registry::new("addresses", &["id", "line1", "line2"]);

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: i64,
    pub line1: String,
    pub line2: Option<String>,
}

impl Record for Address {
    const NAME: &'static str = "Address";

    fn registry() -> &'static Registry {
        &ADDRESSES
    }

    fn hydrate(row: &Row, strict: bool) -> Result<Self, HydrateError> {
        Ok(Self {
            id: row.read("id")?,
            line1: row.read_or_default("line1", strict)?,
            line2: row.read_or_default("line2", strict)?,
        })
    }
}

pub struct AddressCollection;

impl Collection for AddressCollection {
    type Record = Address;
}

/// Three addresses: 1 `a`/`x`, 2 `b`/NULL, 3 `a`/`z`.
pub fn setup_addresses() -> rusqlite::Connection {
    init_logging();
    let conn = open_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE addresses (id INTEGER PRIMARY KEY, line1 TEXT NOT NULL, line2 TEXT);
         INSERT INTO addresses VALUES (1, 'a', 'x'), (2, 'b', NULL), (3, 'a', 'z');",
    )
    .unwrap();
    conn
}
