//! Record data model shared by the retrieval layer.
//!
//! This crate defines records, their column registries, the naming convention
//! that ties collections to records and properties to columns, and the
//! filter/order/limit criteria callers build queries from. It has no database
//! dependency; `recordset-db` builds and executes SQL on top of these types.

pub mod criteria;
pub mod error;
pub mod naming;
pub mod record;
pub mod registry;
pub mod row;
pub mod value;

pub use criteria::{Criteria, Direction, Filter, Filters};
pub use error::{HydrateError, RegistryError};
pub use naming::{COLLECTION_SUFFIX, collection_name, column_name, record_name};
pub use record::Record;
pub use registry::Registry;
pub use row::{FromValue, Row};
pub use value::Value;
