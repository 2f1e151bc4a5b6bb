//! # activerow
//!
//! A minimal Active Record data-mapping layer over a pluggable SQL
//! connection.
//!
//! ## Features
//!
//! - **Record lifecycle**: construct, populate from a row, persist via
//!   insert/update, remove via soft or permanent delete
//! - **Declarative queries**: a [`ConditionMap`] describes the filter,
//!   binds, and options; [`QueryBuilder`] renders parameterized SQL for
//!   SELECT / INSERT / UPDATE / DELETE
//! - **Soft deletes**: tables with a `deleted_at` column are filtered to
//!   live rows automatically; deleted rows stay reachable on request
//! - **Explicit injection**: the connection is borrowed from its external
//!   owner — no global state, no service locator
//! - **Safe defaults**: every value binds through a named placeholder,
//!   including the primary-key filter on UPDATE/DELETE
//!
//! ## Example
//!
//! ```ignore
//! use activerow::{ConditionMap, Record, Repository};
//!
//! let repo = Repository::new(&connection);
//!
//! // Fetch live users named Ann.
//! let users: Vec<User> = repo.fetch_all(
//!     ConditionMap::from("name = :name").bind("name", "Ann"),
//! )?;
//!
//! // Insert a new user; the assigned id is written back.
//! let mut user = User { name: Some("Ann".into()), ..User::default() };
//! repo.save(&mut user)?;
//!
//! // Soft-delete, then fetch it among the deleted rows.
//! repo.delete(&mut user)?;
//! let gone = repo.fetch_one::<User>(
//!     ConditionMap::from("id = :id").bind("id", user.id).deleted(true),
//! )?;
//! ```
//!
//! Connection management, pooling, and transactions belong to the injected
//! [`Connection`] implementation; this crate only builds statements and
//! orchestrates the record lifecycle.

pub mod builder;
pub mod condition;
pub mod connection;
pub mod error;
pub mod ident;
pub mod record;
pub mod value;

pub use builder::{QueryBuilder, StatementKind};
pub use condition::ConditionMap;
pub use connection::{ColumnDescriptor, Connection, Row, Statement, TableColumns};
pub use error::{OrmError, OrmResult};
pub use ident::Ident;
pub use record::{
    COLUMN_CREATED_AT, COLUMN_DELETED_AT, COLUMN_UPDATED_AT, Record, Repository, SaveOutcome,
};
pub use value::{Params, Value};
