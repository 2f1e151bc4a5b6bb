//! The database connection contract this crate executes through.
//!
//! activerow never owns a connection: the caller injects a borrowed handle
//! to an externally owned instance, and this crate only prepares statements,
//! reads column metadata, and asks for the last inserted identifier. Pooling,
//! transactions, timeouts, and driver specifics all live behind this seam.

use crate::error::OrmResult;
use crate::value::{Params, Value};
use serde::{Deserialize, Serialize};

/// Metadata for a single table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name as reported by the driver.
    pub name: String,
    /// Whether this column is the table's primary key.
    pub primary: bool,
}

impl ColumnDescriptor {
    /// Describe an ordinary column.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            primary: false,
        }
    }

    /// Describe a primary-key column.
    pub fn primary_key(name: &str) -> Self {
        Self {
            name: name.to_string(),
            primary: true,
        }
    }
}

/// Ordered column metadata for one table.
///
/// Order matters: INSERT/UPDATE clause generation walks columns in this
/// order, and the bind parameters produced alongside follow the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumns(Vec<ColumnDescriptor>);

impl TableColumns {
    /// Create from an ordered list of descriptors.
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self(columns)
    }

    /// Look up a column by name.
    pub fn get(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.0.iter().find(|c| c.name == name)
    }

    /// Check whether a column exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The primary-key column, if the table declares one.
    pub fn primary(&self) -> Option<&ColumnDescriptor> {
        self.0.iter().find(|c| c.primary)
    }

    /// Iterate columns in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.0.iter()
    }

    /// A copy of this column set with one column removed.
    pub fn without(&self, name: &str) -> TableColumns {
        Self(self.0.iter().filter(|c| c.name != name).cloned().collect())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the column set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ColumnDescriptor> for TableColumns {
    fn from_iter<I: IntoIterator<Item = ColumnDescriptor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One fetched row: ordered `(column, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row(Vec<(String, Value)>);

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell (consuming builder form).
    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.0.push((column.to_string(), value.into()));
        self
    }

    /// Look up a cell by column name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.iter().find(|(c, _)| c == column).map(|(_, v)| v)
    }

    /// Iterate cells in fetch order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(c, v)| (c.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A prepared statement ready for execution.
pub trait Statement {
    /// Execute the statement.
    ///
    /// `false` means the driver reported the statement failed (constraint
    /// violation and the like). It is an expected outcome, not an error.
    fn execute(&mut self) -> bool;

    /// Fetch all rows produced by the statement.
    fn fetch_all(&mut self) -> Vec<Row>;
}

/// The injected database connection.
///
/// Implementations report a lost or unestablished backing handle as
/// [`OrmError::Connection`](crate::OrmError::Connection).
pub trait Connection {
    /// Column metadata for a table, in table order.
    fn table_columns(&self, table: &str) -> OrmResult<TableColumns>;

    /// Prepare a statement with named bind parameters.
    fn prepare(&self, sql: &str, params: &Params) -> OrmResult<Box<dyn Statement + '_>>;

    /// Identifier assigned by the most recent INSERT.
    fn last_insert_id(&self) -> i64;
}
