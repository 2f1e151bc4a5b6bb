//! Record lifecycle and persistence orchestration.
//!
//! A [`Record`] is the in-memory image of one table row. Concrete record
//! types declare their table and a validated field-by-name accessor pair;
//! everything else — condition normalization, soft-delete filtering,
//! timestamp stamping, insert-versus-update detection — lives in
//! [`Repository`], which drives a [`QueryBuilder`] and hands the rendered
//! statement to the injected [`Connection`].

use crate::builder::{QueryBuilder, StatementKind};
use crate::condition::ConditionMap;
use crate::connection::{Connection, Row};
use crate::error::{OrmError, OrmResult};
use crate::value::{Params, Value};
use chrono::Utc;
use tracing::debug;

/// Timestamp column stamped on insert.
pub const COLUMN_CREATED_AT: &str = "created_at";

/// Timestamp column stamped on every save.
pub const COLUMN_UPDATED_AT: &str = "updated_at";

/// Timestamp column marking a row as soft-deleted.
pub const COLUMN_DELETED_AT: &str = "deleted_at";

/// A type that maps to rows of exactly one table.
///
/// Implementations declare a static field set: `get`/`set` address fields
/// by column name and reject names the type does not declare. A record is
/// *new* while its primary-key field is unset or null and *persisted* once
/// the database assigns one.
pub trait Record: Default {
    /// Source table this record type maps to.
    const TABLE: &'static str;

    /// Current value of a field, or `None` if unset.
    fn get(&self, column: &str) -> Option<Value>;

    /// Assign a field by column name.
    ///
    /// Unknown names fail with [`OrmError::UnknownColumn`].
    fn set(&mut self, column: &str, value: Value) -> OrmResult<()>;

    /// Populate a new record from a fetched row.
    ///
    /// Row columns the type does not declare are skipped.
    fn from_row(row: &Row) -> OrmResult<Self> {
        let mut record = Self::default();
        for (column, value) in row.iter() {
            match record.set(column, value.clone()) {
                Ok(()) | Err(OrmError::UnknownColumn { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(record)
    }
}

/// Outcome of a [`Repository::save`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new row was inserted; carries the driver-assigned identifier.
    Inserted(i64),
    /// An existing row was updated.
    Updated,
    /// The driver reported the statement failed.
    Failed,
}

impl SaveOutcome {
    /// Check whether the statement executed successfully.
    pub fn is_success(&self) -> bool {
        !matches!(self, SaveOutcome::Failed)
    }
}

/// Record persistence gateway bound to an injected connection.
///
/// The connection is borrowed from its external owner; the repository never
/// creates, pools, or closes it.
pub struct Repository<'a, C: Connection + ?Sized> {
    connection: &'a C,
}

impl<'a, C: Connection + ?Sized> Repository<'a, C> {
    /// Bind a repository to a connection.
    pub fn new(connection: &'a C) -> Self {
        Self { connection }
    }

    /// Fetch all records matching the conditions.
    ///
    /// Tables with a `deleted_at` column get a soft-delete filter ANDed to
    /// any caller-supplied filter: live rows by default, deleted rows when
    /// `deleted: true` is set. Zero matches yield an empty vector.
    pub fn fetch_all<R: Record>(&self, conditions: ConditionMap) -> OrmResult<Vec<R>> {
        let rows = self.select_rows::<R>(conditions, false)?;
        rows.iter().map(R::from_row).collect()
    }

    /// Fetch the first record matching the conditions, if any.
    ///
    /// A caller-supplied `limit` is a misuse and fails with
    /// [`OrmError::UnexpectedCondition`]; the query is always capped at one
    /// row.
    pub fn fetch_one<R: Record>(&self, conditions: ConditionMap) -> OrmResult<Option<R>> {
        if conditions.limit.is_some() {
            return Err(OrmError::unexpected_condition(
                "limit cannot be set when fetching one record",
            ));
        }
        let rows = self.select_rows::<R>(conditions, true)?;
        rows.first().map(R::from_row).transpose()
    }

    fn select_rows<R: Record>(
        &self,
        mut conditions: ConditionMap,
        single: bool,
    ) -> OrmResult<Vec<Row>> {
        // Finders always query the record's own table; column metadata and
        // row mapping are only meaningful against it.
        conditions.from = Some(R::TABLE.to_string());

        let columns = self.connection.table_columns(R::TABLE)?;
        let mut builder = QueryBuilder::from_conditions(&conditions);
        if columns.contains(COLUMN_DELETED_AT) {
            if conditions.deleted {
                builder.and_where(&format!("{COLUMN_DELETED_AT} IS NOT NULL"));
            } else {
                builder.and_where(&format!("{COLUMN_DELETED_AT} IS NULL"));
            }
        }
        if single {
            builder.limit(1);
        }

        let sql = builder.build()?;
        debug!(table = R::TABLE, sql = %sql, "executing select");
        let mut statement = self.connection.prepare(&sql, &conditions.bind)?;
        // The read path treats a failed execute the same as an empty result.
        statement.execute();
        Ok(statement.fetch_all())
    }

    /// Persist the record: INSERT when it holds no primary-key value,
    /// UPDATE otherwise.
    ///
    /// An `updated_at` column is stamped on every save and a `created_at`
    /// column on insert. On a successful insert the driver-assigned
    /// identifier is written back into the record's primary-key field.
    /// Driver-reported failure is a value ([`SaveOutcome::Failed`]), not an
    /// error, and leaves the record untouched.
    pub fn save<R: Record>(&self, record: &mut R) -> OrmResult<SaveOutcome> {
        let columns = self.connection.table_columns(R::TABLE)?;
        let primary = columns.primary().cloned();

        // Non-primary columns contribute the record's current value or NULL,
        // in table order.
        let mut values = Params::new();
        for column in columns.iter().filter(|c| !c.primary) {
            values.set(&column.name, record.get(&column.name).unwrap_or(Value::Null));
        }

        let now = Utc::now().naive_utc();
        if columns.contains(COLUMN_UPDATED_AT) {
            values.set(COLUMN_UPDATED_AT, Value::Timestamp(now));
        }

        let primary_value = primary
            .as_ref()
            .and_then(|pk| record.get(&pk.name))
            .filter(|v| !v.is_null());

        let mut builder = QueryBuilder::new();
        builder.source(R::TABLE);

        if let (Some(pk), Some(pk_value)) = (&primary, primary_value) {
            builder
                .columns(columns.without(&pk.name))
                .statement(StatementKind::Update)
                .set_where(&format!("{0} = :{0}", pk.name));
            values.set(&pk.name, pk_value);

            let sql = builder.build()?;
            debug!(table = R::TABLE, sql = %sql, "executing update");
            let mut statement = self.connection.prepare(&sql, &values)?;
            if !statement.execute() {
                return Ok(SaveOutcome::Failed);
            }
            Ok(SaveOutcome::Updated)
        } else {
            if columns.contains(COLUMN_CREATED_AT) {
                values.set(COLUMN_CREATED_AT, Value::Timestamp(now));
            }
            builder
                .columns(columns.clone())
                .statement(StatementKind::Insert);

            let sql = builder.build()?;
            debug!(table = R::TABLE, sql = %sql, "executing insert");
            let mut statement = self.connection.prepare(&sql, &values)?;
            if !statement.execute() {
                return Ok(SaveOutcome::Failed);
            }

            let id = self.connection.last_insert_id();
            if let Some(pk) = &primary {
                record.set(&pk.name, Value::Integer(id))?;
            }
            Ok(SaveOutcome::Inserted(id))
        }
    }

    /// Soft-delete the record by stamping its `deleted_at` column and
    /// saving.
    ///
    /// Fails with [`OrmError::MissingColumn`] — without touching the
    /// database row — when the table has no `deleted_at` column.
    pub fn delete<R: Record>(&self, record: &mut R) -> OrmResult<SaveOutcome> {
        let columns = self.connection.table_columns(R::TABLE)?;
        if !columns.contains(COLUMN_DELETED_AT) {
            return Err(OrmError::missing_column(R::TABLE, COLUMN_DELETED_AT));
        }
        record.set(COLUMN_DELETED_AT, Value::Timestamp(Utc::now().naive_utc()))?;
        self.save(record)
    }

    /// Permanently delete the record's row.
    ///
    /// Requires a primary-key column with a non-null value on the record;
    /// otherwise fails with [`OrmError::MissingPrimaryKey`] and performs no
    /// database call. Driver-reported failure yields `Ok(false)`.
    pub fn delete_permanently<R: Record>(&self, record: &R) -> OrmResult<bool> {
        let columns = self.connection.table_columns(R::TABLE)?;
        let primary = columns.primary().ok_or_else(|| {
            OrmError::missing_primary_key(format!(
                "table `{}` declares no primary-key column",
                R::TABLE
            ))
        })?;
        let pk_value = record
            .get(&primary.name)
            .filter(|v| !v.is_null())
            .ok_or_else(|| {
                OrmError::missing_primary_key(format!(
                    "record for table `{}` holds no primary-key value",
                    R::TABLE
                ))
            })?;

        let mut builder = QueryBuilder::new();
        builder
            .source(R::TABLE)
            .statement(StatementKind::Delete)
            .set_where(&format!("{0} = :{0}", primary.name));
        let params = Params::new().with_value(&primary.name, pk_value);

        let sql = builder.build()?;
        debug!(table = R::TABLE, sql = %sql, "executing delete");
        let mut statement = self.connection.prepare(&sql, &params)?;
        Ok(statement.execute())
    }
}
