//! SQL statement construction from structured condition input.
//!
//! [`QueryBuilder`] is a pure renderer: it turns a source table, a filter,
//! column metadata, and a statement kind into SQL text with named `:column`
//! placeholders. It holds no connection state and never executes anything;
//! bind values travel separately as [`Params`](crate::Params) in the same
//! order as the rendered columns.

use crate::condition::ConditionMap;
use crate::connection::TableColumns;
use crate::error::{OrmError, OrmResult};
use crate::ident::Ident;

/// Which SQL statement [`QueryBuilder::build`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementKind {
    #[default]
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    /// The SQL keyword, for diagnostics.
    pub fn keyword(&self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        }
    }
}

/// Builder that renders SELECT / INSERT / UPDATE / DELETE statement text.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    /// Source table
    source: Option<String>,
    /// Accumulated WHERE filter
    filter: Option<String>,
    /// Column set for INSERT/UPDATE clause generation
    columns: TableColumns,
    /// Statement kind
    kind: StatementKind,
    /// Row cap (SELECT only)
    limit: Option<u64>,
}

impl QueryBuilder {
    /// Create an empty SELECT builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from a condition map.
    ///
    /// Reads `conditions`, `from`, and `limit`; `bind` values are the
    /// caller's to pass to the driver and are never embedded in the text.
    pub fn from_conditions(conditions: &ConditionMap) -> Self {
        Self {
            source: conditions.from.clone(),
            filter: conditions.conditions.clone(),
            columns: TableColumns::default(),
            kind: StatementKind::Select,
            limit: conditions.limit,
        }
    }

    /// Set the source table.
    pub fn source(&mut self, table: &str) -> &mut Self {
        self.source = Some(table.to_string());
        self
    }

    /// Append a boolean-AND condition to the accumulated filter.
    ///
    /// With no prior filter this acts as the first condition.
    ///
    /// # Safety
    /// The expression is interpolated verbatim; values belong in the bind
    /// parameters, referenced as `:name`.
    pub fn and_where(&mut self, expr: &str) -> &mut Self {
        self.filter = Some(match self.filter.take() {
            Some(filter) => format!("{filter} AND {expr}"),
            None => expr.to_string(),
        });
        self
    }

    /// Set or replace the filter used for UPDATE/DELETE target selection.
    ///
    /// # Safety
    /// Interpolated verbatim, like [`and_where`](Self::and_where).
    pub fn set_where(&mut self, expr: &str) -> &mut Self {
        self.filter = Some(expr.to_string());
        self
    }

    /// Set or replace the column set used for INSERT/UPDATE generation.
    pub fn columns(&mut self, columns: TableColumns) -> &mut Self {
        self.columns = columns;
        self
    }

    /// Set the statement kind.
    pub fn statement(&mut self, kind: StatementKind) -> &mut Self {
        self.kind = kind;
        self
    }

    /// Cap the number of returned rows; only meaningful for SELECT.
    pub fn limit(&mut self, n: u64) -> &mut Self {
        self.limit = Some(n);
        self
    }

    /// Render the final SQL text.
    ///
    /// An empty filter on UPDATE/DELETE is permitted here; supplying one is
    /// the caller's responsibility for mutating statements.
    pub fn build(&self) -> OrmResult<String> {
        let source = self
            .source
            .as_deref()
            .ok_or(OrmError::MissingSource(self.kind.keyword()))?;
        let table = Ident::parse(source)?;

        match self.kind {
            StatementKind::Select => {
                let mut sql = format!("SELECT * FROM {table}");
                if let Some(filter) = &self.filter {
                    sql.push_str(" WHERE ");
                    sql.push_str(filter);
                }
                if let Some(limit) = self.limit {
                    sql.push_str(&format!(" LIMIT {limit}"));
                }
                Ok(sql)
            }
            StatementKind::Insert => {
                // The primary key is assigned by the database, never listed.
                let mut names = Vec::new();
                for column in self.columns.iter().filter(|c| !c.primary) {
                    names.push(Ident::parse(&column.name)?);
                }
                if names.is_empty() {
                    return Err(OrmError::validation(
                        "INSERT requires at least one non-primary column",
                    ));
                }
                let columns: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
                let placeholders: Vec<String> =
                    columns.iter().map(|name| format!(":{name}")).collect();
                Ok(format!(
                    "INSERT INTO {table} ({}) VALUES ({})",
                    columns.join(", "),
                    placeholders.join(", ")
                ))
            }
            StatementKind::Update => {
                let mut assignments = Vec::new();
                for column in self.columns.iter() {
                    let name = Ident::parse(&column.name)?;
                    assignments.push(format!("{name} = :{name}"));
                }
                if assignments.is_empty() {
                    return Err(OrmError::validation(
                        "UPDATE requires at least one column to set",
                    ));
                }
                let mut sql = format!("UPDATE {table} SET {}", assignments.join(", "));
                if let Some(filter) = &self.filter {
                    sql.push_str(" WHERE ");
                    sql.push_str(filter);
                }
                Ok(sql)
            }
            StatementKind::Delete => {
                let mut sql = format!("DELETE FROM {table}");
                if let Some(filter) = &self.filter {
                    sql.push_str(" WHERE ");
                    sql.push_str(filter);
                }
                Ok(sql)
            }
        }
    }
}
