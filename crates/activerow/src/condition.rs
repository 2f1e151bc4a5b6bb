//! Structured query condition input.
//!
//! A [`ConditionMap`] describes a query declaratively: an optional raw
//! filter expression, named bind values, a source-table override, whether
//! soft-deleted rows should be included, and a row limit. These are the
//! only recognized keys; finders and the statement builder read nothing
//! else.

use crate::value::{Params, Value};

/// Declarative description of a query's filter, binds, and options.
///
/// # Example
/// ```
/// use activerow::ConditionMap;
///
/// let conditions = ConditionMap::from("status = :status")
///     .bind("status", "active")
///     .limit(20);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConditionMap {
    /// Raw filter expression.
    ///
    /// # Safety
    /// This is interpolated into the WHERE clause verbatim. Never embed
    /// values here; put them in `bind` and reference them as `:name`.
    pub conditions: Option<String>,
    /// Named bind values, passed through to the driver untouched.
    pub bind: Params,
    /// Source-table override.
    pub from: Option<String>,
    /// Include only soft-deleted rows instead of only live ones.
    pub deleted: bool,
    /// Row limit (SELECT only).
    pub limit: Option<u64>,
}

impl ConditionMap {
    /// Create an empty condition map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw filter expression.
    ///
    /// # Safety
    /// Interpolated verbatim; values belong in [`bind`](Self::bind).
    pub fn conditions(mut self, expr: &str) -> Self {
        self.conditions = Some(expr.to_string());
        self
    }

    /// Add a named bind value.
    pub fn bind(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.bind.set(name, value);
        self
    }

    /// Override the source table.
    pub fn from_table(mut self, table: &str) -> Self {
        self.from = Some(table.to_string());
        self
    }

    /// Request soft-deleted rows instead of live ones.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Cap the number of returned rows.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }
}

/// Positional shorthand: a bare expression is the filter.
impl From<&str> for ConditionMap {
    fn from(expr: &str) -> Self {
        Self::new().conditions(expr)
    }
}

impl From<String> for ConditionMap {
    fn from(expr: String) -> Self {
        Self::new().conditions(&expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_shorthand_sets_filter() {
        let conditions = ConditionMap::from("id = :id");
        assert_eq!(conditions.conditions.as_deref(), Some("id = :id"));
        assert!(conditions.bind.is_empty());
    }

    #[test]
    fn builder_methods_populate_keys() {
        let conditions = ConditionMap::new()
            .conditions("name = :name")
            .bind("name", "Ann")
            .from_table("users")
            .deleted(true)
            .limit(5);
        assert_eq!(conditions.from.as_deref(), Some("users"));
        assert!(conditions.deleted);
        assert_eq!(conditions.limit, Some(5));
        assert_eq!(conditions.bind.len(), 1);
    }
}
