//! Safe SQL identifier handling.
//!
//! Every table and column name interpolated into generated SQL goes through
//! [`Ident`] first. Segments must match `[A-Za-z_][A-Za-z0-9_$]*`; dotted
//! notation (`schema.table`) is allowed. Anything else is rejected, which
//! keeps attacker-controlled strings out of the identifier position.

use crate::error::{OrmError, OrmResult};
use std::fmt;

/// A validated SQL identifier (table or column name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident(String);

impl Ident {
    /// Parse and validate an identifier, supporting dotted notation.
    pub fn parse(s: &str) -> OrmResult<Self> {
        if s.is_empty() {
            return Err(OrmError::validation("Identifier cannot be empty"));
        }
        for segment in s.split('.') {
            if segment.is_empty() {
                return Err(OrmError::validation(format!(
                    "Empty segment in identifier '{s}'"
                )));
            }
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
                _ => {
                    return Err(OrmError::validation(format!(
                        "Invalid identifier start character in '{segment}'"
                    )));
                }
            }
            for c in chars {
                if c != '_' && c != '$' && !c.is_ascii_alphanumeric() {
                    return Err(OrmError::validation(format!(
                        "Invalid character '{c}' in identifier '{segment}'"
                    )));
                }
            }
        }
        Ok(Self(s.to_string()))
    }

    /// The validated identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_simple() {
        assert_eq!(Ident::parse("users").unwrap().as_str(), "users");
    }

    #[test]
    fn ident_dotted() {
        assert_eq!(Ident::parse("public.users").unwrap().as_str(), "public.users");
    }

    #[test]
    fn ident_with_dollar() {
        assert!(Ident::parse("my_var$1").is_ok());
    }

    #[test]
    fn ident_rejects_empty() {
        assert!(Ident::parse("").is_err());
    }

    #[test]
    fn ident_rejects_start_digit() {
        assert!(Ident::parse("1table").is_err());
    }

    #[test]
    fn ident_rejects_space() {
        assert!(Ident::parse("my table").is_err());
    }

    #[test]
    fn ident_rejects_double_dot() {
        assert!(Ident::parse("schema..table").is_err());
    }

    #[test]
    fn ident_rejects_injection() {
        assert!(Ident::parse("users; DROP TABLE users").is_err());
    }
}
