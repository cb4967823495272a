//! Table and column names supplied by the client.
//!
//! Names are interpolated into SQL text, so they are only accepted when they match
//! `[\p{L}_][\p{L}\p{N}_]*` (letters in any script, digits, underscore) and are at most
//! [`MAX_IDENT_LEN`] characters long.

use crate::error::AppError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

pub const MAX_IDENT_LEN: usize = 64;

fn pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\p{L}_][\p{L}\p{N}_]*$").expect("identifier pattern compiles"))
}

/// What a name refers to; only used to word error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentKind {
    Table,
    Column,
}

impl IdentKind {
    fn as_str(&self) -> &'static str {
        match self {
            IdentKind::Table => "table",
            IdentKind::Column => "column",
        }
    }
}

/// A validated SQL identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident(String);

impl Ident {
    pub fn parse(kind: IdentKind, name: &str) -> Result<Self, AppError> {
        if name.chars().count() > MAX_IDENT_LEN {
            return Err(AppError::Validation(format!(
                "{} name longer than {} characters",
                kind.as_str(),
                MAX_IDENT_LEN
            )));
        }
        if !pattern().is_match(name) {
            return Err(AppError::Validation(format!(
                "invalid {} name '{}'",
                kind.as_str(),
                name
            )));
        }
        Ok(Ident(name.to_string()))
    }

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
    fn accepts_plain_names() {
        assert_eq!(Ident::parse(IdentKind::Table, "cinemas").unwrap().as_str(), "cinemas");
        assert_eq!(Ident::parse(IdentKind::Column, "cine_id").unwrap().as_str(), "cine_id");
        assert_eq!(Ident::parse(IdentKind::Column, "_x9").unwrap().as_str(), "_x9");
    }

    #[test]
    fn accepts_non_ascii_letters() {
        assert_eq!(Ident::parse(IdentKind::Column, "año").unwrap().as_str(), "año");
        assert_eq!(Ident::parse(IdentKind::Column, "título").unwrap().as_str(), "título");
        assert_eq!(Ident::parse(IdentKind::Table, "función_2").unwrap().as_str(), "función_2");
        assert_eq!(Ident::parse(IdentKind::Column, &"ñ".repeat(MAX_IDENT_LEN)).unwrap().as_str().chars().count(), MAX_IDENT_LEN);
    }

    #[test]
    fn rejects_non_letter_symbols() {
        assert!(Ident::parse(IdentKind::Column, "año-2").is_err());
        assert!(Ident::parse(IdentKind::Column, "precio€").is_err());
        assert!(Ident::parse(IdentKind::Column, "a\u{00a0}b").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(Ident::parse(IdentKind::Table, "").is_err());
    }

    #[test]
    fn rejects_leading_digit() {
        assert!(Ident::parse(IdentKind::Column, "1col").is_err());
    }

    #[test]
    fn rejects_injection_attempts() {
        assert!(Ident::parse(IdentKind::Table, "cinemas; DROP TABLE salas").is_err());
        assert!(Ident::parse(IdentKind::Column, "id = 1 OR 1").is_err());
        assert!(Ident::parse(IdentKind::Table, "main.cinemas").is_err());
        assert!(Ident::parse(IdentKind::Column, "\"nombre\"").is_err());
    }

    #[test]
    fn rejects_overlong() {
        let name = "a".repeat(MAX_IDENT_LEN + 1);
        assert!(Ident::parse(IdentKind::Table, &name).is_err());
        let name = "a".repeat(MAX_IDENT_LEN);
        assert!(Ident::parse(IdentKind::Table, &name).is_ok());
    }

    #[test]
    fn error_names_kind() {
        let err = Ident::parse(IdentKind::Column, "bad name").unwrap_err();
        assert_eq!(err.to_string(), "invalid column name 'bad name'");
    }
}
