//! Unified Error Model
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CableError {
    /// Malformed or out-of-domain input
    #[error("VALIDATION/{field}: {message}")]
    Validation { field: String, message: String },

    /// Size, material or cable type absent from the reference tables
    #[error("LOOKUP/{0}")]
    Lookup(String),

    /// No published conductor satisfies the ampacity, breaker or drop constraints
    #[error("NO_CONFORMING_SIZE/{0}")]
    NoConformingSize(String),

    /// Invalid reference tables or service configuration
    #[error("CONFIG/{0}")]
    Config(String),
}

impl CableError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CableError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Stable kind used on the wire
    pub fn kind(&self) -> ErrorKind {
        match self {
            CableError::Validation { .. } => ErrorKind::Validation,
            CableError::Lookup(_) => ErrorKind::Lookup,
            CableError::NoConformingSize(_) => ErrorKind::NoConformingSize,
            CableError::Config(_) => ErrorKind::Config,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Lookup,
    NoConformingSize,
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Lookup => "lookup",
            ErrorKind::NoConformingSize => "no_conforming_size",
            ErrorKind::Config => "config",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Result<T> = std::result::Result<T, CableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_codes() {
        let err = CableError::validation("power", "must be greater than zero");
        assert_eq!(err.to_string(), "VALIDATION/power: must be greater than zero");

        let err = CableError::Lookup("size 25 has no reference weight".to_string());
        assert!(err.to_string().starts_with("LOOKUP/"));
    }

    #[test]
    fn test_kinds_are_distinct() {
        let kinds = [
            CableError::validation("x", "y").kind(),
            CableError::Lookup(String::new()).kind(),
            CableError::NoConformingSize(String::new()).kind(),
            CableError::Config(String::new()).kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(ErrorKind::NoConformingSize.to_string(), "no_conforming_size");
    }
}
