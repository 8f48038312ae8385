use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;

#[derive(Debug)]
pub enum LibraryError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    // More than one record matched a lookup that needs exactly one. The candidates
    // are carried so the caller can retry with a specific book id.
    Ambiguous {
        message: String,
        candidates: Vec<BookDto>,
    },
    Conflict {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn ambiguous(message: &str, candidates: Vec<BookDto>) -> LibraryError {
        LibraryError::Ambiguous { message: message.to_string(), candidates }
    }

    pub fn conflict(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Conflict { message: message.to_string(), reason_code }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::Validation { message, .. } => { message }
            LibraryError::NotFound { message } => { message }
            LibraryError::Ambiguous { message, .. } => { message }
            LibraryError::Conflict { message, .. } => { message }
            LibraryError::DuplicateKey { message } => { message }
            LibraryError::Serialization { message } => { message }
            LibraryError::Runtime { message, .. } => { message }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Ambiguous { message, candidates } => {
                write!(f, "{} ({} candidates)", message, candidates.len())
            }
            LibraryError::Conflict { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    CheckedOut,
    Unknown,
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Available" => BookStatus::Available,
            "CheckedOut" => BookStatus::CheckedOut,
            _ => BookStatus::Unknown,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::CheckedOut => write!(f, "CheckedOut"),
            BookStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum CheckoutStatus {
    CheckedOut,
    Returned,
}

impl Display for CheckoutStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CheckoutStatus::CheckedOut => write!(f, "CheckedOut"),
            CheckoutStatus::Returned => write!(f, "Returned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;
    use crate::books::dto::BookDto;
    use crate::core::library::{BookStatus, CheckoutStatus, LibraryError};

    #[test]
    fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_ambiguous_error() {
        let candidates = vec![BookDto::new("Dune", "Frank Herbert", None),
                              BookDto::new("Dune", "Frank Herbert", None)];
        let err = LibraryError::ambiguous("two copies", candidates);
        assert!(matches!(&err, LibraryError::Ambiguous{ candidates, .. } if candidates.len() == 2));
        assert_eq!("two copies (2 candidates)", err.to_string());
    }

    #[test]
    fn test_should_create_conflict_error() {
        assert!(matches!(LibraryError::conflict("test", None), LibraryError::Conflict{ message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
    }

    #[test]
    fn test_should_create_runtime_error_from_io() {
        let err = LibraryError::from(std::io::Error::new(ErrorKind::UnexpectedEof, "closed"));
        assert!(matches!(&err, LibraryError::Runtime{ reason_code: Some(code), .. } if code == "UnexpectedEof"));
    }

    #[test]
    fn test_should_expose_message() {
        assert_eq!("no such book", LibraryError::not_found("no such book").message());
        assert_eq!("empty", LibraryError::validation("empty", Some("400".to_string())).message());
    }

    #[test]
    fn test_should_format_book_status() {
        let statuses = vec![
            BookStatus::Available,
            BookStatus::CheckedOut,
            BookStatus::Unknown,
        ];
        for status in statuses {
            let str = status.to_string();
            let str_status = BookStatus::from(str);
            assert_eq!(status, str_status);
        }
    }

    #[test]
    fn test_should_format_checkout_status() {
        assert_eq!("CheckedOut", CheckoutStatus::CheckedOut.to_string());
        assert_eq!("Returned", CheckoutStatus::Returned.to_string());
    }
}
