use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::utils::date::{optional_serializer, serializer};

// BookDto is a data transfer object for Catalog and Checkout services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub book_status: BookStatus,
    pub borrower: Option<String>,
    #[serde(with = "optional_serializer")]
    pub issued_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: Option<&str>) -> BookDto {
        BookDto::from(&BookEntity::new(title, author, isbn))
    }

    pub fn issue(&mut self, borrower: &str) -> LibraryResult<()> {
        if self.is_issued() {
            return Err(LibraryError::conflict(format!("book {} is already issued",
                                                      self.book_id).as_str(), Some("409".to_string())));
        }
        self.book_status = BookStatus::CheckedOut;
        self.borrower = Some(borrower.to_string());
        self.issued_at = Some(Utc::now().naive_utc());
        Ok(())
    }

    pub fn returned(&mut self) -> LibraryResult<()> {
        if !self.is_issued() {
            return Err(LibraryError::conflict(format!("book {} is not issued",
                                                      self.book_id).as_str(), Some("409".to_string())));
        }
        self.book_status = BookStatus::Available;
        self.borrower = None;
        self.issued_at = None;
        Ok(())
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn status(&self) -> BookStatus {
        self.book_status
    }

    fn borrower(&self) -> Option<&str> {
        self.borrower.as_deref()
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}, Author: {}", self.title, self.author)?;
        if let Some(isbn) = &self.isbn {
            write!(f, ", ISBN: {}", isbn)?;
        }
        match &self.borrower {
            Some(borrower) if self.is_issued() => write!(f, " (Issued to: {})", borrower),
            _ => write!(f, " (Available)"),
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.clone(),
            book_status: other.book_status,
            borrower: other.borrower.clone(),
            issued_at: other.issued_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.clone(),
            book_status: other.book_status,
            borrower: other.borrower.clone(),
            issued_at: other.issued_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
