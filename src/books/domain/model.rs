use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::utils::date::{optional_serializer, serializer};

// BookEntity abstracts a physical book copy stored in the catalog; there can be
// many copies of the same title, each with its own identifier.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
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

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: Option<&str>) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.map(str::to_string),
            book_status: BookStatus::Available,
            borrower: None,
            issued_at: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // lowercase title used as the key of the title index
    pub fn title_key(&self) -> String {
        title_key(self.title.as_str())
    }

    // Checks what must hold before the entity is stored.
    pub fn validate(&self) -> LibraryResult<()> {
        if self.title.trim().is_empty() {
            return Err(LibraryError::validation("title cannot be empty", Some("400".to_string())));
        }
        if self.author.trim().is_empty() {
            return Err(LibraryError::validation("author cannot be empty", Some("400".to_string())));
        }
        match self.book_status {
            BookStatus::Available if self.borrower.is_some() || self.issued_at.is_some() => {
                Err(LibraryError::validation(format!(
                    "available book {} cannot carry a borrower", self.book_id).as_str(), Some("400".to_string())))
            }
            BookStatus::CheckedOut if self.borrower.is_none() || self.issued_at.is_none() => {
                Err(LibraryError::validation(format!(
                    "issued book {} must carry a borrower and issue date", self.book_id).as_str(), Some("400".to_string())))
            }
            BookStatus::Unknown => {
                Err(LibraryError::validation(format!(
                    "book {} has unknown status", self.book_id).as_str(), Some("400".to_string())))
            }
            _ => Ok(()),
        }
    }
}

pub(crate) fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
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
