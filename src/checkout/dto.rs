use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::domain::Identifiable;
use crate::core::library::{CheckoutStatus, LibraryError, LibraryResult};
use crate::utils::date::{optional_serializer, serializer};


// CheckoutDto is the receipt of lending a book copy or taking it back.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutDto {
    pub checkout_id: String,
    pub branch_id: String,
    pub book_id: String,
    pub title: String,
    pub borrower: String,
    pub checkout_status: CheckoutStatus,
    #[serde(with = "serializer")]
    pub checkout_at: NaiveDateTime,
    #[serde(with = "optional_serializer")]
    pub returned_at: Option<NaiveDateTime>,
}

impl CheckoutDto {
    // Builds the receipt from an issued book; fails if the book carries no loan.
    // The receipt id is derived from the book id and the issue time, so the
    // receipt of a return carries the id of the checkout it closes.
    pub fn from_book(branch_id: &str, book: &BookDto) -> LibraryResult<Self> {
        match (&book.borrower, book.issued_at) {
            (Some(borrower), Some(issued_at)) => Ok(CheckoutDto {
                checkout_id: checkout_id(book.book_id.as_str(), issued_at),
                branch_id: branch_id.to_string(),
                book_id: book.book_id.to_string(),
                title: book.title.to_string(),
                borrower: borrower.to_string(),
                checkout_status: CheckoutStatus::CheckedOut,
                checkout_at: issued_at,
                returned_at: None,
            }),
            _ => Err(LibraryError::validation(format!("book {} is not issued",
                                                      book.book_id).as_str(), Some("400".to_string()))),
        }
    }

    pub fn mark_returned(&mut self) {
        self.checkout_status = CheckoutStatus::Returned;
        self.returned_at = Some(Utc::now().naive_utc());
    }
}

fn checkout_id(book_id: &str, issued_at: NaiveDateTime) -> String {
    format!("{}-{}", book_id, issued_at.and_utc().timestamp_micros())
}

impl Identifiable for CheckoutDto {
    fn id(&self) -> String {
        self.checkout_id.to_string()
    }

    fn version(&self) -> i64 {
        0
    }
}
