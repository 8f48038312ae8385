use serde::Serialize;
use crate::books::domain::Book;
use crate::books::dto::BookDto;

// InventoryDto is the catalog listing: every book sorted by title plus counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryDto {
    pub total: usize,
    pub available: usize,
    pub issued: usize,
    pub books: Vec<BookDto>,
}

impl InventoryDto {
    pub fn new(books: Vec<BookDto>) -> Self {
        let issued = books.iter().filter(|b| b.is_issued()).count();
        Self {
            total: books.len(),
            available: books.len() - issued,
            issued,
            books,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
