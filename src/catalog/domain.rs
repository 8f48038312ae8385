pub mod service;

use crate::books::dto::BookDto;
use crate::catalog::dto::InventoryDto;
use crate::core::library::{BookStatus, LibraryResult};

pub trait CatalogService {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto>;
    fn remove_book(&mut self, id: &str) -> LibraryResult<BookDto>;
    fn remove_book_by_title(&mut self, title: &str) -> LibraryResult<BookDto>;
    fn update_book(&mut self, book: &BookDto) -> LibraryResult<BookDto>;
    fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    fn find_books_by_title(&self, title: &str, status: Option<BookStatus>) -> LibraryResult<Vec<BookDto>>;
    fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>>;
    fn inventory(&self) -> LibraryResult<InventoryDto>;
}
