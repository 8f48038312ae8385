pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;


pub trait BookRepository: Repository<BookEntity> {
    // copies sharing a title (case-insensitive), in insertion order
    fn find_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>>;
}
