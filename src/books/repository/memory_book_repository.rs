use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;

use crate::books::domain::model::{BookEntity, title_key};
use crate::books::repository::BookRepository;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the catalog in process memory. Records live in the
// primary index keyed by book id; the title index maps a lowercase title to the
// ids of its copies in insertion order, and a bucket is dropped once empty.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: HashMap<String, BookEntity>,
    titles: HashMap<String, Vec<String>>,
    insertion_order: Vec<String>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn resolve(&self, ids: &[String]) -> Vec<BookEntity> {
        ids.iter().filter_map(|id| self.books.get(id)).cloned().collect()
    }

    fn unindex(&mut self, entity: &BookEntity) {
        let key = entity.title_key();
        if let Some(bucket) = self.titles.get_mut(&key) {
            bucket.retain(|id| id != &entity.book_id);
            if bucket.is_empty() {
                self.titles.remove(&key);
            }
        }
        self.insertion_order.retain(|id| id != &entity.book_id);
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        entity.validate()?;
        if self.books.contains_key(&entity.book_id) {
            return Err(LibraryError::duplicate_key(
                format!("book with id {} already exists", entity.book_id).as_str()));
        }
        self.titles.entry(entity.title_key()).or_default().push(entity.book_id.to_string());
        self.insertion_order.push(entity.book_id.to_string());
        self.books.insert(entity.book_id.to_string(), entity.clone());
        Ok(1)
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        entity.validate()?;
        let existing = self.books.get_mut(&entity.book_id).ok_or_else(|| LibraryError::not_found(
            format!("book with id {} not found", entity.book_id).as_str()))?;
        if existing.version != entity.version {
            return Err(LibraryError::conflict(
                format!("book {} was modified, expected version {} but found {}",
                        entity.book_id, entity.version, existing.version).as_str(), Some("409".to_string())));
        }
        if existing.title != entity.title || existing.author != entity.author || existing.isbn != entity.isbn {
            return Err(LibraryError::validation(
                format!("title, author and isbn of book {} cannot change", entity.book_id).as_str(),
                Some("400".to_string())));
        }
        existing.book_status = entity.book_status;
        existing.borrower = entity.borrower.clone();
        existing.issued_at = entity.issued_at;
        existing.version = entity.version + 1;
        existing.updated_at = Utc::now().naive_utc();
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.get(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("book with id {} not found", id).as_str()))
    }

    fn delete(&mut self, id: &str) -> LibraryResult<BookEntity> {
        let removed = self.books.remove(id).ok_or_else(|| LibraryError::not_found(
            format!("book with id {} not found", id).as_str()))?;
        self.unindex(&removed);
        Ok(removed)
    }

    fn query(&self, predicate: &HashMap::<String, String>) -> LibraryResult<Vec<BookEntity>> {
        let mut records = match predicate.get("title") {
            Some(title) => self.titles.get(&title_key(title))
                .map(|ids| self.resolve(ids)).unwrap_or_default(),
            None => self.resolve(&self.insertion_order),
        };
        for (key, value) in predicate {
            match key.as_str() {
                "title" => {}
                "book_status" => {
                    let status = BookStatus::from(value.to_string());
                    records.retain(|b| b.book_status == status);
                }
                _ => {
                    return Err(LibraryError::validation(
                        format!("unsupported book predicate {}", key).as_str(), Some("400".to_string())));
                }
            }
        }
        debug!(predicate = ?predicate, matched = records.len(), "queried books");
        Ok(records)
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_by_title(&self, title: &str) -> LibraryResult<Vec<BookEntity>> {
        self.query(&HashMap::from([("title".to_string(), title.to_string())]))
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use chrono::Utc;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::{BookStatus, LibraryError};
    use crate::core::repository::Repository;

    // every stored record sits in exactly one bucket matching its title, and back
    fn assert_indexes_consistent(repo: &MemoryBookRepository) {
        let indexed: usize = repo.titles.values().map(|ids| ids.len()).sum();
        assert_eq!(repo.books.len(), indexed);
        assert_eq!(repo.books.len(), repo.insertion_order.len());
        for (key, ids) in &repo.titles {
            assert!(!ids.is_empty());
            for id in ids {
                let book = repo.books.get(id).expect("indexed book should exist");
                assert_eq!(key, &book.title_key());
            }
        }
    }

    #[test]
    fn test_should_create_get_book() {
        let mut repo = MemoryBookRepository::new();
        let book = BookEntity::new("Dune", "Frank Herbert", None);
        let size = repo.create(&book).expect("should create book");
        assert_eq!(1, size);

        let loaded = repo.get(book.book_id.as_str()).expect("should return book");
        assert_eq!(book, loaded);
        assert_indexes_consistent(&repo);
    }

    #[test]
    fn test_should_reject_duplicate_id() {
        let mut repo = MemoryBookRepository::new();
        let book = BookEntity::new("Dune", "Frank Herbert", None);
        let _ = repo.create(&book).expect("should create book");
        let res = repo.create(&book);
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        assert_eq!(1, repo.query(&HashMap::new()).expect("should query").len());
        assert_indexes_consistent(&repo);
    }

    #[test]
    fn test_should_reject_invalid_book() {
        let mut repo = MemoryBookRepository::new();
        let res = repo.create(&BookEntity::new("", "Frank Herbert", None));
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert!(repo.books.is_empty());
    }

    #[test]
    fn test_should_update_book() {
        let mut repo = MemoryBookRepository::new();
        let mut book = BookEntity::new("Dune", "Frank Herbert", None);
        let _ = repo.create(&book).expect("should create book");

        book.book_status = BookStatus::CheckedOut;
        book.borrower = Some("Alice".to_string());
        book.issued_at = Some(Utc::now().naive_utc());
        let _ = repo.update(&book).expect("should update book");

        let loaded = repo.get(book.book_id.as_str()).expect("should return book");
        assert_eq!(BookStatus::CheckedOut, loaded.book_status);
        assert_eq!(Some("Alice".to_string()), loaded.borrower);
        assert_eq!(1, loaded.version);
    }

    #[test]
    fn test_should_reject_stale_update() {
        let mut repo = MemoryBookRepository::new();
        let mut book = BookEntity::new("Dune", "Frank Herbert", None);
        let _ = repo.create(&book).expect("should create book");
        book.book_status = BookStatus::CheckedOut;
        book.borrower = Some("Alice".to_string());
        book.issued_at = Some(Utc::now().naive_utc());
        let _ = repo.update(&book).expect("should update book");

        let res = repo.update(&book);
        assert!(matches!(res, Err(LibraryError::Conflict { .. })));
    }

    #[test]
    fn test_should_reject_title_change() {
        let mut repo = MemoryBookRepository::new();
        let mut book = BookEntity::new("Dune", "Frank Herbert", None);
        let _ = repo.create(&book).expect("should create book");
        book.title = "Dune Messiah".to_string();
        assert!(matches!(repo.update(&book), Err(LibraryError::Validation { .. })));
        assert_eq!(1, repo.find_by_title("dune").expect("should find").len());
        assert!(repo.find_by_title("dune messiah").expect("should find").is_empty());
    }

    #[test]
    fn test_should_reject_unknown_update() {
        let mut repo = MemoryBookRepository::new();
        let res = repo.update(&BookEntity::new("Dune", "Frank Herbert", None));
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }

    #[test]
    fn test_should_find_by_title_in_insertion_order() {
        let mut repo = MemoryBookRepository::new();
        let first = BookEntity::new("Dune", "Frank Herbert", None);
        let other = BookEntity::new("Emma", "Jane Austen", None);
        let second = BookEntity::new("DUNE", "Frank Herbert", Some("isbn"));
        for book in [&first, &other, &second] {
            let _ = repo.create(book).expect("should create book");
        }

        let found = repo.find_by_title("  dune ").expect("should find");
        let ids: Vec<&str> = found.iter().map(|b| b.book_id.as_str()).collect();
        assert_eq!(vec![first.book_id.as_str(), second.book_id.as_str()], ids);
        assert!(repo.find_by_title("Dun").expect("should find").is_empty());
    }

    #[test]
    fn test_should_query_by_status() {
        let mut repo = MemoryBookRepository::new();
        let mut issued = BookEntity::new("Dune", "Frank Herbert", None);
        let available = BookEntity::new("Dune", "Frank Herbert", None);
        issued.book_status = BookStatus::CheckedOut;
        issued.borrower = Some("Alice".to_string());
        issued.issued_at = Some(Utc::now().naive_utc());
        let _ = repo.create(&issued).expect("should create book");
        let _ = repo.create(&available).expect("should create book");

        let res = repo.query(&HashMap::from([
            ("title".to_string(), "dune".to_string()),
            ("book_status".to_string(), BookStatus::Available.to_string())])).expect("should query");
        assert_eq!(1, res.len());
        assert_eq!(available.book_id, res[0].book_id);

        let res = repo.query(&HashMap::from([
            ("book_status".to_string(), BookStatus::CheckedOut.to_string())])).expect("should query");
        assert_eq!(vec![issued.book_id.to_string()], res.into_iter().map(|b| b.book_id).collect::<Vec<String>>());

        for key in ["shelf", "borrower"] {
            let res = repo.query(&HashMap::from([(key.to_string(), "A".to_string())]));
            assert!(matches!(res, Err(LibraryError::Validation { .. })));
        }
    }

    #[test]
    fn test_should_delete_book() {
        let mut repo = MemoryBookRepository::new();
        let first = BookEntity::new("Dune", "Frank Herbert", None);
        let second = BookEntity::new("Dune", "Frank Herbert", None);
        let _ = repo.create(&first).expect("should create book");
        let _ = repo.create(&second).expect("should create book");

        let removed = repo.delete(first.book_id.as_str()).expect("should delete book");
        assert_eq!(first.book_id, removed.book_id);
        assert!(repo.get(first.book_id.as_str()).is_err());
        assert_eq!(1, repo.find_by_title("Dune").expect("should find").len());
        assert_indexes_consistent(&repo);

        let _ = repo.delete(second.book_id.as_str()).expect("should delete book");
        assert!(repo.titles.is_empty());
        assert_indexes_consistent(&repo);

        assert!(matches!(repo.delete(second.book_id.as_str()), Err(LibraryError::NotFound { .. })));
    }
}
