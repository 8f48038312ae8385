use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::InventoryDto;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    // The mutation has already been applied when this runs, so a failed publish
    // is logged rather than surfaced as an error of the operation.
    fn publish(&self, event: &DomainEvent) {
        if let Err(err) = self.events_publisher.publish(event) {
            warn!(event_id = %event.event_id, name = %event.name, error = %err, "failed to publish domain event");
        }
    }

    fn load_all(&self) -> LibraryResult<Vec<BookDto>> {
        let records = self.book_repository.query(&HashMap::new())?;
        Ok(records.iter().map(BookDto::from).collect())
    }
}

// Stable, so copies sharing a title keep their insertion order.
pub(crate) fn sort_by_title(books: &mut [BookDto]) {
    books.sort_by(|a, b| a.title.cmp(&b.title));
}

fn normalize(book: &BookDto) -> LibraryResult<BookDto> {
    let mut normalized = book.clone();
    normalized.title = book.title.trim().to_string();
    normalized.author = book.author.trim().to_string();
    normalized.isbn = book.isbn.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
    if normalized.title.is_empty() || normalized.author.is_empty() {
        return Err(LibraryError::validation("Title and author cannot be empty", Some("400".to_string())));
    }
    Ok(normalized)
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto> {
        let book = normalize(book)?;
        let event = DomainEvent::added("books", book.book_id.as_str(), &self.metadata(), &book)?;
        let _ = self.book_repository.create(&BookEntity::from(&book))?;
        info!(book_id = %book.book_id, title = %book.title, "added book");
        self.publish(&event);
        Ok(book)
    }

    fn remove_book(&mut self, id: &str) -> LibraryResult<BookDto> {
        let existing = self.find_book_by_id(id)?;
        if existing.is_issued() {
            return Err(LibraryError::conflict("Cannot delete an issued book. Please return it first.",
                                              Some("409".to_string())));
        }
        let event = DomainEvent::deleted("books", id, &self.metadata(), &existing)?;
        let removed = self.book_repository.delete(id).map(|b| BookDto::from(&b))?;
        info!(book_id = %removed.book_id, title = %removed.title, "removed book");
        self.publish(&event);
        Ok(removed)
    }

    fn remove_book_by_title(&mut self, title: &str) -> LibraryResult<BookDto> {
        let mut matches = self.find_books_by_title(title, None)?;
        match matches.len() {
            0 => Err(LibraryError::not_found(format!("Book not found: {}", title.trim()).as_str())),
            1 => {
                let book = matches.remove(0);
                self.remove_book(book.book_id.as_str())
            }
            _ => Err(LibraryError::ambiguous("Please specify which book to delete", matches)),
        }
    }

    fn update_book(&mut self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.update(&BookEntity::from(book))?;
        debug!(book_id = %book.book_id, status = %book.book_status, "updated book");
        self.find_book_by_id(book.book_id.as_str())
    }

    fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).map(|b| BookDto::from(&b))
    }

    fn find_books_by_title(&self, title: &str, status: Option<BookStatus>) -> LibraryResult<Vec<BookDto>> {
        let mut predicate = HashMap::from([("title".to_string(), title.to_string())]);
        if let Some(status) = status {
            predicate.insert("book_status".to_string(), status.to_string());
        }
        let res = self.book_repository.query(&predicate)?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>> {
        let needle = query.trim().to_lowercase();
        let mut matches: Vec<BookDto> = self.load_all()?.into_iter()
            .filter(|b| b.title.to_lowercase().contains(&needle) || b.author.to_lowercase().contains(&needle))
            .collect();
        sort_by_title(&mut matches);
        debug!(query = %needle, matched = matches.len(), "searched books");
        Ok(matches)
    }

    fn inventory(&self) -> LibraryResult<InventoryDto> {
        let mut books = self.load_all()?;
        sort_by_title(&mut books);
        Ok(InventoryDto::new(books))
    }
}
