use std::collections::HashMap;
use tracing::{info, warn};
use crate::books::domain::Book;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub(crate) struct CheckoutServiceImpl<'a> {
    branch_id: String,
    catalog_service: &'a mut dyn CatalogService,
    events_publisher: Box<dyn EventPublisher>,
}

impl<'a> CheckoutServiceImpl<'a> {
    pub(crate) fn new(config: &Configuration, catalog_service: &'a mut dyn CatalogService,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            catalog_service,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }

    fn publish(&self, event: &DomainEvent) {
        if let Err(err) = self.events_publisher.publish(event) {
            warn!(event_id = %event.event_id, name = %event.name, error = %err, "failed to publish domain event");
        }
    }

    fn return_book(&mut self, mut book: BookDto) -> LibraryResult<CheckoutDto> {
        let mut checkout = CheckoutDto::from_book(self.branch_id.as_str(), &book)?;
        checkout.mark_returned();
        book.returned()?;
        let event = DomainEvent::updated("book_returned", checkout.id().as_str(), &self.metadata(), &checkout)?;
        let _ = self.catalog_service.update_book(&book)?;
        info!(book_id = %checkout.book_id, borrower = %checkout.borrower, "returned book");
        self.publish(&event);
        Ok(checkout)
    }
}

impl<'a> CheckoutService for CheckoutServiceImpl<'a> {
    fn checkout(&mut self, title: &str, borrower: &str) -> LibraryResult<CheckoutDto> {
        let borrower = borrower.trim();
        if borrower.is_empty() {
            return Err(LibraryError::validation("Borrower name cannot be empty", Some("400".to_string())));
        }
        let available = self.catalog_service.find_books_by_title(title, Some(BookStatus::Available))?;
        // first available copy in insertion order, no disambiguation needed
        let mut book = available.into_iter().next().ok_or_else(|| LibraryError::not_found(
            "No available copies of this book"))?;
        book.issue(borrower)?;
        let checkout = CheckoutDto::from_book(self.branch_id.as_str(), &book)?;
        let event = DomainEvent::updated("book_checkout", checkout.id().as_str(), &self.metadata(), &checkout)?;
        let _ = self.catalog_service.update_book(&book)?;
        info!(book_id = %checkout.book_id, title = %book.title(), borrower = %borrower, "issued book");
        self.publish(&event);
        Ok(checkout)
    }

    fn returned(&mut self, title: &str) -> LibraryResult<CheckoutDto> {
        let mut issued = self.catalog_service.find_books_by_title(title, Some(BookStatus::CheckedOut))?;
        match issued.len() {
            0 => Err(LibraryError::not_found("No issued copies of this book found")),
            1 => {
                let book = issued.remove(0);
                self.return_book(book)
            }
            _ => Err(LibraryError::ambiguous("Please specify which copy to return", issued)),
        }
    }

    fn returned_by_id(&mut self, book_id: &str) -> LibraryResult<CheckoutDto> {
        let book = self.catalog_service.find_book_by_id(book_id)?;
        if !book.is_issued() {
            return Err(LibraryError::conflict(format!("Book is not issued: {}", book.title).as_str(),
                                              Some("409".to_string())));
        }
        self.return_book(book)
    }
}
