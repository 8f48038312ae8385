pub mod service;

use crate::checkout::dto::CheckoutDto;
use crate::core::library::LibraryResult;

pub trait CheckoutService {
    fn checkout(&mut self, title: &str, borrower: &str) -> LibraryResult<CheckoutDto>;
    fn returned(&mut self, title: &str) -> LibraryResult<CheckoutDto>;
    fn returned_by_id(&mut self, book_id: &str) -> LibraryResult<CheckoutDto>;
}
