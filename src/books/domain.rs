use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn status(&self) -> BookStatus;
    fn borrower(&self) -> Option<&str>;

    fn is_issued(&self) -> bool {
        self.status() == BookStatus::CheckedOut
    }
}

// BookSelector picks the record(s) an operation works on: every copy sharing a
// title, or one exact copy once the caller has disambiguated.
#[derive(Debug, PartialEq, Clone)]
pub enum BookSelector {
    Title(String),
    Id(String),
}
