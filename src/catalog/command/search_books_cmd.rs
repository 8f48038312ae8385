use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub(crate) fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct SearchBooksCommandRequest {
    pub(crate) query: String,
}

impl SearchBooksCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct SearchBooksCommandResponse {
    pub query: String,
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(query: &str, books: Vec<BookDto>) -> Self {
        Self {
            query: query.to_string(),
            books,
        }
    }
}

impl<'a> Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'a> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        self.catalog_service.search_books(req.query.as_str())
            .map_err(CommandError::from).map(|books| SearchBooksCommandResponse::new(req.query.as_str(), books))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::factory;
    use crate::catalog::seed::preload_books;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_search_books() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let _ = preload_books(svc.as_mut()).expect("should seed");

        let res = SearchBooksCommand::new(svc.as_ref())
            .execute(SearchBooksCommandRequest::new(" Greene ")).expect("should search books");
        assert_eq!("Greene", res.query.as_str());
        assert_eq!(3, res.books.len());

        let res = SearchBooksCommand::new(svc.as_ref())
            .execute(SearchBooksCommandRequest::new("Pratchett")).expect("should search books");
        assert!(res.books.is_empty());
    }
}
