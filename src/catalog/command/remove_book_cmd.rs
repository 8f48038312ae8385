use serde::Serialize;
use crate::books::domain::BookSelector;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> RemoveBookCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) selector: BookSelector,
}

impl RemoveBookCommandRequest {
    pub fn by_title(title: &str) -> Self {
        Self {
            selector: BookSelector::Title(title.trim().to_string()),
        }
    }

    pub fn by_id(book_id: &str) -> Self {
        Self {
            selector: BookSelector::Id(book_id.to_string()),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub book: BookDto,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'a> {
    fn execute(&mut self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let res = match req.selector {
            BookSelector::Title(title) => self.catalog_service.remove_book_by_title(title.as_str()),
            BookSelector::Id(book_id) => self.catalog_service.remove_book(book_id.as_str()),
        };
        res.map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}
