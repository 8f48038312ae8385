use serde::Serialize;
use crate::books::domain::BookSelector;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ReturnBookCommand<'a> {
    checkout_service: Box<dyn CheckoutService + 'a>,
}

impl<'a> ReturnBookCommand<'a> {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService + 'a>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ReturnBookCommandRequest {
    selector: BookSelector,
}

impl ReturnBookCommandRequest {
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
pub(crate) struct ReturnBookCommandResponse {
    pub checkout: CheckoutDto,
}

impl ReturnBookCommandResponse {
    pub fn new(checkout: CheckoutDto) -> Self {
        Self {
            checkout,
        }
    }
}

impl<'a> Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'a> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let res = match req.selector {
            BookSelector::Title(title) => self.checkout_service.returned(title.as_str()),
            BookSelector::Id(book_id) => self.checkout_service.returned_by_id(book_id.as_str()),
        };
        res.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
