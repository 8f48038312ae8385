use serde::Serialize;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct CheckoutBookCommand<'a> {
    checkout_service: Box<dyn CheckoutService + 'a>,
}

impl<'a> CheckoutBookCommand<'a> {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService + 'a>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct CheckoutBookCommandRequest {
    title: String,
    borrower: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(title: &str, borrower: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            borrower: borrower.trim().to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct CheckoutBookCommandResponse {
    pub checkout: CheckoutDto,
}

impl CheckoutBookCommandResponse {
    pub fn new(checkout: CheckoutDto) -> Self {
        Self {
            checkout,
        }
    }
}

impl<'a> Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand<'a> {
    fn execute(&mut self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.checkout_service.checkout(req.title.as_str(), req.borrower.as_str())
            .map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}
