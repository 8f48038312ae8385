use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::checkout::factory::create_checkout_service;
use crate::console::prompt::Prompt;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, ControllerResult, select_candidate};

pub(crate) fn issue_book(state: &mut AppState, prompt: &mut Prompt) -> ControllerResult<()> {
    let title = prompt.ask("Enter the title of the book to issue: ")?;
    let borrower = prompt.ask("Enter borrower's name: ")?;
    let svc = create_checkout_service(&state.config, state.catalog.as_mut());
    let res = CheckoutBookCommand::new(svc)
        .execute(CheckoutBookCommandRequest::new(title.as_str(), borrower.as_str()))?;
    prompt.say(format!("Book issued successfully: {} to {}", res.checkout.title, res.checkout.borrower).as_str())?;
    Ok(())
}

pub(crate) fn return_book(state: &mut AppState, prompt: &mut Prompt) -> ControllerResult<()> {
    let title = prompt.ask("Enter the title of the book to return: ")?;
    let svc = create_checkout_service(&state.config, state.catalog.as_mut());
    let first = ReturnBookCommand::new(svc).execute(ReturnBookCommandRequest::by_title(title.as_str()));
    let res = match first {
        Err(CommandError::Ambiguous { message, candidates }) => {
            match select_candidate(prompt, "Multiple issued copies found:", &candidates,
                                   "Enter the number of the copy to return (press Enter to cancel): ")? {
                Some(book_id) => {
                    let svc = create_checkout_service(&state.config, state.catalog.as_mut());
                    ReturnBookCommand::new(svc).execute(ReturnBookCommandRequest::by_id(book_id.as_str()))?
                }
                None => return Err(CommandError::Ambiguous { message, candidates }.into()),
            }
        }
        other => other?,
    };
    prompt.say(format!("Book returned successfully: {} from {}", res.checkout.title, res.checkout.borrower).as_str())?;
    Ok(())
}
