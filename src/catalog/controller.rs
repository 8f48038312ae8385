use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::console::prompt::Prompt;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{AppState, ControllerResult, select_candidate};

pub(crate) fn display_books(state: &mut AppState, prompt: &mut Prompt) -> ControllerResult<()> {
    let res = ListBooksCommand::new(state.catalog.as_ref()).execute(ListBooksCommandRequest::new())?;
    let inventory = res.inventory;
    if inventory.is_empty() {
        prompt.say("No books available in the library.")?;
        return Ok(());
    }
    prompt.say("\n=== Library Inventory ===")?;
    prompt.say(format!("Total books: {}", inventory.total).as_str())?;
    prompt.say(format!("Available: {}", inventory.available).as_str())?;
    prompt.say(format!("Issued: {}", inventory.issued).as_str())?;
    prompt.say("\nBooks:")?;
    for book in &inventory.books {
        prompt.say(book.to_string().as_str())?;
    }
    Ok(())
}

pub(crate) fn add_book(state: &mut AppState, prompt: &mut Prompt) -> ControllerResult<()> {
    let title = prompt.ask("Enter the title: ")?;
    let author = prompt.ask("Enter the author: ")?;
    let isbn = prompt.ask("Enter ISBN (optional, press Enter to skip): ")?;
    let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), isbn.as_str());
    let res = AddBookCommand::new(state.catalog.as_mut()).execute(req)?;
    prompt.say(format!("Book added successfully: {}", res.book.title).as_str())?;
    Ok(())
}

pub(crate) fn remove_book(state: &mut AppState, prompt: &mut Prompt) -> ControllerResult<()> {
    let title = prompt.ask("Enter the title of the book to delete: ")?;
    let first = RemoveBookCommand::new(state.catalog.as_mut())
        .execute(RemoveBookCommandRequest::by_title(title.as_str()));
    let res = match first {
        Err(CommandError::Ambiguous { message, candidates }) => {
            match select_candidate(prompt, "Multiple books found with this title:", &candidates,
                                   "Enter the number of the book to delete (press Enter to cancel): ")? {
                Some(book_id) => RemoveBookCommand::new(state.catalog.as_mut())
                    .execute(RemoveBookCommandRequest::by_id(book_id.as_str()))?,
                None => return Err(CommandError::Ambiguous { message, candidates }.into()),
            }
        }
        other => other?,
    };
    prompt.say(format!("Book deleted: {}", res.book.title).as_str())?;
    Ok(())
}

pub(crate) fn search_books(state: &mut AppState, prompt: &mut Prompt) -> ControllerResult<()> {
    let query = prompt.ask("Enter search query (title or author): ")?;
    let res = SearchBooksCommand::new(state.catalog.as_ref())
        .execute(SearchBooksCommandRequest::new(query.as_str()))?;
    if res.books.is_empty() {
        prompt.say(format!("No books found matching: {}", res.query).as_str())?;
        return Ok(());
    }
    prompt.say(format!("Found {} book(s):", res.books.len()).as_str())?;
    for book in &res.books {
        prompt.say(book.to_string().as_str())?;
    }
    Ok(())
}
