use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::controller::ControllerError;

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum MenuOption {
    DisplayBooks,
    IssueBook,
    ReturnBook,
    AddBook,
    DeleteBook,
    SearchBooks,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 7] = [
        MenuOption::DisplayBooks,
        MenuOption::IssueBook,
        MenuOption::ReturnBook,
        MenuOption::AddBook,
        MenuOption::DeleteBook,
        MenuOption::SearchBooks,
        MenuOption::Exit,
    ];

    pub fn number(&self) -> usize {
        match self {
            MenuOption::DisplayBooks => 1,
            MenuOption::IssueBook => 2,
            MenuOption::ReturnBook => 3,
            MenuOption::AddBook => 4,
            MenuOption::DeleteBook => 5,
            MenuOption::SearchBooks => 6,
            MenuOption::Exit => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::DisplayBooks => "Display All Books",
            MenuOption::IssueBook => "Issue Book",
            MenuOption::ReturnBook => "Return Book",
            MenuOption::AddBook => "Add Book",
            MenuOption::DeleteBook => "Delete Book",
            MenuOption::SearchBooks => "Search Books",
            MenuOption::Exit => "Exit",
        }
    }

    pub fn parse(choice: &str) -> Result<MenuOption, ControllerError> {
        let n = choice.trim().parse::<i64>()
            .map_err(|_| ControllerError::input("Invalid input. Please enter a number."))?;
        MenuOption::ALL.iter().find(|o| o.number() as i64 == n).copied()
            .ok_or_else(|| ControllerError::input("Invalid option. Please choose between 1-7."))
    }
}

impl Display for MenuOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
