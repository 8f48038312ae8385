pub mod menu;
pub mod prompt;

use std::io;
use tracing::{debug, error};
use crate::catalog::controller::{add_book, display_books, remove_book, search_books};
use crate::checkout::controller::{issue_book, return_book};
use crate::console::menu::MenuOption;
use crate::console::prompt::Prompt;
use crate::core::controller::{AppState, ControllerError, ControllerResult};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

// Runs the interactive menu over stdin/stdout until the user exits.
// Fails only when the console streams fail or input ends.
pub fn run(config: &Configuration) -> LibraryResult<()> {
    let mut state = AppState::new(config)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    let mut prompt = Prompt::new(&mut input, &mut output);
    Session::new(&mut state, &mut prompt).run().map_err(|err| {
        error!(error = %err, "console session aborted");
        err.into()
    })
}

pub(crate) struct Session<'s, 'p> {
    state: &'s mut AppState,
    prompt: &'s mut Prompt<'p>,
}

impl<'s, 'p> Session<'s, 'p> {
    pub(crate) fn new(state: &'s mut AppState, prompt: &'s mut Prompt<'p>) -> Self {
        Self {
            state,
            prompt,
        }
    }

    pub(crate) fn run(&mut self) -> ControllerResult<()> {
        self.prompt.say("Welcome to the Library Management System!")?;
        loop {
            self.display_menu()?;
            let choice = self.prompt.ask("Choose an option (1-7): ")?;
            let res = match MenuOption::parse(choice.as_str()) {
                Ok(MenuOption::Exit) => {
                    self.prompt.say("Thank you for using the Library Management System!")?;
                    return Ok(());
                }
                Ok(option) => self.dispatch(option),
                Err(err) => Err(err),
            };
            if let Err(err) = res {
                if err.is_fatal() {
                    return Err(err);
                }
                // rejections are expected outcomes and stay below the default level
                if let ControllerError::Command(cmd_err) = &err {
                    debug!(error = ?cmd_err, "command rejected");
                }
                self.prompt.say(err.to_string().as_str())?;
            }
            if self.state.config.pause_after_command {
                self.prompt.pause()?;
            }
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        self.prompt.say("\n=== Library Management System ===")?;
        for option in MenuOption::ALL.iter() {
            self.prompt.say(option.to_string().as_str())?;
        }
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> ControllerResult<()> {
        match option {
            MenuOption::DisplayBooks => display_books(self.state, self.prompt),
            MenuOption::IssueBook => issue_book(self.state, self.prompt),
            MenuOption::ReturnBook => return_book(self.state, self.prompt),
            MenuOption::AddBook => add_book(self.state, self.prompt),
            MenuOption::DeleteBook => remove_book(self.state, self.prompt),
            MenuOption::SearchBooks => search_books(self.state, self.prompt),
            MenuOption::Exit => Ok(()),
        }
    }
}
