use std::fmt;
use std::fmt::{Display, Formatter};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::catalog::seed::preload_books;
use crate::console::prompt::Prompt;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

// AppState is owned by the console session: the configuration and the single
// catalog every command works on.
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) catalog: Box<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: &Configuration) -> LibraryResult<AppState> {
        let mut catalog = create_catalog_service(config);
        if config.preload_books {
            let _ = preload_books(catalog.as_mut())?;
        }
        Ok(AppState {
            config: config.clone(),
            catalog,
        })
    }
}

#[derive(Debug)]
pub(crate) enum ControllerError {
    // unusable console input, the user is asked again
    Input {
        message: String,
    },
    Command(CommandError),
    // the console streams failed or were closed
    Stream {
        message: String,
    },
}

pub(crate) type ControllerResult<T> = Result<T, ControllerError>;

impl ControllerError {
    pub fn input(message: &str) -> ControllerError {
        ControllerError::Input { message: message.to_string() }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, ControllerError::Stream { .. })
    }
}

impl From<CommandError> for ControllerError {
    fn from(err: CommandError) -> Self {
        ControllerError::Command(err)
    }
}

impl From<std::io::Error> for ControllerError {
    fn from(err: std::io::Error) -> Self {
        ControllerError::Stream { message: format!("console stream failed: {}", err) }
    }
}

impl From<ControllerError> for LibraryError {
    fn from(err: ControllerError) -> Self {
        match err {
            ControllerError::Input { message } => LibraryError::validation(message.as_str(), None),
            ControllerError::Command(err) => LibraryError::runtime(err.to_string().as_str(), None),
            ControllerError::Stream { message } => LibraryError::runtime(message.as_str(), Some("stream".to_string())),
        }
    }
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::Input { message } => write!(f, "{}", message),
            ControllerError::Command(err) => write!(f, "Error: {}", err),
            ControllerError::Stream { message } => write!(f, "Error: {}", message),
        }
    }
}

// Lists the copies behind an ambiguous lookup and lets the user pick one.
// Returns the chosen book id, or None when the user presses Enter to cancel.
pub(crate) fn select_candidate(prompt: &mut Prompt, header: &str, candidates: &[BookDto],
                               question: &str) -> ControllerResult<Option<String>> {
    prompt.say(header)?;
    for (i, book) in candidates.iter().enumerate() {
        prompt.say(format!("{}. {}", i + 1, book).as_str())?;
    }
    let answer = prompt.ask(question)?;
    if answer.is_empty() {
        return Ok(None);
    }
    match answer.parse::<usize>() {
        Ok(n) if n >= 1 && n <= candidates.len() => Ok(Some(candidates[n - 1].book_id.to_string())),
        _ => Err(ControllerError::input(
            format!("Invalid selection. Please choose between 1-{}.", candidates.len()).as_str())),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, ErrorKind};
    use crate::books::dto::BookDto;
    use crate::console::prompt::Prompt;
    use crate::core::command::CommandError;
    use crate::core::controller::{AppState, ControllerError, select_candidate};
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_build_state_with_seed() {
        let state = AppState::new(&Configuration::new("test")).expect("should build state");
        assert_eq!(7, state.catalog.inventory().expect("should list").total);

        let mut config = Configuration::new("test");
        config.preload_books = false;
        let state = AppState::new(&config).expect("should build state");
        assert_eq!(0, state.catalog.inventory().expect("should list").total);
    }

    #[test]
    fn test_should_classify_errors() {
        assert!(!ControllerError::input("bad").is_fatal());
        assert!(!ControllerError::from(CommandError::NotFound { message: "x".to_string() }).is_fatal());
        assert!(ControllerError::from(std::io::Error::new(ErrorKind::UnexpectedEof, "closed")).is_fatal());
        assert_eq!("Error: Book not found: Dune",
                   ControllerError::from(CommandError::NotFound { message: "Book not found: Dune".to_string() }).to_string());
    }

    #[test]
    fn test_should_select_candidate() {
        let candidates = vec![BookDto::new("Dune", "Frank Herbert", None),
                              BookDto::new("Dune", "Frank Herbert", Some("isbn"))];
        let mut input = Cursor::new("2\n");
        let mut output: Vec<u8> = Vec::new();
        let mut prompt = Prompt::new(&mut input, &mut output);
        let chosen = select_candidate(&mut prompt, "Multiple copies:", &candidates, "Pick: ")
            .expect("should select");
        assert_eq!(Some(candidates[1].book_id.to_string()), chosen);

        let text = String::from_utf8(output).expect("utf8 output");
        assert!(text.contains("1. Title: Dune, Author: Frank Herbert (Available)"));
        assert!(text.contains("2. Title: Dune, Author: Frank Herbert, ISBN: isbn (Available)"));
    }

    #[test]
    fn test_should_cancel_or_reject_selection() {
        let candidates = vec![BookDto::new("Dune", "Frank Herbert", None)];
        let mut input = Cursor::new("\n5\n");
        let mut output: Vec<u8> = Vec::new();
        let mut prompt = Prompt::new(&mut input, &mut output);
        assert_eq!(None, select_candidate(&mut prompt, "h", &candidates, "q").expect("should cancel"));
        let res = select_candidate(&mut prompt, "h", &candidates, "q");
        assert!(matches!(res, Err(ControllerError::Input { .. })));
    }
}
