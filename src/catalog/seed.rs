use tracing::info;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryResult;

// (title, author) pairs loaded at startup when preloading is enabled
pub const SEED_BOOKS: [(&str, &str); 7] = [
    ("Java Programming", "James Gosling"),
    ("Data Structures", "Mark Allen Weiss"),
    ("Algorithm Design", "Jon Kleinberg"),
    ("The 48 Laws of Power", "Robert Greene"),
    ("Mastery", "Robert Greene"),
    ("The 33 Strategies of War", "Robert Greene"),
    ("On the Origin of Species", "Charles Darwin"),
];

pub fn preload_books(catalog_service: &mut dyn CatalogService) -> LibraryResult<usize> {
    for (title, author) in SEED_BOOKS {
        let _ = catalog_service.add_book(&BookDto::new(title, author, None))?;
    }
    info!(count = SEED_BOOKS.len(), "preloaded catalog");
    Ok(SEED_BOOKS.len())
}
