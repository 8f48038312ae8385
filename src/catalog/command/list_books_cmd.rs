use serde::Serialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::InventoryDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub(crate) fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ListBooksCommandRequest {}

impl ListBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub inventory: InventoryDto,
}

impl ListBooksCommandResponse {
    pub fn new(inventory: InventoryDto) -> Self {
        Self {
            inventory,
        }
    }
}

impl<'a> Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'a> {
    fn execute(&mut self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.inventory().map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::catalog::seed::preload_books;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_list_books() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let res = ListBooksCommand::new(svc.as_ref())
            .execute(ListBooksCommandRequest::new()).expect("should list books");
        assert!(res.inventory.is_empty());

        let _ = preload_books(svc.as_mut()).expect("should seed");
        let res = ListBooksCommand::new(svc.as_ref())
            .execute(ListBooksCommandRequest::new()).expect("should list books");
        assert_eq!(7, res.inventory.total);
        assert_eq!("Algorithm Design", res.inventory.books[0].title.as_str());
    }
}
