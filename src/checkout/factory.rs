use crate::catalog::domain::CatalogService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;

// The checkout service borrows the catalog it lends books from, so it is built
// per request like the commands that use it.
pub(crate) fn create_checkout_service<'a>(config: &Configuration,
                                          catalog_service: &'a mut dyn CatalogService) -> Box<dyn CheckoutService + 'a> {
    let publisher = create_publisher(config.branch_id.as_str());
    Box::new(CheckoutServiceImpl::new(config, catalog_service, publisher))
}
