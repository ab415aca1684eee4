use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;

pub fn create_catalog_service() -> Arc<dyn CatalogService> {
    let book_repo = factory::create_book_repository();
    Arc::new(CatalogServiceImpl::new(book_repo))
}
