use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, BookPatchDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};

pub(crate) const REQUIRED_FIELDS_MESSAGE: &str = "Title and author are required";

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        if !book.has_required_fields() {
            return Err(LibraryError::validation(REQUIRED_FIELDS_MESSAGE));
        }
        let created = self.book_repository.create(&BookEntity::from(book)).await?;
        info!(book_id = created.id(), "added book");
        Ok(BookDto::from(&created))
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<()> {
        self.book_repository.delete(id).await?;
        info!(book_id = id, "removed book");
        Ok(())
    }

    async fn update_book(&self, id: i64, patch: &BookPatchDto) -> LibraryResult<BookDto> {
        let updated = self.book_repository.patch(id, patch).await?;
        info!(book_id = id, "updated book");
        Ok(BookDto::from(&updated))
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn find_books(&self, author: Option<&str>, page: i64, page_size: i64) -> LibraryResult<PaginatedResult<BookDto>> {
        let res = self.book_repository.find_by_author(author, page, page_size).await?;
        debug!(page, page_size, total = res.total, "listed books");
        Ok(res.map(|b| BookDto::from(b)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::{BookDto, BookPatchDto};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::library::LibraryError;

    fn catalog_svc() -> Arc<dyn CatalogService> {
        factory::create_catalog_service()
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = catalog_svc();

        let book = BookDto::new("Dune", "Herbert", None);
        let added = catalog_svc.add_book(&book).await.expect("should add book");
        assert_eq!(1, added.book_id);

        let loaded = catalog_svc.find_book_by_id(added.book_id).await.expect("should return book");
        assert_eq!(added, loaded);
    }

    #[tokio::test]
    async fn test_should_assign_strictly_increasing_ids() {
        let catalog_svc = catalog_svc();

        let mut last = 0;
        for i in 0..5 {
            let added = catalog_svc.add_book(&BookDto::new(format!("title {}", i).as_str(), "author", None))
                .await.expect("should add book");
            assert!(added.book_id > last);
            last = added.book_id;
        }
    }

    #[tokio::test]
    async fn test_should_reject_book_without_title_or_author() {
        let catalog_svc = catalog_svc();

        let res = catalog_svc.add_book(&BookDto::new("", "Herbert", None)).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        let res = catalog_svc.add_book(&BookDto::new("Dune", "", None)).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));

        let page = catalog_svc.find_books(None, 1, 10).await.expect("should list books");
        assert_eq!(0, page.total);
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = catalog_svc();

        let added = catalog_svc.add_book(&BookDto::new("Dune", "Herbert", Some(1965))).await.expect("should add book");

        let patch = BookPatchDto { author: Some("X".to_string()), ..Default::default() };
        let updated = catalog_svc.update_book(added.book_id, &patch).await.expect("should update book");
        assert_eq!("X", updated.author.as_str());
        assert_eq!("Dune", updated.title.as_str());
        assert_eq!(Some(1965), updated.published_year);

        let loaded = catalog_svc.find_book_by_id(added.book_id).await.expect("should return book");
        assert_eq!(updated, loaded);
    }

    #[tokio::test]
    async fn test_should_not_update_missing_book() {
        let catalog_svc = catalog_svc();
        let res = catalog_svc.update_book(9999, &BookPatchDto::default()).await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_find_books_by_author() {
        let catalog_svc = catalog_svc();

        let _ = catalog_svc.add_book(&BookDto::new("The Hobbit", "J.R.R. Tolkien", Some(1937))).await.expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("Dune", "Frank Herbert", Some(1965))).await.expect("should add book");
        let res = catalog_svc.find_books(Some("tolkien"), 1, 10).await.expect("should return books");
        assert_eq!(1, res.total);
        assert_eq!("The Hobbit", res.records[0].title.as_str());
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = catalog_svc();

        let added = catalog_svc.add_book(&BookDto::new("Dune", "Herbert", None)).await.expect("should add book");
        let _ = catalog_svc.add_book(&BookDto::new("Emma", "Austen", None)).await.expect("should add book");

        let _ = catalog_svc.remove_book(added.book_id).await.expect("should remove book");

        let loaded = catalog_svc.find_book_by_id(added.book_id).await;
        assert!(loaded.is_err());
        let page = catalog_svc.find_books(None, 1, 10).await.expect("should list books");
        assert_eq!(1, page.total);
        assert!(matches!(catalog_svc.remove_book(added.book_id).await, Err(LibraryError::NotFound { .. })));
    }
}
