pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookPatchDto;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    async fn find_by_author(&self, author: Option<&str>,
                            page: i64, page_size: i64) -> LibraryResult<PaginatedResult<BookEntity>>;

    // Applies the patch to the stored book as one step, so concurrent patches
    // of different fields all survive.
    async fn patch(&self, id: i64, patch: &BookPatchDto) -> LibraryResult<BookEntity>;
}
