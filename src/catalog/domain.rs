pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, BookPatchDto};
use crate::core::library::{LibraryResult, PaginatedResult};

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: i64) -> LibraryResult<()>;
    async fn update_book(&self, id: i64, patch: &BookPatchDto) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto>;
    async fn find_books(&self, author: Option<&str>, page: i64, page_size: i64) -> LibraryResult<PaginatedResult<BookDto>>;
}
