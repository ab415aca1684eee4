use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::books::domain::{Book, BOOK_NOT_FOUND};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookPatchDto;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{page_window, LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;

pub(crate) const AUTHOR_PREDICATE: &str = "author";

// Catalog holds books in insertion order together with the next identifier
// to hand out. next_id only grows, so ids of deleted books are never reused.
#[derive(Debug)]
struct Catalog {
    books: Vec<BookEntity>,
    next_id: i64,
}

impl Catalog {
    fn position(&self, id: i64) -> Option<usize> {
        self.books.iter().position(|b| b.id() == id)
    }
}

#[derive(Debug)]
pub(crate) struct MemoryBookRepository {
    catalog: RwLock<Catalog>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            catalog: RwLock::new(Catalog { books: Vec::new(), next_id: 1 }),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut catalog = self.catalog.write().await;
        let book = BookEntity { book_id: catalog.next_id, ..entity.clone() };
        catalog.next_id += 1;
        catalog.books.push(book.clone());
        Ok(book)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut catalog = self.catalog.write().await;
        let ndx = catalog.position(entity.id()).ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))?;
        catalog.books[ndx] = entity.clone();
        Ok(entity.clone())
    }

    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        let catalog = self.catalog.read().await;
        catalog.books.iter()
            .find(|b| b.id() == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))
    }

    async fn delete(&self, id: i64) -> LibraryResult<()> {
        let mut catalog = self.catalog.write().await;
        let ndx = catalog.position(id).ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))?;
        catalog.books.remove(ndx);
        Ok(())
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: i64, page_size: i64) -> LibraryResult<PaginatedResult<BookEntity>> {
        let catalog = self.catalog.read().await;
        let author = predicate.get(AUTHOR_PREDICATE).filter(|a| !a.is_empty());
        let matched: Vec<&BookEntity> = catalog.books.iter()
            .filter(|b| author.map_or(true, |a| b.is_written_by(a)))
            .collect();
        let records = match page_window(page, page_size, matched.len()) {
            Some((start, end)) => matched[start..end].iter().map(|b| (*b).clone()).collect(),
            None => vec![],
        };
        Ok(PaginatedResult::new(page, page_size, matched.len(), records))
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_author(&self, author: Option<&str>,
                            page: i64, page_size: i64) -> LibraryResult<PaginatedResult<BookEntity>> {
        let mut predicate = HashMap::new();
        if let Some(author) = author {
            predicate.insert(AUTHOR_PREDICATE.to_string(), author.to_string());
        }
        self.query(&predicate, page, page_size).await
    }

    async fn patch(&self, id: i64, patch: &BookPatchDto) -> LibraryResult<BookEntity> {
        let mut catalog = self.catalog.write().await;
        let ndx = catalog.position(id).ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))?;
        let book = &mut catalog.books[ndx];
        patch.apply_to(book);
        Ok(book.clone())
    }
}
