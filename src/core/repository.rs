use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::{LibraryResult, PaginatedResult};

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, the repository assigns its identifier
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // updates an entity
    async fn update(&self, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, id: i64) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: i64) -> LibraryResult<()>;

    // find by predicate, windowed by page
    async fn query(&self, predicate: &HashMap<String, String>,
                   page: i64, page_size: i64) -> LibraryResult<PaginatedResult<Entity>>;
}
