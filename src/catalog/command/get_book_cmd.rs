use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::command::parse_book_id;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct GetBookCommandResponse {
    book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let id = parse_book_id(req.book_id.as_str())?;
        self.catalog_service.find_book_by_id(id)
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};

    #[tokio::test]
    async fn test_should_run_get_book() {
        let svc = factory::create_catalog_service();
        let add_cmd = AddBookCommand::new(svc.clone());
        let get_cmd = GetBookCommand::new(svc);

        let res = add_cmd.execute(AddBookCommandRequest::new("Dune", "Herbert", Some(1965))).await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new(res.book.book_id.to_string())).await.expect("should get book");
        assert_eq!(res.book, loaded.book);
    }

    #[tokio::test]
    async fn test_should_not_find_unknown_or_malformed_id() {
        let get_cmd = GetBookCommand::new(factory::create_catalog_service());

        let err = get_cmd.execute(GetBookCommandRequest::new("9999".to_string())).await.expect_err("should not find book");
        assert!(matches!(err, CommandError::NotFound { .. }));
        let err = get_cmd.execute(GetBookCommandRequest::new("abc".to_string())).await.expect_err("should not find book");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
