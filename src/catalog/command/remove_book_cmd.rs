use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::command::parse_book_id;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let id = parse_book_id(req.book_id.as_str())?;
        self.catalog_service.remove_book(id).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let svc = factory::create_catalog_service();
        let add_cmd = AddBookCommand::new(svc.clone());
        let get_cmd = GetBookCommand::new(svc.clone());
        let remove_cmd = RemoveBookCommand::new(svc);

        let added = add_cmd.execute(AddBookCommandRequest::new("Dune", "Herbert", None))
            .await.expect("should add book");
        let book_id = added.book.book_id.to_string();
        let _ = remove_cmd.execute(RemoveBookCommandRequest::new(book_id.clone())).await.expect("should remove book");

        let err = get_cmd.execute(GetBookCommandRequest::new(book_id.clone())).await.expect_err("should not find book");
        assert!(matches!(err, CommandError::NotFound { .. }));
        let err = remove_cmd.execute(RemoveBookCommandRequest::new(book_id)).await.expect_err("should not remove twice");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }

}
