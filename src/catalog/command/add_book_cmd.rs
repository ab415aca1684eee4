use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::utils::lenient::{optional_text, optional_year};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddBookCommandRequest {
    #[schema(example = "Dune")]
    #[serde(default, deserialize_with = "optional_text")]
    pub(crate) title: Option<String>,
    #[schema(example = "Frank Herbert")]
    #[serde(default, deserialize_with = "optional_text")]
    pub(crate) author: Option<String>,
    #[schema(example = 1965)]
    #[serde(default, deserialize_with = "optional_year")]
    pub(crate) published_year: Option<i64>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, published_year: Option<i64>) -> Self {
        Self {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            published_year,
        }
    }
    pub fn build_book(&self) -> BookDto {
        BookDto::new(
            self.title.as_deref().unwrap_or_default(),
            self.author.as_deref().unwrap_or_default(),
            self.published_year)
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
