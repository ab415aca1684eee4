use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::books::dto::{BookDto, BookPatchDto};
use crate::catalog::command::parse_book_id;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::utils::lenient::{optional_text, optional_year};

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookCommandRequest {
    #[serde(skip)]
    pub(crate) book_id: String,
    #[schema(example = "Dune Messiah")]
    #[serde(default, deserialize_with = "optional_text")]
    pub(crate) title: Option<String>,
    #[schema(example = "Frank Herbert")]
    #[serde(default, deserialize_with = "optional_text")]
    pub(crate) author: Option<String>,
    #[schema(example = 1969)]
    #[serde(default, deserialize_with = "optional_year")]
    pub(crate) published_year: Option<i64>,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, title: Option<&str>, author: Option<&str>, published_year: Option<i64>) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: title.map(str::to_string),
            author: author.map(str::to_string),
            published_year,
        }
    }
    pub fn build_patch(&self) -> BookPatchDto {
        BookPatchDto {
            title: self.title.clone(),
            author: self.author.clone(),
            published_year: self.published_year,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let id = parse_book_id(req.book_id.as_str())?;
        let patch = req.build_patch();
        self.catalog_service.update_book(id, &patch).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
