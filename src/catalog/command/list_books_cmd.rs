use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::PaginatedResult;

pub(crate) struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
    default_page: i64,
    default_page_size: i64,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>, config: &Configuration) -> Self {
        Self {
            catalog_service,
            default_page: config.default_page,
            default_page_size: config.default_page_size,
        }
    }
}

// Query values stay raw strings so that non-numeric input falls back to
// the defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBooksCommandRequest {
    /// Page number, starting at 1
    #[param(value_type = Option<i64>, example = 1)]
    pub(crate) page: Option<String>,
    /// Number of books per page
    #[param(value_type = Option<i64>, example = 10)]
    pub(crate) size: Option<String>,
    /// Filter books by author name (case-insensitive substring)
    pub(crate) author: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn new(page: Option<&str>, size: Option<&str>, author: Option<&str>) -> Self {
        Self {
            page: page.map(str::to_string),
            size: size.map(str::to_string),
            author: author.map(str::to_string),
        }
    }
}

fn number_or(value: Option<&str>, default: i64) -> i64 {
    value.and_then(|v| v.trim().parse::<i64>().ok()).unwrap_or(default)
}


#[derive(Debug, Serialize, ToSchema)]
pub struct ListBooksCommandResponse {
    #[schema(example = 1)]
    pub page: i64,
    #[schema(example = 10)]
    pub size: i64,
    #[schema(example = 1)]
    pub total: usize,
    pub data: Vec<BookDto>,
}

impl From<PaginatedResult<BookDto>> for ListBooksCommandResponse {
    fn from(other: PaginatedResult<BookDto>) -> Self {
        Self {
            page: other.page,
            size: other.page_size,
            total: other.total,
            data: other.records,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let page = number_or(req.page.as_deref(), self.default_page);
        let size = number_or(req.size.as_deref(), self.default_page_size);
        self.catalog_service.find_books(req.author.as_deref(), page, size)
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::from)
    }
}
