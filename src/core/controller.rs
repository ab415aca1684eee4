use std::sync::Arc;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) catalog_service: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog_service: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            catalog_service,
        }
    }
}

// ErrorMessage is the body of every failed response
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    #[schema(example = "Book not found")]
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub type ServerError = (StatusCode, Json<ErrorMessage>);

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let body = Json(ErrorMessage::new(err.message()));
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, body)
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, body)
            }
        }
    }
}
