//! `OpenAPI` document for the books API, generated from the handler annotations.

use std::sync::OnceLock;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use utoipa::OpenApi;
use crate::core::controller::ErrorMessage;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Books API",
        version = "1.0.0",
        description = "A simple CRUD API for books"
    ),
    paths(
        crate::catalog::controller::add_book,
        crate::catalog::controller::list_books,
        crate::catalog::controller::find_book_by_id,
        crate::catalog::controller::update_book,
        crate::catalog::controller::remove_book,
    ),
    components(
        schemas(
            crate::books::dto::BookDto,
            crate::catalog::command::add_book_cmd::AddBookCommandRequest,
            crate::catalog::command::update_book_cmd::UpdateBookCommandRequest,
            crate::catalog::command::list_books_cmd::ListBooksCommandResponse,
            crate::core::controller::ErrorMessage,
        )
    ),
    tags(
        (name = "Books", description = "Book catalog operations"),
    ),
)]
pub struct BooksApiDoc;

static OPENAPI_JSON_CACHE: OnceLock<String> = OnceLock::new();

/// Returns the generated `OpenAPI` document serialized as pretty JSON.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    if let Some(doc) = OPENAPI_JSON_CACHE.get() {
        return Ok(doc.clone());
    }

    let doc = serde_json::to_string_pretty(&BooksApiDoc::openapi())?;
    let _ = OPENAPI_JSON_CACHE.set(doc.clone());
    Ok(doc)
}

pub async fn get_openapi_json() -> Response {
    match openapi_json() {
        Ok(doc) => (StatusCode::OK, [(CONTENT_TYPE, "application/json")], doc).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorMessage::new(format!("failed to serialize OpenAPI document: {}", err).as_str())),
        ).into_response(),
    }
}
