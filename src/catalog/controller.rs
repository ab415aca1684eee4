use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use utoipa_rapidoc::RapiDoc;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::openapi::get_openapi_json;
use crate::core::command::Command;
use crate::core::controller::{AppState, ErrorMessage, ServerError};

pub fn build_router(state: AppState) -> Router {
    let openapi_path = state.config.openapi_path.clone();
    let docs_path = state.config.docs_path.clone();
    Router::new()
        .route("/books", post(add_book).get(list_books))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .route(openapi_path.as_str(), get(get_openapi_json))
        .merge(RapiDoc::new(&openapi_path).path(&docs_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// A missing, unparsable or non-object body reads as an empty object, so that
// create reports the missing fields rather than a body error.
fn body_or_empty(json: Option<Json<Value>>) -> Value {
    match json {
        Some(Json(value)) if value.is_object() => value,
        _ => json!({}),
    }
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "Books",
    request_body = AddBookCommandRequest,
    responses(
        (status = 201, description = "Book created", body = BookDto),
        (status = 400, description = "Title or author missing", body = ErrorMessage),
    )
)]
pub async fn add_book(
    State(state): State<AppState>,
    json: Option<Json<Value>>) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(body_or_empty(json)).unwrap_or_default();
    let res = AddBookCommand::new(state.catalog_service.clone()).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

/// Retrieve a list of books with optional pagination and filtering
#[utoipa::path(
    get,
    path = "/books",
    tag = "Books",
    params(ListBooksCommandRequest),
    responses(
        (status = 200, description = "A list of books", body = ListBooksCommandResponse),
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(req): Query<ListBooksCommandRequest>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog_service.clone(), &state.config).execute(req).await?;
    Ok(Json(res))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "Books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book found", body = BookDto),
        (status = 404, description = "Book not found", body = ErrorMessage),
    )
)]
pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(book_id);
    let res = GetBookCommand::new(state.catalog_service.clone()).execute(req).await?;
    Ok(Json(res))
}

/// Update a book by ID
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "Books",
    params(("id" = i64, Path, description = "Book id")),
    request_body = UpdateBookCommandRequest,
    responses(
        (status = 200, description = "Book updated", body = BookDto),
        (status = 404, description = "Book not found", body = ErrorMessage),
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Option<Json<Value>>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let req = UpdateBookCommandRequest {
        book_id,
        ..serde_json::from_value::<UpdateBookCommandRequest>(body_or_empty(json)).unwrap_or_default()
    };
    let res = UpdateBookCommand::new(state.catalog_service.clone()).execute(req).await?;
    Ok(Json(res))
}

/// Delete a book by ID
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "Books",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = ErrorMessage),
    )
)]
pub async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest::new(book_id);
    let _ = RemoveBookCommand::new(state.catalog_service.clone()).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}
