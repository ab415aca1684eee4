use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::books::domain::model::BookEntity;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    #[serde(rename = "id")]
    #[schema(example = 1)]
    pub book_id: i64,
    #[schema(example = "Dune")]
    pub title: String,
    #[schema(example = "Frank Herbert")]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1965)]
    pub published_year: Option<i64>,
}

impl BookDto {
    pub fn new(title: &str, author: &str, published_year: Option<i64>) -> BookDto {
        BookDto {
            book_id: 0,
            title: title.to_string(),
            author: author.to_string(),
            published_year,
        }
    }

    pub(crate) fn has_required_fields(&self) -> bool {
        !self.title.is_empty() && !self.author.is_empty()
    }
}

// BookPatchDto carries the fields of a partial update; only fields that are
// present and non-empty are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPatchDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_year: Option<i64>,
}

impl BookPatchDto {
    pub(crate) fn apply_to(&self, book: &mut BookEntity) {
        if let Some(title) = self.title.as_ref().filter(|t| !t.is_empty()) {
            book.title = title.to_string();
        }
        if let Some(author) = self.author.as_ref().filter(|a| !a.is_empty()) {
            book.author = author.to_string();
        }
        if let Some(year) = self.published_year.filter(|y| *y != 0) {
            book.published_year = Some(year);
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            published_year: other.published_year,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            published_year: other.published_year,
        }
    }
}
