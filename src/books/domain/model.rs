use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the stored form of a book in the catalog; its id is assigned
// by the repository when the book is created and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub published_year: Option<i64>,
}

#[cfg(test)]
impl BookEntity {
    pub fn new(title: &str, author: &str, published_year: Option<i64>) -> Self {
        Self {
            book_id: 0,
            title: title.to_string(),
            author: author.to_string(),
            published_year,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}

impl Book for BookEntity {
    fn author(&self) -> &str {
        self.author.as_str()
    }
}
