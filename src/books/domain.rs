use crate::core::domain::Identifiable;

pub mod model;

pub(crate) const BOOK_NOT_FOUND: &str = "Book not found";

pub(crate) trait Book: Identifiable {
    fn author(&self) -> &str;

    // case-insensitive substring match against the author name
    fn is_written_by(&self, author: &str) -> bool {
        self.author().to_lowercase().contains(&author.to_lowercase())
    }
}
