pub mod add_book_cmd;
pub mod get_book_cmd;
pub mod list_books_cmd;
pub mod remove_book_cmd;
pub mod update_book_cmd;

use crate::books::domain::BOOK_NOT_FOUND;
use crate::core::command::CommandError;

// Path ids that are not integers cannot match any book.
pub(crate) fn parse_book_id(book_id: &str) -> Result<i64, CommandError> {
    book_id.trim().parse::<i64>().map_err(|_| CommandError::NotFound { message: BOOK_NOT_FOUND.to_string() })
}
