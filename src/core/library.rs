use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str) -> LibraryError {
        LibraryError::Validation { message: message.to_string() }
    }
}

impl std::error::Error for LibraryError {}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } | LibraryError::Validation { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// It defines abstraction for a window of records over a filtered collection
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // The 1-based page number used for the window
    pub page: i64,
    // page size used for the window
    pub page_size: i64,
    // number of matching records before windowing
    pub total: usize,
    // list of records in the window
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: i64, page_size: i64, total: usize, records: Vec<T>) -> Self {
        PaginatedResult {
            page,
            page_size,
            total,
            records,
        }
    }

    pub(crate) fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> PaginatedResult<U> {
        PaginatedResult {
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            records: self.records.iter().map(f).collect(),
        }
    }
}

// Computes the [start, end) range of a page over `len` records. Pages and sizes
// below one select nothing.
pub(crate) fn page_window(page: i64, page_size: i64, len: usize) -> Option<(usize, usize)> {
    if page < 1 || page_size < 1 {
        return None;
    }
    let start = usize::try_from((page - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
    if start >= len {
        return None;
    }
    let size = usize::try_from(page_size).unwrap_or(usize::MAX);
    Some((start, start.saturating_add(size).min(len)))
}
