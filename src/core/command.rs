use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::NotFound { message } => message,
            CommandError::Validation { message } => message,
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message } => {
                CommandError::Validation { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_convert_library_error() {
        let err = CommandError::from(LibraryError::not_found("Book not found"));
        assert!(matches!(err, CommandError::NotFound { .. }));
        assert_eq!("Book not found", err.message());

        let err = CommandError::from(LibraryError::validation("Title and author are required"));
        assert!(matches!(err, CommandError::Validation { .. }));
        assert_eq!("Title and author are required", err.message());

        assert_eq!("Book not found", CommandError::NotFound { message: "Book not found".to_string() }.message());
    }
}
