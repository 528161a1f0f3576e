use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AuthorServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("author not found")]
    NotFound,
    #[error("conflicting update")]
    Conflict,
}

// The wire messages are part of the API contract, so the literal strings live
// here rather than in the variants' Display impls.
impl From<AuthorServiceError> for AppError {
    fn from(err: AuthorServiceError) -> Self {
        match err {
            AuthorServiceError::Invalid(msg) => AppError::BadRequest(msg),
            AuthorServiceError::NotFound => AppError::NotFound("Author not found".to_string()),
            AuthorServiceError::Conflict => AppError::BadRequest("Conflict error".to_string()),
            AuthorServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
