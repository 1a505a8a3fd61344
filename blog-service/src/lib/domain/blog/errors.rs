use thiserror::Error;

use crate::domain::blog::models::BlogId;
use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::NameError;

/// Error type for BlogId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlogIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error type for Title validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("Title is empty")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error type for all blog-related operations
#[derive(Debug, Clone, Error)]
pub enum BlogError {
    #[error("Invalid blog ID: {0}")]
    InvalidBlogId(#[from] BlogIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] TitleError),

    #[error("Blog with id {0} not found")]
    NotFound(BlogId),

    // Stored creator rows that no longer pass validation
    #[error("Invalid creator name: {0}")]
    InvalidCreatorName(#[from] NameError),

    #[error("Invalid creator email: {0}")]
    InvalidCreatorEmail(#[from] EmailError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
