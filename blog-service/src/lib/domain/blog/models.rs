use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::blog::errors::BlogIdError;
use crate::domain::blog::errors::TitleError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Name;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Blog unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(pub Uuid);

impl BlogId {
    /// Generate a new random blog ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a blog ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BlogIdError> {
        Uuid::parse_str(s)
            .map(BlogId)
            .map_err(|e| BlogIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BlogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Blog post aggregate.
#[derive(Debug, Clone)]
pub struct Blog {
    pub id: BlogId,
    pub title: Title,
    pub body: String,
    pub published: bool,
    pub creator: Creator,
    pub created_at: DateTime<Utc>,
}

/// Public view of the user who wrote a blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creator {
    pub id: UserId,
    pub name: Name,
    pub email: EmailAddress,
}

impl From<&User> for Creator {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Blog title value object with validation.
///
/// Trimmed, non-empty and at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    const MAX_LENGTH: usize = 200;

    /// Create a new validated title.
    ///
    /// # Errors
    /// * `Empty` - Title is blank
    /// * `TooLong` - Title exceeds 200 characters
    pub fn new(title: String) -> Result<Self, TitleError> {
        let title = title.trim();
        let length = title.chars().count();

        if length == 0 {
            Err(TitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(TitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a blog post. The author comes from the authenticated request.
#[derive(Debug)]
pub struct CreateBlogCommand {
    pub title: Title,
    pub body: String,
    pub published: bool,
}

/// Command to replace the content of a blog post.
///
/// `published` is left unchanged when `None`.
#[derive(Debug)]
pub struct UpdateBlogCommand {
    pub title: Title,
    pub body: String,
    pub published: Option<bool>,
}

/// Listing criteria for blog posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilter {
    /// Only posts with this publication state
    pub published: Option<bool>,
    /// Upper bound on the number of posts returned
    pub limit: Option<u32>,
}
