//! Blog post endpoints. All of them sit behind the access-token gate.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::blog::errors::TitleError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::Creator;
use crate::domain::blog::models::Title;

pub mod create_blog;
pub mod delete_blog;
pub mod get_blog;
pub mod list_blogs;
pub mod update_blog;

/// Request body shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlogRequest {
    title: String,
    body: String,
    #[serde(default)]
    published: Option<bool>,
}

impl BlogRequest {
    fn parse_title(&self) -> Result<Title, ApiError> {
        Title::new(self.title.clone()).map_err(ApiError::from)
    }
}

impl From<TitleError> for ApiError {
    fn from(err: TitleError) -> Self {
        ApiError::UnprocessableEntity(format!("Invalid title: {}", err))
    }
}

fn parse_blog_id(raw: &str) -> Result<BlogId, ApiError> {
    BlogId::from_string(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogData {
    pub id: String,
    pub title: String,
    pub body: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub creator: CreatorData,
}

impl From<&Blog> for BlogData {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            title: blog.title.as_str().to_string(),
            body: blog.body.clone(),
            published: blog.published,
            created_at: blog.created_at,
            creator: (&blog.creator).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatorData {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&Creator> for CreatorData {
    fn from(creator: &Creator) -> Self {
        Self {
            id: creator.id.to_string(),
            name: creator.name.as_str().to_string(),
            email: creator.email.as_str().to_string(),
        }
    }
}
