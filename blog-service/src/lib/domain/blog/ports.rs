use async_trait::async_trait;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogFilter;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::CreateBlogCommand;
use crate::domain::blog::models::UpdateBlogCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for blog domain service operations.
#[async_trait]
pub trait BlogServicePort: Send + Sync + 'static {
    /// Create a blog post authored by `author`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_blog(&self, command: CreateBlogCommand, author: &User)
        -> Result<Blog, BlogError>;

    /// Retrieve a blog post.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_blog(&self, id: BlogId) -> Result<Blog, BlogError>;

    /// List blog posts, newest first.
    async fn list_blogs(&self, filter: BlogFilter) -> Result<Vec<Blog>, BlogError>;

    /// List every blog post written by one user, newest first.
    async fn list_blogs_by_creator(&self, creator_id: UserId) -> Result<Vec<Blog>, BlogError>;

    /// Replace title and body (and optionally the publication state) of a blog post.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_blog(&self, id: BlogId, command: UpdateBlogCommand)
        -> Result<Blog, BlogError>;

    /// Delete a blog post.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_blog(&self, id: BlogId) -> Result<(), BlogError>;
}

/// Persistence operations for blog aggregate.
#[async_trait]
pub trait BlogRepository: Send + Sync + 'static {
    async fn create(&self, blog: Blog) -> Result<Blog, BlogError>;

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, BlogError>;

    async fn list(&self, filter: &BlogFilter) -> Result<Vec<Blog>, BlogError>;

    async fn find_by_creator(&self, creator_id: UserId) -> Result<Vec<Blog>, BlogError>;

    /// Persist title, body and publication state.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    async fn update(&self, blog: Blog) -> Result<Blog, BlogError>;

    /// # Errors
    /// * `NotFound` - Blog does not exist
    async fn delete(&self, id: BlogId) -> Result<(), BlogError>;
}
