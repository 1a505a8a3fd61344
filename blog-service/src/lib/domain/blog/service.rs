use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::BlogError;
use super::models::Blog;
use super::models::BlogFilter;
use super::models::BlogId;
use super::models::CreateBlogCommand;
use super::models::Creator;
use super::models::UpdateBlogCommand;
use super::ports::BlogRepository;
use super::ports::BlogServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Concrete implementation of BlogServicePort.
///
/// Any authenticated user may read or modify any post; the access-token gate in
/// front of the HTTP routes is the only authorization step.
pub struct BlogService<BR>
where
    BR: BlogRepository,
{
    blog_repository: Arc<BR>,
}

impl<BR> BlogService<BR>
where
    BR: BlogRepository,
{
    pub fn new(blog_repository: Arc<BR>) -> Self {
        Self { blog_repository }
    }
}

#[async_trait]
impl<BR> BlogServicePort for BlogService<BR>
where
    BR: BlogRepository,
{
    async fn create_blog(
        &self,
        command: CreateBlogCommand,
        author: &User,
    ) -> Result<Blog, BlogError> {
        let blog = Blog {
            id: BlogId::new(),
            title: command.title,
            body: command.body,
            published: command.published,
            creator: Creator::from(author),
            created_at: Utc::now(),
        };

        let created = self.blog_repository.create(blog).await?;
        tracing::info!(blog_id = %created.id, user_id = %author.id, "Blog created");

        Ok(created)
    }

    async fn get_blog(&self, id: BlogId) -> Result<Blog, BlogError> {
        self.blog_repository
            .find_by_id(id)
            .await?
            .ok_or(BlogError::NotFound(id))
    }

    async fn list_blogs(&self, filter: BlogFilter) -> Result<Vec<Blog>, BlogError> {
        self.blog_repository.list(&filter).await
    }

    async fn list_blogs_by_creator(&self, creator_id: UserId) -> Result<Vec<Blog>, BlogError> {
        self.blog_repository.find_by_creator(creator_id).await
    }

    async fn update_blog(
        &self,
        id: BlogId,
        command: UpdateBlogCommand,
    ) -> Result<Blog, BlogError> {
        let mut blog = self
            .blog_repository
            .find_by_id(id)
            .await?
            .ok_or(BlogError::NotFound(id))?;

        blog.title = command.title;
        blog.body = command.body;
        if let Some(published) = command.published {
            blog.published = published;
        }

        let updated = self.blog_repository.update(blog).await?;
        tracing::info!(blog_id = %updated.id, "Blog updated");

        Ok(updated)
    }

    async fn delete_blog(&self, id: BlogId) -> Result<(), BlogError> {
        self.blog_repository.delete(id).await?;
        tracing::info!(blog_id = %id, "Blog deleted");

        Ok(())
    }
}
