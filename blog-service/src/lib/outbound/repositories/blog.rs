use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogFilter;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::Creator;
use crate::domain::blog::models::Title;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Name;
use crate::domain::user::models::UserId;

/// Blog storage in PostgreSQL. Creator details are joined from `users` on read.
pub struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_BLOGS: &str = r#"
    SELECT b.id, b.title, b.body, b.published, b.created_at,
           u.id AS creator_id, u.name AS creator_name, u.email AS creator_email
    FROM blogs b
    JOIN users u ON u.id = b.user_id
"#;

#[derive(FromRow)]
struct BlogRow {
    id: Uuid,
    title: String,
    body: String,
    published: bool,
    created_at: DateTime<Utc>,
    creator_id: Uuid,
    creator_name: String,
    creator_email: String,
}

impl TryFrom<BlogRow> for Blog {
    type Error = BlogError;

    fn try_from(row: BlogRow) -> Result<Self, Self::Error> {
        Ok(Blog {
            id: BlogId(row.id),
            title: Title::new(row.title)?,
            body: row.body,
            published: row.published,
            creator: Creator {
                id: UserId(row.creator_id),
                name: Name::new(row.creator_name)?,
                email: EmailAddress::new(row.creator_email)?,
            },
            created_at: row.created_at,
        })
    }
}

fn into_blogs(rows: Vec<BlogRow>) -> Result<Vec<Blog>, BlogError> {
    rows.into_iter().map(Blog::try_from).collect()
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn create(&self, blog: Blog) -> Result<Blog, BlogError> {
        sqlx::query(
            r#"
            INSERT INTO blogs (id, user_id, title, body, published, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(blog.id.0)
        .bind(blog.creator.id.0)
        .bind(blog.title.as_str())
        .bind(&blog.body)
        .bind(blog.published)
        .bind(blog.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        Ok(blog)
    }

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, BlogError> {
        let query = format!("{} WHERE b.id = $1", SELECT_BLOGS);

        sqlx::query_as::<_, BlogRow>(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| BlogError::DatabaseError(e.to_string()))?
            .map(Blog::try_from)
            .transpose()
    }

    async fn list(&self, filter: &BlogFilter) -> Result<Vec<Blog>, BlogError> {
        // LIMIT NULL is no limit in PostgreSQL
        let query = format!(
            "{} WHERE ($1::BOOLEAN IS NULL OR b.published = $1) \
             ORDER BY b.created_at DESC LIMIT $2",
            SELECT_BLOGS
        );

        let rows = sqlx::query_as::<_, BlogRow>(&query)
            .bind(filter.published)
            .bind(filter.limit.map(i64::from))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        into_blogs(rows)
    }

    async fn find_by_creator(&self, creator_id: UserId) -> Result<Vec<Blog>, BlogError> {
        let query = format!(
            "{} WHERE b.user_id = $1 ORDER BY b.created_at DESC",
            SELECT_BLOGS
        );

        let rows = sqlx::query_as::<_, BlogRow>(&query)
            .bind(creator_id.0)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        into_blogs(rows)
    }

    async fn update(&self, blog: Blog) -> Result<Blog, BlogError> {
        let result = sqlx::query(
            r#"
            UPDATE blogs
            SET title = $2, body = $3, published = $4
            WHERE id = $1
            "#,
        )
        .bind(blog.id.0)
        .bind(blog.title.as_str())
        .bind(&blog.body)
        .bind(blog.published)
        .execute(&self.pool)
        .await
        .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BlogError::NotFound(blog.id));
        }

        Ok(blog)
    }

    async fn delete(&self, id: BlogId) -> Result<(), BlogError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| BlogError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BlogError::NotFound(id));
        }

        Ok(())
    }
}
