use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::parse_blog_id;
use super::BlogData;
use super::BlogRequest;
use crate::domain::blog::models::UpdateBlogCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Replace title and body of a post. Omitting `published` keeps its current value.
pub async fn update_blog(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
    Json(body): Json<BlogRequest>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let blog_id = parse_blog_id(&blog_id)?;

    let command = UpdateBlogCommand {
        title: body.parse_title()?,
        body: body.body,
        published: body.published,
    };

    state
        .blog_service
        .update_blog(blog_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::ACCEPTED, blog.into()))
}
