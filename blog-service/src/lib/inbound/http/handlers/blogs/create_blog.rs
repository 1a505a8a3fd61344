use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::BlogData;
use super::BlogRequest;
use crate::domain::blog::models::CreateBlogCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// Create a blog post authored by the caller. `published` defaults to true.
pub async fn create_blog(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(body): Json<BlogRequest>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let command = CreateBlogCommand {
        title: body.parse_title()?,
        body: body.body,
        published: body.published.unwrap_or(true),
    };

    state
        .blog_service
        .create_blog(command, &user)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::CREATED, blog.into()))
}
