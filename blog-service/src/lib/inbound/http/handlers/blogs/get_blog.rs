use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_blog_id;
use super::BlogData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_blog(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let blog_id = parse_blog_id(&blog_id)?;

    state
        .blog_service
        .get_blog(blog_id)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::OK, blog.into()))
}
