use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_blog_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_blog(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let blog_id = parse_blog_id(&blog_id)?;

    state.blog_service.delete_blog(blog_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
