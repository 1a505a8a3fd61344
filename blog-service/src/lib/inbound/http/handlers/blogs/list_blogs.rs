use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::BlogData;
use crate::domain::blog::models::BlogFilter;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// List blog posts, newest first.
pub async fn list_blogs(
    State(state): State<AppState>,
    Query(query): Query<ListBlogsQuery>,
) -> Result<ApiSuccess<Vec<BlogData>>, ApiError> {
    let filter = BlogFilter {
        published: query.published,
        limit: query.limit,
    };

    state
        .blog_service
        .list_blogs(filter)
        .await
        .map_err(ApiError::from)
        .map(|blogs| ApiSuccess::new(StatusCode::OK, blogs.iter().map(BlogData::from).collect()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListBlogsQuery {
    published: Option<bool>,
    limit: Option<u32>,
}
