use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::blogs::BlogData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::blog::models::Blog;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Show a user together with every blog post they wrote.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<GetUserResponseData>, ApiError> {
    let user_id = UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let user = state.user_service.get_user(&user_id).await?;
    let blogs = state.blog_service.list_blogs_by_creator(user.id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        GetUserResponseData::new(&user, &blogs),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetUserResponseData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub blogs: Vec<BlogData>,
}

impl GetUserResponseData {
    fn new(user: &User, blogs: &[Blog]) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
            blogs: blogs.iter().map(BlogData::from).collect(),
        }
    }
}
