use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use super::handlers::MISSING_TOKEN_DETAIL;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;

/// Request extension holding the user resolved from the bearer token.
///
/// Only inserted by [`authenticate`]; handlers behind the gate extract it with
/// `Extension<CurrentUser>`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that resolves the bearer token to a stored user.
///
/// Rejects with 401 before the handler runs when the token is absent, invalid,
/// expired, or names a user that no longer exists.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(req.headers()).ok_or_else(|| {
        tracing::warn!(uri = %req.uri(), "Request without bearer token rejected");
        ApiError::Unauthorized(MISSING_TOKEN_DETAIL.to_string()).into_response()
    })?;

    let user = state
        .auth_service
        .current_user(token)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    tracing::debug!(user_id = %user.id, "Request authenticated");
    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// Token part of an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; an empty token counts as absent.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
