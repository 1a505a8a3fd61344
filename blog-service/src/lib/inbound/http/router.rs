use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::blogs::create_blog::create_blog;
use super::handlers::blogs::delete_blog::delete_blog;
use super::handlers::blogs::get_blog::get_blog;
use super::handlers::blogs::list_blogs::list_blogs;
use super::handlers::blogs::update_blog::update_blog;
use super::handlers::create_user::create_user;
use super::handlers::get_user::get_user;
use super::handlers::login::login;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::blog::ports::BlogServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub blog_service: Arc<dyn BlogServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    blog_service: Arc<dyn BlogServicePort>,
    auth_service: Arc<dyn AuthServicePort>,
) -> Router {
    let state = AppState {
        user_service,
        blog_service,
        auth_service,
    };

    let public_routes = Router::new()
        .route("/login", post(login))
        .route("/user", post(create_user));

    let protected_routes = Router::new()
        .route("/user/:user_id", get(get_user))
        .route("/blog", get(list_blogs).post(create_blog))
        .route(
            "/blog/:blog_id",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
