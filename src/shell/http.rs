use std::any::Any;
use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, warn};

use crate::modules::votes::use_cases::delete_vote::inbound::http as delete_http;
use crate::modules::votes::use_cases::get_vote::inbound::http as get_http;
use crate::modules::votes::use_cases::list_votes::inbound::http as list_http;
use crate::modules::votes::use_cases::reports::inbound::http as reports_http;
use crate::modules::votes::use_cases::submit_vote::inbound::http as submit_http;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub fn router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api", votes_router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(cors_layer(allowed_origins))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn votes_router() -> Router<AppState> {
    Router::new()
        .route("/vote", post(submit_http::handle))
        .route("/votes", get(list_http::handle))
        .route("/votes/summary", get(reports_http::summary))
        .route(
            "/votes/{id}",
            get(get_http::handle).delete(delete_http::handle),
        )
        .route("/winners", get(reports_http::winners))
        .route("/admin-summary", get(reports_http::admin))
        .method_not_allowed_fallback(route_not_found)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Voting System API is running!" }))
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found")
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| {
            // a wildcard cannot be combined with credentials
            if origin.as_str() == "*" {
                warn!("Ignoring wildcard CORS origin");
                return false;
            }
            true
        })
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 60))
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(detail, "Request handler panicked");
    ApiError::Internal("Something went wrong!").into_response()
}
