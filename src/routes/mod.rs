pub mod auth;
pub mod notifications;
pub mod subscriptions;
pub mod summary;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/auth/forgot-password", post(auth::forgot_password))
        .route("/api/v1/auth/reset-password", post(auth::reset_password))
        // Subscriptions
        .route(
            "/api/v1/subscriptions",
            get(subscriptions::list).post(subscriptions::create),
        )
        .route(
            "/api/v1/subscriptions/{id}",
            get(subscriptions::get)
                .put(subscriptions::update)
                .delete(subscriptions::delete),
        )
        .route(
            "/api/v1/subscriptions/{id}/payments",
            get(subscriptions::payments),
        )
        // Notifications
        .route("/api/v1/notifications", get(notifications::list))
        .route(
            "/api/v1/notifications/read-all",
            put(notifications::mark_all_read),
        )
        .route(
            "/api/v1/notifications/{id}/read",
            put(notifications::mark_read),
        )
        .route(
            "/api/v1/notifications/settings",
            get(notifications::get_settings).put(notifications::update_settings),
        )
        // Summary
        .route("/api/v1/summary", get(summary::spending))
        .route("/api/v1/summary/categories", get(summary::categories))
}
