pub mod home;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ai::handlers;
use crate::notifications;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_handler))
        // AI task routes
        .route("/ai/summary", post(handlers::handle_summary))
        .route("/ai/post_social", post(handlers::handle_post_social))
        .route("/ai/screen_resume", post(handlers::handle_screen_resume))
        // Notifications
        .route(
            "/notification/send",
            post(notifications::handle_send_notification),
        )
        .with_state(state)
}
