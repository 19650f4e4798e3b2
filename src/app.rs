use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/mood/:label", post(handlers::mood_record_form))
        .route("/api/mood", post(handlers::record_mood))
        .route("/api/history", get(handlers::get_history))
        .route("/api/analytics", get(handlers::get_analytics))
        .route("/api/playlist", get(handlers::get_playlist))
        .route("/api/moods", get(handlers::get_moods))
        .route("/api/profile", get(handlers::get_profile).put(handlers::put_profile))
        .with_state(state)
}
