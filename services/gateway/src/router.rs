use crate::handlers::{candidates, matches, swipe, ws};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/swipes", post(swipe::submit_swipe))
        .route("/candidates", get(candidates::list_candidates))
        .route("/matches", get(matches::list_matches))
        .route(
            "/matches/{id}/messages",
            get(matches::get_messages).post(matches::send_message),
        )
        .route("/ws", get(ws::ws_handler));

    Router::new()
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
