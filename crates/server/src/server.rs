use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use std::sync::Arc;

use crate::{ServerError, favorites, people, planets, users};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

impl ServerState {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

async fn not_found() -> ServerError {
    ServerError::NotFound("Not found".to_string())
}

/// Build the application router over `state`.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/people", get(people::list))
        .route("/people/{id}", get(people::get))
        .route("/planets", get(planets::list))
        .route("/planets/{id}", get(planets::get))
        .route("/users", get(users::list))
        .route("/users/favorites", get(favorites::list))
        .route(
            "/favorite/planet/{id}",
            post(favorites::add_planet).delete(favorites::remove_planet),
        )
        .route(
            "/favorite/people/{id}",
            post(favorites::add_person).delete(favorites::remove_person),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ServerState::new(engine))).await
}
