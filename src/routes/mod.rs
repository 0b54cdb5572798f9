use axum::Router;

use crate::AppState;

mod index;
mod snapshots;
mod temperature;

// ---

pub fn router(state: AppState) -> Router {
    // ---
    Router::new()
        .merge(index::router())
        .merge(snapshots::router())
        .merge(temperature::router())
        .with_state(state)
}
