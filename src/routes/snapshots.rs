//! Routes served straight from the startup aggregates.
//!
//! These three endpoints never touch the database at request time; they
//! serialize the mappings computed once in `aggregates::compute_snapshot`.

use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use tracing::debug;

use crate::AppState;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
}

/// Date -> average precipitation across all stations, most recent year.
async fn precipitation(State(state): State<AppState>) -> Json<BTreeMap<String, f64>> {
    // ---
    debug!("GET /api/v1.0/precipitation");
    Json(state.snapshot.precipitation_by_date.clone())
}

/// Station identifier -> station name, every station in the data set.
async fn stations(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    // ---
    debug!("GET /api/v1.0/stations");
    Json(state.snapshot.station_names.clone())
}

/// Date -> temperature observation for the most active station.
async fn tobs(State(state): State<AppState>) -> Json<BTreeMap<String, Option<f64>>> {
    // ---
    debug!("GET /api/v1.0/tobs");
    Json(state.snapshot.tobs_by_date.clone())
}
