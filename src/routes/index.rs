// src/routes/index.rs
//! Landing route for the climate API.
//!
//! Serves a plain-text usage hint at `/` so a browser or curl user can
//! discover the available routes without external documentation. It is a
//! sibling module in the `routes` directory and follows the Explicit Module
//! Boundary Pattern (EMBP):
//! - Internal to this file: the handler and the usage text
//! - Exports to the gateway (`mod.rs`): a subrouter containing the `/` route

use axum::{routing::get, Router};

const USAGE: &str = "\
Welcome to the Hawaii climate observations API.

Routes:
  /api/v1.0/precipitation    average precipitation by date, last year of data
  /api/v1.0/stations         station identifier -> station name
  /api/v1.0/tobs             temperature observations, most active station
  /api/v1.0/{start}          TMIN/TAVG/TMAX for dates >= start
  /api/v1.0/{start}/{end}    TMIN/TAVG/TMAX for start <= date <= end

Format dates as YYYY-MM-DD.
";

/// Handle `GET /`.
///
/// Deliberately static: no database access, no state.
async fn index() -> &'static str {
    USAGE
}

/// Create a subrouter containing the `/` route.
///
/// Generic over the application state so it merges cleanly with the gateway
/// router regardless of the state type.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
