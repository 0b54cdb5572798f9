//! Live min/avg/max temperature queries over a caller-supplied date range.
//!
//! Unlike the snapshot routes these hit the database on every request. The
//! path parameters are forwarded to SQL as opaque comparison bounds, so the
//! filter is a lexicographic string comparison: zero-padded ISO dates behave
//! like calendar dates, anything else degrades to an empty match rather than
//! an error.

use axum::{
    extract::Path, extract::State, http::StatusCode, response::IntoResponse, routing::get, Json,
    Router,
};
use sqlx::SqlitePool;
use tracing::{error, info};

use crate::{AppState, TempStats};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/api/v1.0/{start}", get(from_start))
        .route("/api/v1.0/{start}/{end}", get(from_start_to_end))
}

async fn from_start(
    Path(start): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    // ---
    info!("GET /api/v1.0/{start}");

    let result = query_stats(&state.pool, &start, None).await;
    respond(result)
}

async fn from_start_to_end(
    Path((start, end)): Path<(String, String)>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    // ---
    info!("GET /api/v1.0/{start}/{end}");

    let result = query_stats(&state.pool, &start, Some(&end)).await;
    respond(result)
}

// ---

/// Aggregate tobs over `date >= start` (and `date <= end` when given).
///
/// SQLite returns one row even when nothing matches; the aggregates are
/// simply NULL, which maps straight onto the optional fields of
/// [`TempStats`].
async fn query_stats(
    pool: &SqlitePool,
    start: &str,
    end: Option<&str>,
) -> Result<TempStats, sqlx::Error> {
    // ---
    match end {
        None => {
            sqlx::query_as(
                r#"
                SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax
                FROM measurement
                WHERE date >= ?1
                "#,
            )
            .bind(start)
            .fetch_one(pool)
            .await
        }
        Some(end) => {
            sqlx::query_as(
                r#"
                SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax
                FROM measurement
                WHERE date >= ?1 AND date <= ?2
                "#,
            )
            .bind(start)
            .bind(end)
            .fetch_one(pool)
            .await
        }
    }
}

fn respond(result: Result<TempStats, sqlx::Error>) -> axum::response::Response {
    // ---
    match result {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => {
            error!("Temperature range query failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json("temperature query failed"),
            )
                .into_response()
        }
    }
}
