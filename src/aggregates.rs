//! Startup aggregation layer.
//!
//! Runs the aggregate queries once at process start and materializes their
//! results into the read-only [`ClimateSnapshot`] served by the static
//! routes. Nothing here is refreshed later; a restart is the only way to
//! pick up new data.

use std::collections::BTreeMap;

use anyhow::{anyhow, Context, Result};
use chrono::{Duration, NaiveDate};
use sqlx::SqlitePool;

use crate::ClimateSnapshot;

// ---

/// Compute the startup aggregates from the measurement and station tables.
///
/// Fatal on an empty measurement table: without a latest date there is no
/// anchor for the one-year window, and the server must not start.
pub async fn compute_snapshot(pool: &SqlitePool) -> Result<ClimateSnapshot> {
    // ---
    let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
        .fetch_one(pool)
        .await?;

    let latest = latest.ok_or_else(|| {
        anyhow!("measurement table is empty; no latest date to anchor the one-year window")
    })?;

    let start = window_start(&latest)?;
    tracing::info!("Latest measurement date {latest}; serving dates after {start}");

    // Average precipitation per date over the most recent year. SQL AVG
    // ignores nulls; a date whose only readings are null averages to null
    // and is left out of the map entirely.
    let prcp_rows: Vec<(String, Option<f64>)> = sqlx::query_as(
        "SELECT date, AVG(prcp) FROM measurement WHERE date > ?1 GROUP BY date",
    )
    .bind(&start)
    .fetch_all(pool)
    .await?;

    let precipitation_by_date: BTreeMap<String, f64> = prcp_rows
        .into_iter()
        .filter_map(|(date, avg)| avg.map(|a| (date, a)))
        .collect();

    // Every station, no date filter.
    let station_rows: Vec<(String, String)> =
        sqlx::query_as("SELECT station, name FROM station")
            .fetch_all(pool)
            .await?;
    let station_names: BTreeMap<String, String> = station_rows.into_iter().collect();

    // Station with the most measurement rows. On a count tie, SQLite hands
    // back whichever group it scans first; that order is not defined.
    let most_active: String = sqlx::query_scalar(
        "SELECT station FROM measurement \
         GROUP BY station ORDER BY COUNT(station) DESC LIMIT 1",
    )
    .fetch_one(pool)
    .await?;

    tracing::info!("Most active station: {most_active}");

    let tobs_rows: Vec<(String, Option<f64>)> = sqlx::query_as(
        "SELECT date, tobs FROM measurement WHERE date > ?1 AND station = ?2",
    )
    .bind(&start)
    .bind(&most_active)
    .fetch_all(pool)
    .await?;

    let tobs_by_date = collect_last_write(tobs_rows);

    Ok(ClimateSnapshot {
        precipitation_by_date,
        station_names,
        tobs_by_date,
    })
}

/// Date 365 calendar days before `latest` (strict lower bound of the
/// window). Calendar subtraction, so a leap day inside the span shifts the
/// boundary relative to "same date last year".
fn window_start(latest: &str) -> Result<String> {
    // ---
    let date = NaiveDate::parse_from_str(latest, "%Y-%m-%d")
        .with_context(|| format!("latest measurement date '{latest}' is not YYYY-MM-DD"))?;
    Ok((date - Duration::days(365)).format("%Y-%m-%d").to_string())
}

/// Build a date -> value map where a duplicate date keeps the last value
/// encountered in row order. Null readings are kept, not skipped.
fn collect_last_write(rows: Vec<(String, Option<f64>)>) -> BTreeMap<String, Option<f64>> {
    // ---
    let mut map = BTreeMap::new();
    for (date, value) in rows {
        map.insert(date, value);
    }
    map
}
