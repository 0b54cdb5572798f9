//! Database schema validation for `hawaii-climate-api`.
//!
//! The data source is pre-existing and read-only; this service never creates
//! or alters tables. Instead the expected row shapes are declared statically
//! here and checked against the live database once on startup from `main.rs`
//! (EMBP: single gateway call), failing fast if a table or column is absent.

use anyhow::{bail, Result};
use sqlx::SqlitePool;

// ---

/// Columns this service reads from the `measurement` table.
const MEASUREMENT_COLUMNS: &[&str] = &["station", "date", "prcp", "tobs"];

/// Columns this service reads from the `station` table. The table carries
/// additional descriptive columns (location, elevation) that are not used.
const STATION_COLUMNS: &[&str] = &["station", "name"];

/// Verify that both required tables exist and carry the declared columns.
///
/// Errors are startup-fatal; the server must not begin serving against a
/// database it cannot query.
pub async fn validate_schema(pool: &SqlitePool) -> Result<()> {
    // ---
    require_columns(pool, "measurement", MEASUREMENT_COLUMNS).await?;
    require_columns(pool, "station", STATION_COLUMNS).await?;

    tracing::info!("Schema validated: measurement and station tables present");
    Ok(())
}

async fn require_columns(pool: &SqlitePool, table: &str, required: &[&str]) -> Result<()> {
    // ---
    // `table` is always one of the constants above, never caller input.
    let sql = format!("SELECT name FROM pragma_table_info('{table}')");
    let columns: Vec<(String,)> = sqlx::query_as(&sql).fetch_all(pool).await?;

    if columns.is_empty() {
        bail!("required table '{}' is missing from the data source", table);
    }

    for col in required {
        if !columns.iter().any(|(name,)| name == col) {
            bail!("table '{}' is missing required column '{}'", table, col);
        }
    }

    Ok(())
}
