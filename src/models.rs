//! Data models for the climate observations API.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use sqlx::SqlitePool;

// ---

/// Aggregates computed once at startup and served read-only for the life
/// of the process.
///
/// `BTreeMap` keeps the keys in a deterministic order, so serializing the
/// same snapshot twice yields byte-identical JSON.
#[derive(Debug)]
pub struct ClimateSnapshot {
    // ---
    /// Date -> average precipitation across all stations, most recent year.
    pub precipitation_by_date: BTreeMap<String, f64>,

    /// Station identifier -> station name, all stations.
    pub station_names: BTreeMap<String, String>,

    /// Date -> temperature observation for the most active station, most
    /// recent year. Values stay optional because the source rows may carry
    /// a null reading for a date.
    pub tobs_by_date: BTreeMap<String, Option<f64>>,
}

/// Shared state handed to every request handler.
///
/// Constructed exactly once in `main`; the snapshot is never mutated after
/// startup, so handlers can read it without locking.
#[derive(Clone)]
pub struct AppState {
    // ---
    pub pool: SqlitePool,
    pub snapshot: Arc<ClimateSnapshot>,
}

/// Min/avg/max temperature aggregate for a caller-supplied date range.
///
/// Field names are part of the wire contract: `TMIN`, `TAVG`, `TMAX`,
/// case-sensitive. All three are null when no rows match the range.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct TempStats {
    // ---
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,

    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,

    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn temp_stats_serializes_with_wire_field_names() {
        // ---
        let stats = TempStats {
            tmin: Some(10.0),
            tavg: Some(20.0),
            tmax: Some(30.0),
        };

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"TMIN": 10.0, "TAVG": 20.0, "TMAX": 30.0})
        );
    }

    #[test]
    fn temp_stats_empty_range_serializes_as_nulls() {
        // ---
        let stats = TempStats {
            tmin: None,
            tavg: None,
            tmax: None,
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"TMIN":null,"TAVG":null,"TMAX":null}"#);
    }

    #[test]
    fn snapshot_maps_serialize_in_key_order() {
        // ---
        let mut names = BTreeMap::new();
        names.insert("USC00519397".to_string(), "WAIKIKI".to_string());
        names.insert("USC00513117".to_string(), "KANEOHE".to_string());

        // Insertion order above is reversed; output must be sorted.
        let json = serde_json::to_string(&names).unwrap();
        assert_eq!(
            json,
            r#"{"USC00513117":"KANEOHE","USC00519397":"WAIKIKI"}"#
        );
    }
}
