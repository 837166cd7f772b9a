// Metric query contract types - accepted from the host, never executed
use serde::{Deserialize, Serialize};

use super::annotation::TimeRange;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryOptions {
    #[serde(default)]
    pub range: Option<TimeRange>,
    #[serde(default)]
    pub targets: Vec<QueryTarget>,
    #[serde(default)]
    pub interval: Option<String>,
    #[serde(default)]
    pub max_data_points: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryTarget {
    pub target: String,
    #[serde(default)]
    pub hide: bool,
}

#[derive(Debug, Clone)]
pub struct TimeSeriesPoint {
    pub time_ms: i64,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(time_ms: i64, value: f64) -> Self {
        Self { time_ms, value }
    }
}

#[derive(Debug, Clone)]
pub struct QueryResult {
    pub target: String,
    pub points: Vec<TimeSeriesPoint>,
}
