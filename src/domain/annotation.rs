// Annotation contract types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An annotation definition configured on the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationSpec {
    pub name: String,
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub query: Option<String>,
}

/// The time window a panel is currently displaying.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// A single annotation event rendered on a panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationEvent {
    pub title: String,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub text: Option<String>,
}
