// Dashboard domain model
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A dashboard document as the host hands it over. Only `title` is required;
/// `id` is assigned when the document is saved and every other field passes
/// through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dashboard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            id: None,
            tags: Vec::new(),
            extra: Map::new(),
        }
    }
}

/// Summary handed back to the host after a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDashboard {
    pub title: String,
    pub url: String,
}
