// Repository trait for dashboard persistence on the gofana backend
use async_trait::async_trait;
use serde_json::Value;

use crate::domain::dashboard::Dashboard;
use crate::error::DatasourceError;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Delete the dashboard stored under `id`.
    async fn delete_dashboard(&self, id: &str) -> Result<(), DatasourceError>;

    /// Search dashboards; the backend listing is returned untouched.
    async fn search_dashboards(&self, query: &str) -> Result<Value, DatasourceError>;

    /// Fetch the full dashboard document stored under `id`.
    async fn get_dashboard(&self, id: &str) -> Result<Value, DatasourceError>;

    /// Persist `dashboard` under `id`.
    async fn save_dashboard(&self, id: &str, dashboard: &Dashboard)
        -> Result<(), DatasourceError>;
}
