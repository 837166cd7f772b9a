// HTTP repository implementation against the gofana REST API
use async_trait::async_trait;
use serde_json::Value;

use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::dashboard::Dashboard;
use crate::error::DatasourceError;

/// The backend address is fixed by the wire contract; the plugin never reads
/// it from its configuration record.
const GOFANA_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct GofanaRepository {
    base_url: String,
    client: reqwest::Client,
}

impl GofanaRepository {
    pub fn new() -> Self {
        Self::with_base_url(GOFANA_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn dashboard_url(&self, id: &str) -> String {
        format!("{}/dashboard/{}", self.base_url, id)
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}/search?query={}", self.base_url, urlencoding::encode(query))
    }
}

impl Default for GofanaRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DashboardRepository for GofanaRepository {
    async fn delete_dashboard(&self, id: &str) -> Result<(), DatasourceError> {
        let response = self
            .client
            .delete(self.dashboard_url(id))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%id, error = %e, "delete request failed");
                DatasourceError::DeleteFailed(id.to_string())
            })?;

        if !response.status().is_success() {
            tracing::error!(%id, status = %response.status(), "delete rejected by backend");
            return Err(DatasourceError::DeleteFailed(id.to_string()));
        }

        Ok(())
    }

    async fn search_dashboards(&self, query: &str) -> Result<Value, DatasourceError> {
        let response = self
            .client
            .get(self.search_url(query))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%query, error = %e, "search request failed");
                DatasourceError::SearchFailed
            })?;

        if !response.status().is_success() {
            tracing::error!(%query, status = %response.status(), "search rejected by backend");
            return Err(DatasourceError::SearchFailed);
        }

        response.json::<Value>().await.map_err(|e| {
            tracing::error!(%query, error = %e, "search response was not JSON");
            DatasourceError::SearchFailed
        })
    }

    async fn get_dashboard(&self, id: &str) -> Result<Value, DatasourceError> {
        let response = self
            .client
            .get(self.dashboard_url(id))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%id, error = %e, "get request failed");
                DatasourceError::GetFailed(id.to_string())
            })?;

        if !response.status().is_success() {
            tracing::error!(%id, status = %response.status(), "get rejected by backend");
            return Err(DatasourceError::GetFailed(id.to_string()));
        }

        response.json::<Value>().await.map_err(|e| {
            tracing::error!(%id, error = %e, "dashboard document was not JSON");
            DatasourceError::GetFailed(id.to_string())
        })
    }

    async fn save_dashboard(
        &self,
        id: &str,
        dashboard: &Dashboard,
    ) -> Result<(), DatasourceError> {
        let response = self
            .client
            .post(self.dashboard_url(id))
            .json(dashboard)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%id, error = %e, "save request failed");
                DatasourceError::SaveFailed(id.to_string())
            })?;

        if !response.status().is_success() {
            tracing::error!(%id, status = %response.status(), "save rejected by backend");
            return Err(DatasourceError::SaveFailed(id.to_string()));
        }

        Ok(())
    }
}
