// Datasource adapter - the plugin surface the dashboard host drives
use std::sync::Arc;

use serde_json::Value;

use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::annotation::{AnnotationEvent, AnnotationSpec, TimeRange};
use crate::domain::dashboard::{Dashboard, SavedDashboard};
use crate::domain::query::{QueryOptions, QueryResult};
use crate::domain::slug::slugify_for_url;
use crate::error::DatasourceError;
use crate::infrastructure::config::DatasourceConfig;

/// One instance per configured datasource. The host reads the capability
/// flags to decide which operations it will invoke; `support_metrics` stays
/// off so `query` is never driven in practice.
pub struct GofanaDatasource {
    pub name: String,
    pub url: String,
    pub grafana_db: bool,
    pub support_metrics: bool,
    pub support_annotations: bool,
    repository: Arc<dyn DashboardRepository>,
}

impl GofanaDatasource {
    pub fn new(config: DatasourceConfig, repository: Arc<dyn DashboardRepository>) -> Self {
        Self {
            name: config.name,
            url: config.url,
            grafana_db: config.grafana_db,
            support_metrics: false,
            support_annotations: true,
            repository,
        }
    }

    /// Annotation placeholder: always succeeds with no events.
    pub async fn annotation_query(
        &self,
        annotation: &AnnotationSpec,
        _range: &TimeRange,
    ) -> Result<Vec<AnnotationEvent>, DatasourceError> {
        tracing::debug!(annotation = %annotation.name, "annotation query");
        Ok(Vec::new())
    }

    /// Metric querying is disabled; every request yields an empty result set.
    pub async fn query(&self, options: &QueryOptions) -> Result<Vec<QueryResult>, DatasourceError> {
        tracing::debug!(targets = options.targets.len(), "metric query ignored");
        Ok(Vec::new())
    }

    pub async fn delete_dashboard(&self, id: &str) -> Result<String, DatasourceError> {
        tracing::debug!(%id, "delete dashboard");
        self.repository.delete_dashboard(id).await?;
        Ok(id.to_string())
    }

    pub async fn search_dashboards(&self, query: &str) -> Result<Value, DatasourceError> {
        tracing::debug!(%query, "search dashboards");
        self.repository.search_dashboards(query).await
    }

    /// `is_temp` is part of the host call signature but has no effect on the
    /// request issued.
    pub async fn get_dashboard(&self, id: &str, is_temp: bool) -> Result<Value, DatasourceError> {
        tracing::debug!(%id, is_temp, "get dashboard");
        self.repository.get_dashboard(id).await
    }

    /// Slugs the title into an id, stamps it on the document and persists the
    /// whole document under that id.
    pub async fn save_dashboard(
        &self,
        mut dashboard: Dashboard,
    ) -> Result<SavedDashboard, DatasourceError> {
        let id = slugify_for_url(&dashboard.title);
        dashboard.id = Some(id.clone());
        tracing::debug!(%id, title = %dashboard.title, "save dashboard");

        self.repository.save_dashboard(&id, &dashboard).await?;

        Ok(SavedDashboard {
            title: dashboard.title,
            url: format!("/dashboard/db/{}", id),
        })
    }
}
