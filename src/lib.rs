// Gofana datasource plugin - dashboard CRUD over the gofana REST API
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::dashboard_repository::DashboardRepository;
pub use application::datasource::GofanaDatasource;
pub use domain::dashboard::{Dashboard, SavedDashboard};
pub use error::DatasourceError;
pub use infrastructure::config::DatasourceConfig;
pub use infrastructure::gofana_repository::GofanaRepository;
