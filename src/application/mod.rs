// Application layer - the host plugin contract and its persistence seam
pub mod dashboard_repository;
pub mod datasource;
