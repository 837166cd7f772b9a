// Infrastructure layer - gofana HTTP access and configuration
pub mod config;
pub mod gofana_repository;
