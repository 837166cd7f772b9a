// Domain layer - dashboard documents and panel contract types
pub mod annotation;
pub mod dashboard;
pub mod query;
pub mod slug;
