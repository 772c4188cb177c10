pub mod analytics;
pub mod blog_store;
pub mod configuration;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod tools;
