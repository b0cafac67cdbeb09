// src/elasticsearch/mod.rs
mod models;
mod probe;

pub use models::ClusterHealth;
pub use probe::{ClusterHealthProbe, DEFAULT_PORT};
