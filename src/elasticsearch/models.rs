// src/elasticsearch/models.rs
use serde::Deserialize;

/// Subset of the `_cluster/health` response the probe reports on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClusterHealth {
    pub cluster_name: String,
    pub status: String,
    pub number_of_nodes: u64,
    pub number_of_data_nodes: u64,
    pub active_primary_shards: u64,
    pub active_shards: u64,
    pub relocating_shards: u64,
    pub initializing_shards: u64,
    pub delayed_unassigned_shards: u64,
    pub unassigned_shards: u64,
}
