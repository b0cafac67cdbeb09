// src/health/mod.rs
mod classifier;

pub use classifier::{
    classify_cluster_status, classify_ordinal, scan_readings, ClassificationResult,
    HealthReading, RouteThresholds, EMPTY_DESCRIPTION_ID, HEALTH_OK,
    REQUEST_FAILED_DESCRIPTION_ID,
};
