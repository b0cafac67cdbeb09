// src/health/classifier.rs
use nagiosplugin::ServiceState;
use serde::{Deserialize, Serialize};

/// Description id used when the array reports an empty entry list.
pub const EMPTY_DESCRIPTION_ID: &str = "GOT_EMPTY_FROM_UNITY";
pub const EMPTY_DESCRIPTION: &str = "I got no entries in the entries list of HEALTH.";

/// Description id used when no reading could be obtained at all.
pub const REQUEST_FAILED_DESCRIPTION_ID: &str = "COULD_NOT_REQUEST_URL";
pub const REQUEST_FAILED_DESCRIPTION: &str = "Could not request the storage REST API.";

/// Unity `HealthEnum` value for a healthy component.
pub const HEALTH_OK: i64 = 5;
const HEALTH_UNKNOWN: i64 = 0;
const HEALTH_MAJOR: i64 = 20;

/// One health entry as reported by the storage array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReading {
    pub id: Option<String>,
    pub value: i64,
    pub description_id: String,
    pub description: String,
}

impl HealthReading {
    pub fn new(value: i64, description_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            value,
            description_id: description_id.into(),
            description: description.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub state: ServiceState,
    pub description_id: String,
    pub description: String,
    pub value: i64,
}

impl ClassificationResult {
    pub fn from_reading(reading: &HealthReading) -> Self {
        Self {
            state: classify_ordinal(reading.value),
            description_id: reading.description_id.clone(),
            description: reading.description.clone(),
            value: reading.value,
        }
    }

    pub fn empty_inventory() -> Self {
        Self {
            state: ServiceState::Ok,
            description_id: EMPTY_DESCRIPTION_ID.to_string(),
            description: EMPTY_DESCRIPTION.to_string(),
            value: HEALTH_OK,
        }
    }

    pub fn request_failed() -> Self {
        Self {
            state: ServiceState::Unknown,
            description_id: REQUEST_FAILED_DESCRIPTION_ID.to_string(),
            description: REQUEST_FAILED_DESCRIPTION.to_string(),
            value: HEALTH_UNKNOWN,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.state.exit_code()
    }
}

/// Map a Unity `HealthEnum` value (0, 5, 7, 10, 15, 20, 25, 30) to a severity.
///
/// Values outside the documented enum that fall in none of the ranges
/// (negative, or 1 to 4) are reported as UNKNOWN.
pub fn classify_ordinal(value: i64) -> ServiceState {
    match value {
        HEALTH_UNKNOWN => ServiceState::Unknown,
        HEALTH_OK => ServiceState::Ok,
        v if v > HEALTH_OK && v < HEALTH_MAJOR => ServiceState::Warning,
        v if v >= HEALTH_MAJOR => ServiceState::Critical,
        _ => ServiceState::Unknown,
    }
}

/// Reduce all entries of one component type to a single result.
///
/// Reports the first entry that is not OK. When every entry is OK the
/// last entry is reported, and an empty list yields the empty-inventory
/// sentinel.
pub fn scan_readings(readings: &[HealthReading]) -> ClassificationResult {
    let Some(last) = readings.last() else {
        return ClassificationResult::empty_inventory();
    };

    readings
        .iter()
        .find(|r| classify_ordinal(r.value) != ServiceState::Ok)
        .map(ClassificationResult::from_reading)
        .unwrap_or_else(|| ClassificationResult::from_reading(last))
}

/// Map an Elasticsearch cluster status string to a severity.
pub fn classify_cluster_status(status: &str) -> ServiceState {
    match status {
        "red" => ServiceState::Critical,
        "yellow" => ServiceState::Warning,
        "green" => ServiceState::Ok,
        _ => ServiceState::Unknown,
    }
}

/// Lower bounds on the number of active routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteThresholds {
    pub warning: usize,
    pub critical: usize,
}

impl Default for RouteThresholds {
    fn default() -> Self {
        Self {
            warning: 10,
            critical: 6,
        }
    }
}

impl RouteThresholds {
    pub fn new(warning: usize, critical: usize) -> Self {
        Self { warning, critical }
    }

    /// Both bounds are checked and the critical check runs last, so a count
    /// at or below `critical` is CRITICAL even when `critical > warning`.
    pub fn classify(&self, count: usize) -> ServiceState {
        let mut state = ServiceState::Ok;
        if count <= self.warning {
            state = ServiceState::Warning;
        }
        if count <= self.critical {
            state = ServiceState::Critical;
        }
        state
    }
}
