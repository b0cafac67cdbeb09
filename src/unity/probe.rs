// src/unity/probe.rs
use super::client::HealthSource;
use super::component::ComponentType;
use crate::health::{scan_readings, ClassificationResult};
use crate::probe::{report, Probe, ProbeError};
use crate::retry::{RetryDecision, RetryStrategy};
use async_trait::async_trait;
use nagiosplugin::{Metric, Resource};
use tracing::{debug, error, warn};

/// Reports the health of one component category of a storage array.
pub struct StorageHealthProbe<S> {
    source: S,
    component: ComponentType,
    retry: RetryStrategy,
    perfdata: bool,
}

impl<S: HealthSource> StorageHealthProbe<S> {
    pub fn new(source: S, component: ComponentType, retry: RetryStrategy) -> Self {
        Self {
            source,
            component,
            retry,
            perfdata: false,
        }
    }

    pub fn with_perfdata(mut self, enabled: bool) -> Self {
        self.perfdata = enabled;
        self
    }

    pub async fn classify(&self) -> ClassificationResult {
        let strategy = if self.component.is_retried() {
            self.retry.clone()
        } else {
            RetryStrategy::single_attempt()
        };

        let fetched = strategy
            .execute(|| self.source.fetch(self.component), retry_decision)
            .await;

        match fetched {
            Ok(readings) => {
                if readings.is_empty() {
                    warn!("No {} entries reported", self.component);
                }
                for reading in &readings {
                    debug!(
                        id = reading.id.as_deref().unwrap_or("-"),
                        value = reading.value,
                        "{}: {}",
                        reading.description_id,
                        reading.description
                    );
                }
                scan_readings(&readings)
            }
            Err(e) => {
                error!("Failed to fetch {} health: {}", self.component, e);
                ClassificationResult::request_failed()
            }
        }
    }
}

/// Malformed payloads are not retried; every other failure is.
fn retry_decision(error: &ProbeError) -> RetryDecision {
    if error.is_unreachable() {
        RetryDecision::Retry
    } else {
        RetryDecision::NoRetry
    }
}

#[async_trait]
impl<S: HealthSource> Probe for StorageHealthProbe<S> {
    async fn check(&self) -> Resource {
        let result = self.classify().await;

        let resource = report(
            self.component.resource_type(),
            result.state,
            &format!(
                "{},{},{}",
                result.description_id, result.description, result.value
            ),
        );

        if self.perfdata {
            resource.with_result(Metric::new("health", result.value))
        } else {
            resource
        }
    }

    fn name(&self) -> &'static str {
        "unity"
    }
}
