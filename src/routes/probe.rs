// src/routes/probe.rs
use super::ssh::RouteSource;
use crate::health::RouteThresholds;
use crate::probe::{report, unknown, Probe};
use async_trait::async_trait;
use nagiosplugin::{CheckResult, PerfData, Resource};
use tracing::{debug, error};

const NAME: &str = "ospf";

/// Alerts when a firewall has too few active OSPF routes.
pub struct OspfRouteProbe<R> {
    source: R,
    thresholds: RouteThresholds,
    perfdata: bool,
}

impl<R: RouteSource> OspfRouteProbe<R> {
    pub fn new(source: R, thresholds: RouteThresholds) -> Self {
        Self {
            source,
            thresholds,
            perfdata: false,
        }
    }

    pub fn with_perfdata(mut self, enabled: bool) -> Self {
        self.perfdata = enabled;
        self
    }
}

#[async_trait]
impl<R: RouteSource> Probe for OspfRouteProbe<R> {
    async fn check(&self) -> Resource {
        let routes = match self.source.fetch_routes().await {
            Ok(routes) => routes,
            Err(e) => {
                error!("Failed to read routing table: {}", e);
                return unknown(NAME, &format!("Unable to read OSPF routes: {}", e));
            }
        };

        for route in &routes {
            debug!(
                "dest. {} via {} dev {} metric {} age {}s flags {:?}",
                route.destination,
                route.gateway,
                route.interface,
                route.metric,
                route.age.num_seconds(),
                route.flags
            );
        }

        let count = routes.len();
        let state = self.thresholds.classify(count);
        let summary = if count == 0 {
            "no active routes found".to_string()
        } else {
            format!("{} active routes found", count)
        };

        let resource = report(NAME, state, &summary);
        if !self.perfdata {
            return resource;
        }

        // bare perfdata: a Metric would evaluate its own thresholds
        let perf = PerfData::new("routes", count).with_thresholds(
            Some(self.thresholds.warning),
            Some(self.thresholds.critical),
        );
        resource.with_result(CheckResult::new().with_perf_data(perf))
    }

    fn name(&self) -> &'static str {
        NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeError;
    use crate::routes::Route;
    use chrono::Duration;
    use nagiosplugin::ServiceState;

    struct FakeTable(Option<usize>);

    #[async_trait]
    impl RouteSource for FakeTable {
        async fn fetch_routes(&self) -> Result<Vec<Route>, ProbeError> {
            let count = self
                .0
                .ok_or_else(|| ProbeError::Authentication("ssh://fw".to_string()))?;

            Ok((0..count)
                .map(|i| Route {
                    destination: format!("10.{}.0.0/16", i),
                    gateway: "10.0.0.1".to_string(),
                    metric: 10,
                    flags: vec!["A".to_string(), "Oi".to_string()],
                    age: Duration::seconds(60),
                    interface: "ethernet1/1".to_string(),
                })
                .collect())
        }
    }

    async fn check(count: usize) -> (ServiceState, String) {
        OspfRouteProbe::new(FakeTable(Some(count)), RouteThresholds::default())
            .check()
            .await
            .nagios_result()
    }

    #[tokio::test]
    async fn test_default_thresholds() {
        assert_eq!(check(11).await.0, ServiceState::Ok);
        assert_eq!(check(10).await.0, ServiceState::Warning);
        assert_eq!(check(6).await.0, ServiceState::Critical);
        assert_eq!(check(0).await.0, ServiceState::Critical);
    }

    #[tokio::test]
    async fn test_summary() {
        assert_eq!(check(12).await.1, "ospf is OK: 12 active routes found|");
        assert_eq!(check(0).await.1, "ospf is CRITICAL: no active routes found|");
    }

    #[tokio::test]
    async fn test_perfdata() {
        let (state, text) = OspfRouteProbe::new(FakeTable(Some(8)), RouteThresholds::default())
            .with_perfdata(true)
            .check()
            .await
            .nagios_result();

        assert_eq!(state, ServiceState::Warning);
        assert_eq!(text, "ospf is WARNING: 8 active routes found| 'routes'=8;10;6;;");
    }

    #[tokio::test]
    async fn test_session_failure_is_unknown() {
        let (state, text) = OspfRouteProbe::new(FakeTable(None), RouteThresholds::default())
            .check()
            .await
            .nagios_result();

        assert_eq!(state, ServiceState::Unknown);
        assert_eq!(state.exit_code(), 3);
        assert!(text.starts_with("ospf is UNKNOWN: Unable to read OSPF routes"));
    }
}
