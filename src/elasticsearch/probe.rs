// src/elasticsearch/probe.rs
use super::models::ClusterHealth;
use crate::config::HttpConfig;
use crate::health::classify_cluster_status;
use crate::probe::{build_client, report, unknown, Credentials, Probe, ProbeError};
use async_trait::async_trait;
use nagiosplugin::{Metric, Resource, ServiceState};
use reqwest::Client;
use tracing::{debug, error};
use url::Url;

pub const DEFAULT_PORT: u16 = 9200;
const HEALTH_PATH: &str = "/_cluster/health";
const NAME: &str = "elasticsearch";

/// Checks the `_cluster/health` status of an Elasticsearch cluster.
pub struct ClusterHealthProbe {
    url: Url,
    credentials: Credentials,
    client: Client,
    perfdata: bool,
}

impl ClusterHealthProbe {
    pub fn new(
        base_url: Url,
        credentials: Credentials,
        config: &HttpConfig,
    ) -> Result<Self, ProbeError> {
        Ok(Self {
            url: base_url.join(HEALTH_PATH)?,
            credentials,
            client: build_client(config, false)?,
            perfdata: false,
        })
    }

    pub fn base_url_for_host(host: &str, port: u16, tls: bool) -> Result<Url, ProbeError> {
        let scheme = if tls { "https" } else { "http" };
        Ok(Url::parse(&format!("{}://{}:{}", scheme, host, port))?)
    }

    pub fn with_perfdata(mut self, enabled: bool) -> Self {
        self.perfdata = enabled;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn fetch(&self) -> Result<ClusterHealth, ProbeError> {
        debug!("Requesting {}", self.url);

        let response = self
            .client
            .get(self.url.as_str())
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::HttpStatus {
                url: self.url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn render(&self, health: &ClusterHealth) -> Resource {
        let state = classify_cluster_status(&health.status);

        if state == ServiceState::Unknown {
            return unknown(
                NAME,
                &format!(
                    "ElasticSearch ({}) reported unrecognized status '{}'",
                    health.cluster_name, health.status
                ),
            );
        }

        let summary = format!(
            "ElasticSearch ({}) is running with '{}' status, {} nodes on cluster with {} data nodes, \
             shards: {} active primary, {} active, {} relocating, {} initializing, \
             {} delayed unassigned, {} unassigned",
            health.cluster_name,
            health.status,
            health.number_of_nodes,
            health.number_of_data_nodes,
            health.active_primary_shards,
            health.active_shards,
            health.relocating_shards,
            health.initializing_shards,
            health.delayed_unassigned_shards,
            health.unassigned_shards,
        );

        let resource = report(NAME, state, &summary);
        if !self.perfdata {
            return resource;
        }

        let perf = [
            ("active_primary", health.active_primary_shards),
            ("active", health.active_shards),
            ("relocating", health.relocating_shards),
            ("init", health.initializing_shards),
            ("delay_unass", health.delayed_unassigned_shards),
            ("unass", health.unassigned_shards),
        ];
        perf.into_iter().fold(resource, |resource, (label, value)| {
            resource.with_result(Metric::new(label, value))
        })
    }
}

#[async_trait]
impl Probe for ClusterHealthProbe {
    async fn check(&self) -> Resource {
        match self.fetch().await {
            Ok(health) => self.render(&health),
            Err(e) if e.is_unreachable() => {
                error!("Cluster health request failed: {}", e);
                unknown(NAME, &format!("Unable to request URL {}", self.url))
            }
            Err(e) => {
                error!("Cluster health response could not be parsed: {}", e);
                unknown(
                    NAME,
                    &format!("Unable to parse cluster health from {}", self.url),
                )
            }
        }
    }

    fn name(&self) -> &'static str {
        NAME
    }
}
