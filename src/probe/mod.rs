// src/probe/mod.rs
mod error;
mod http;
mod output;

pub use error::ProbeError;
pub use http::build_client;
pub use output::{report, unknown};

use async_trait::async_trait;
use nagiosplugin::Resource;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

/// A single-shot health check against one monitored system.
///
/// Implementations never fail: every error is folded into the returned
/// resource, usually as UNKNOWN.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn check(&self) -> Resource;

    fn name(&self) -> &'static str;
}

/// Run a probe inside a tracing span tagged with a fresh run id.
pub async fn execute(probe: &dyn Probe) -> Resource {
    let run_id = Uuid::new_v4();
    let span = info_span!("probe", %run_id, probe = probe.name());

    async move {
        let start = Instant::now();
        let resource = probe.check().await;
        debug!(elapsed_ms = start.elapsed().as_millis() as u64, "Check complete");
        resource
    }
    .instrument(span)
    .await
}

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
