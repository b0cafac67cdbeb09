// src/probe/http.rs
use super::ProbeError;
use crate::config::HttpConfig;
use reqwest::Client;
use tracing::warn;

/// Build the HTTP client shared by the REST probes.
pub fn build_client(config: &HttpConfig, cookie_store: bool) -> Result<Client, ProbeError> {
    if config.accept_invalid_certs {
        warn!("TLS certificate validation is disabled");
    }

    let client = Client::builder()
        .timeout(config.timeout())
        .cookie_store(cookie_store)
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()?;

    Ok(client)
}
