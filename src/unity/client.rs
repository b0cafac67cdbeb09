// src/unity/client.rs
use super::component::ComponentType;
use super::models::InstancesResponse;
use crate::config::HttpConfig;
use crate::health::HealthReading;
use crate::probe::{build_client, Credentials, ProbeError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use reqwest::{Client, RequestBuilder, StatusCode};
use tokio::sync::OnceCell;
use tracing::{debug, info};
use url::Url;

const LOGIN_PATH: &str = "/api/types/loginSessionInfo";
const INSTANCE_QUERY: &str = "fields=health,id&per_page=2000&compact=true";
const CSRF_HEADER: &str = "emc-csrf-token";

/// Source of per-component health readings.
#[async_trait]
pub trait HealthSource: Send + Sync {
    async fn fetch(&self, component: ComponentType) -> Result<Vec<HealthReading>, ProbeError>;
}

/// Unity REST API session. Logs in on first use and keeps the session
/// cookie and CSRF token for the following requests.
pub struct UnityClient {
    base_url: Url,
    credentials: Credentials,
    client: Client,
    csrf_token: OnceCell<HeaderValue>,
}

impl UnityClient {
    pub fn new(
        base_url: Url,
        credentials: Credentials,
        config: &HttpConfig,
    ) -> Result<Self, ProbeError> {
        Ok(Self {
            base_url,
            credentials,
            client: build_client(config, true)?,
            csrf_token: OnceCell::new(),
        })
    }

    /// `https://<host>` for a management address given on the command line.
    pub fn base_url_for_host(host: &str) -> Result<Url, ProbeError> {
        Ok(Url::parse(&format!("https://{}", host))?)
    }

    pub fn instances_url(&self, component: ComponentType) -> Result<Url, ProbeError> {
        let mut url = self
            .base_url
            .join(&format!("/api/types/{}/instances", component.resource_type()))?;
        url.set_query(Some(INSTANCE_QUERY));
        Ok(url)
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("x-emc-rest-client", HeaderValue::from_static("true"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers
    }

    fn get(&self, url: &Url, csrf_token: Option<HeaderValue>) -> RequestBuilder {
        let mut headers = Self::default_headers();
        if let Some(token) = csrf_token {
            headers.insert(CSRF_HEADER, token);
        }
        self.client.get(url.as_str()).headers(headers)
    }

    async fn login(&self) -> Result<HeaderValue, ProbeError> {
        let url = self.base_url.join(LOGIN_PATH)?;
        debug!("Logging in to {} as {}", url, self.credentials.username);

        let response = self
            .get(&url, None)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            debug!("Login returned HTTP {}", response.status());
            return Err(ProbeError::Authentication(url.to_string()));
        }

        let token = response
            .headers()
            .get(CSRF_HEADER)
            .cloned()
            .ok_or_else(|| ProbeError::MissingHeader {
                url: url.to_string(),
                header: CSRF_HEADER,
            })?;

        info!("Logged in to {}", self.base_url);
        Ok(token)
    }

    async fn csrf_token(&self) -> Result<&HeaderValue, ProbeError> {
        self.csrf_token.get_or_try_init(|| self.login()).await
    }
}

#[async_trait]
impl HealthSource for UnityClient {
    async fn fetch(&self, component: ComponentType) -> Result<Vec<HealthReading>, ProbeError> {
        let token = self.csrf_token().await?.clone();
        let url = self.instances_url(component)?;

        let response = self.get(&url, Some(token)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        let readings = serde_json::from_str::<InstancesResponse>(&body)?.into_readings();

        debug!("Fetched {} {} entries", readings.len(), component);
        Ok(readings)
    }
}
