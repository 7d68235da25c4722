use crate::{
    config::DeviceConfig,
    http_client::{device_http_client, handle_http_response, join_url},
    types::{NetworkList, NetworkSelection, WiFiSettings},
};
use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
#[cfg(feature = "mock")]
use mockall::automock;
use reqwest::{Client, RequestBuilder};
use serde_valid::Validate;
use trait_variant::make;

/// Loads and persists WiFi settings on the device
#[make(Send)]
#[cfg_attr(feature = "mock", automock)]
pub trait WiFiSettingsClient {
    async fn load_settings(&self) -> Result<WiFiSettings>;
    async fn save_settings(&self, settings: WiFiSettings) -> Result<WiFiSettings>;
    async fn list_networks(&self) -> Result<Vec<NetworkSelection>>;
}

/// Client for the device REST API
#[derive(Clone)]
pub struct DeviceRestClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl DeviceRestClient {
    // API endpoint constants
    const WIFI_SETTINGS_ENDPOINT: &str = "/rest/wifiSettings";
    const LIST_NETWORKS_ENDPOINT: &str = "/rest/listNetworks";

    pub fn new(config: &DeviceConfig) -> Result<Self> {
        let client = device_http_client(config.request_timeout)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            access_token: config.access_token.clone(),
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// GET request to the device REST API
    async fn get(&self, path: &str) -> Result<String> {
        let url = join_url(&self.base_url, path);
        info!("GET {url}");

        let res = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .context(format!("failed to send GET request to {url}"))?;

        handle_http_response(res, &format!("GET {url}")).await
    }

    /// POST request to the device REST API with JSON body
    async fn post_json(&self, path: &str, body: &WiFiSettings) -> Result<String> {
        let url = join_url(&self.base_url, path);
        info!("POST {url} with body: {body:?}");

        let res = self
            .authorize(self.client.post(&url))
            .json(body)
            .send()
            .await
            .context(format!("failed to send POST request to {url}"))?;

        handle_http_response(res, &format!("POST {url}")).await
    }
}

impl WiFiSettingsClient for DeviceRestClient {
    async fn load_settings(&self) -> Result<WiFiSettings> {
        let body = self.get(Self::WIFI_SETTINGS_ENDPOINT).await?;
        let settings = parse_settings(&body).context("failed to parse wifi settings")?;

        debug!("loaded settings: {settings:?}");
        Ok(settings)
    }

    async fn save_settings(&self, settings: WiFiSettings) -> Result<WiFiSettings> {
        let body = self.post_json(Self::WIFI_SETTINGS_ENDPOINT, &settings).await?;

        // some firmware answers with an empty body
        if body.trim().is_empty() {
            return Ok(settings);
        }

        parse_settings(&body).context("failed to parse saved wifi settings")
    }

    async fn list_networks(&self) -> Result<Vec<NetworkSelection>> {
        let body = self.get(Self::LIST_NETWORKS_ENDPOINT).await?;
        let list: NetworkList =
            serde_json::from_str(&body).context("failed to parse network list")?;

        Ok(decode_networks(list))
    }
}

/// Decode a settings record
///
/// serde_json quotes offending values in its messages, so only the error
/// category and position are kept.
fn parse_settings(body: &str) -> Result<WiFiSettings> {
    serde_json::from_str(body).map_err(|e| {
        anyhow!(
            "{:?} error at line {} column {}",
            e.classify(),
            e.line(),
            e.column()
        )
    })
}

/// Keep the usable entries of a discovery listing
fn decode_networks(list: NetworkList) -> Vec<NetworkSelection> {
    list.networks
        .into_iter()
        .filter_map(|entry| {
            let network = match serde_json::from_value::<NetworkSelection>(entry) {
                Ok(network) => network,
                Err(e) => {
                    warn!("skip undecodable network: {e}");
                    return None;
                }
            };

            if let Err(e) = network.validate() {
                warn!("skip invalid network {}: {e}", network.ssid);
                return None;
            }

            Some(network)
        })
        .collect()
}
