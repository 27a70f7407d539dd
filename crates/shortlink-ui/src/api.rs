//! HTTP bindings for the shortening backend.
//!
//! This module implements [`UrlApi`] over the browser's `fetch` and reads
//! the optional runtime configuration published on `window`.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shortlink_core::{
    ClientConfig, Error, HealthReport, Result, ShortenRequest, UrlApi, UrlRecord, decode_response,
    resolve_records,
};
use wasm_bindgen::prelude::*;

/// Name of the global object holding the client configuration.
pub const CONFIG_GLOBAL: &str = "__SHORTLINK_CONFIG__";

/// [`UrlApi`] implementation backed by `fetch`.
#[derive(Debug, Clone)]
pub struct HttpUrlApi {
    config: ClientConfig,
}

impl HttpUrlApi {
    /// Create a client for the given configuration.
    #[must_use]
    pub const fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base for short URLs the client has to build itself.
    fn link_base(&self) -> String {
        self.config.link_base(&page_origin()).to_string()
    }
}

impl UrlApi for HttpUrlApi {
    async fn list_urls(&self) -> Result<Vec<UrlRecord>> {
        let url = self.config.urls_endpoint();
        leptos::logging::log!("GET {}", url);

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(map_network_error)?;

        let records = read_json(response).await?;
        Ok(resolve_records(records, &self.link_base()))
    }

    async fn shorten(&self, request: &ShortenRequest) -> Result<UrlRecord> {
        let url = self.config.shorten_endpoint();
        leptos::logging::log!("POST {}", url);

        let response = Request::post(&url)
            .header("Accept", "application/json")
            .json(request)
            .map_err(|e| Error::Transport(format!("Failed to build request: {e}")))?
            .send()
            .await
            .map_err(map_network_error)?;

        let record: UrlRecord = read_json(response).await?;
        record
            .resolve_short_url(&self.link_base())
            .ok_or_else(|| Error::Decode("response has no short_url or short_code".to_string()))
    }

    async fn health(&self) -> Result<HealthReport> {
        let response = Request::get(&self.config.health_endpoint())
            .send()
            .await
            .map_err(map_network_error)?;

        read_json(response).await
    }
}

/// Origin of the page, e.g. `http://localhost:5000`.
fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

fn map_network_error(error: gloo_net::Error) -> Error {
    leptos::logging::error!("Request failed: {}", error);
    Error::Transport(error.to_string())
}

/// Read the body as text and classify it by status.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let status_text = response.status_text();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Transport(format!("Failed to read response body: {e}")))?;

    decode_response(status, &status_text, &body).inspect_err(|e| {
        leptos::logging::warn!("{} {} -> {}", status, response.url(), e);
    })
}

/// Load the client configuration from `window.__SHORTLINK_CONFIG__`.
///
/// Falls back to defaults when the global is absent or invalid.
pub fn load_config() -> ClientConfig {
    let Some(window) = web_sys::window() else {
        return ClientConfig::default();
    };

    let value = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return ClientConfig::default(),
    };

    let config = serde_wasm_bindgen::from_value::<ClientConfig>(value)
        .map_err(|e| Error::Configuration(format!("Failed to read {CONFIG_GLOBAL}: {e}")))
        .and_then(|config| config.validate().map(|()| config));

    match config {
        Ok(config) => {
            leptos::logging::log!("Using API base '{}'", config.api_base);
            config
        }
        Err(e) => {
            leptos::logging::warn!("{}; using default configuration", e);
            ClientConfig::default()
        }
    }
}
