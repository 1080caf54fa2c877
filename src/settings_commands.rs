//! Settings commands and endpoint resolution.
//!
//! The generation endpoint is the app's one piece of configuration.
//! Resolution order:
//! 1. GUIDANCE_ENDPOINT env var (explicit override, also settable from the
//!    settings panel for the current session)
//! 2. The built-in default

use serde::Serialize;

/// Default generation endpoint — a locally running guidance service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8787/api/generate";

const ENDPOINT_ENV_KEY: &str = "GUIDANCE_ENDPOINT";

/// Determine which generation endpoint to POST to.
pub fn resolve_endpoint() -> String {
    match std::env::var(ENDPOINT_ENV_KEY) {
        Ok(url) if !url.is_empty() => {
            log::info!("[SETTINGS] Endpoint override: {}", url);
            url
        }
        _ => DEFAULT_ENDPOINT.to_string(),
    }
}

/// Endpoint configuration for the settings panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
    pub endpoint: String,
    pub overridden: bool,
}

/// Tauri command: get the endpoint configuration for the settings panel.
#[tauri::command]
pub fn get_endpoint_config() -> EndpointConfig {
    let endpoint = resolve_endpoint();
    EndpointConfig {
        overridden: endpoint != DEFAULT_ENDPOINT,
        endpoint,
    }
}

/// Tauri command: set the generation endpoint for the current session.
#[tauri::command]
pub fn set_endpoint(url: String) -> Result<(), String> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(format!("Invalid endpoint URL: {url}"));
    }
    std::env::set_var(ENDPOINT_ENV_KEY, &url);
    log::info!("[SETTINGS] Endpoint set to: {}", url);
    Ok(())
}
