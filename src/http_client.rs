use anyhow::{Context, Result, ensure};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

const REDACTED: &str = "<redacted>";

/// Create an HTTP client for the device REST API
///
/// Devices live on the local network, so system proxies are bypassed.
///
/// # Arguments
/// * `timeout` - Timeout applied to every request
pub fn device_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()
        .context("failed to create device HTTP client")
}

/// Normalize base url and path into a request url
pub fn join_url(base_url: &str, path: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base_url}/{path}")
}

/// Handle HTTP response by checking status and extracting body
///
/// # Arguments
/// * `res` - The HTTP response to handle
/// * `context_msg` - Context message describing the request (e.g., "GET /rest/wifiSettings")
///
/// # Returns
/// * `Ok(String)` - The response body if the status is successful
/// * `Err` - If the status is not successful or reading the body fails. The
///   error carries the body only after [`redact_body`].
pub async fn handle_http_response(res: Response, context_msg: &str) -> Result<String> {
    let status = res.status();
    let body = res.text().await.context("failed to read response body")?;

    ensure!(
        status.is_success(),
        "{context_msg} failed with status {status} and body: {}",
        redact_body(&body)
    );

    Ok(body)
}

/// Make an error response body safe for logs and error messages
///
/// Devices may echo the posted settings record. JSON bodies keep their shape
/// with every `password` value masked; anything else is reduced to its size.
pub fn redact_body(body: &str) -> String {
    if body.trim().is_empty() {
        return String::new();
    }

    match serde_json::from_str::<Value>(body) {
        Ok(mut value) => {
            mask_passwords(&mut value);
            value.to_string()
        }
        Err(_) => format!("<{} bytes>", body.len()),
    }
}

fn mask_passwords(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, value) in map.iter_mut() {
                if key.eq_ignore_ascii_case("password") {
                    *value = Value::String(REDACTED.to_string());
                } else {
                    mask_passwords(value);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(mask_passwords),
        _ => {}
    }
}
