//! Request helpers shared by every endpoint: auth headers, response envelope
//! unwrapping, status mapping and list caching.
//!
//! Requests are sent exactly once. A failed call surfaces its error to the
//! caller and the operator decides whether to try again.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::{APP_KIND, CLIENT_VERSION};
use crate::data_fetcher::cache::{cache_http_response, get_cached_http_response};
use crate::data_fetcher::models::Session;
use crate::data_fetcher::processors::match_info::is_truthy;
use crate::error::{AppError, DEFAULT_SERVER_MESSAGE};

fn header_value(name: &str, value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_bytes(value.as_bytes())
        .map_err(|_| AppError::config_error(format!("Invalid value for header '{name}'")))
}

/// Headers attached to every authenticated request.
///
/// Fails with [`AppError::NotAuthenticated`] when there is no session or the
/// session carries an empty token, so no request leaves without credentials.
pub(super) fn auth_headers(session: Option<&Session>) -> Result<HeaderMap, AppError> {
    let session = session
        .filter(|session| session.has_token())
        .ok_or(AppError::NotAuthenticated)?;

    let mut headers = HeaderMap::new();
    let entries = [
        ("token", session.token.replace('"', "")),
        ("usuario", session.usuario.clone()),
        ("dispositivo", session.dispositivo.clone()),
        ("version", CLIENT_VERSION.to_string()),
        ("tipo-app", APP_KIND.to_string()),
    ];
    for (name, value) in entries {
        headers.insert(HeaderName::from_static(name), header_value(name, &value)?);
    }
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn status_error(status: StatusCode, message: &str, url: &str) -> AppError {
    let status_code = status.as_u16();
    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(message, url),
        400..=499 => AppError::api_client_error(status_code, message, url),
        502 | 503 => AppError::api_service_unavailable(status_code, message, url),
        _ => AppError::api_server_error(status_code, message, url),
    }
}

/// Applies the backend's envelope rules to a raw response.
///
/// * a non-zero `estado` other than 200 is an error carrying `mensaje`
/// * a non-success status without `estado` is an error carrying the body
/// * otherwise the result is `datos` when truthy, or the whole body
pub(super) fn unwrap_envelope(status: StatusCode, body: &str, url: &str) -> Result<Value, AppError> {
    let parsed = if body.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str::<Value>(body)
    };

    let value = match parsed {
        Ok(value) => value,
        Err(e) if status.is_success() => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            return Err(AppError::api_malformed_json(
                "Response is not valid JSON",
                url,
            ));
        }
        Err(_) => {
            error!("HTTP {} (URL: {})", status.as_u16(), url);
            return Err(status_error(status, body.trim(), url));
        }
    };

    // A zero `estado` counts as absent.
    let estado = value
        .get("estado")
        .and_then(Value::as_i64)
        .filter(|estado| *estado != 0);

    if let Some(estado) = estado {
        if estado != 200 {
            let message = value
                .get("mensaje")
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(DEFAULT_SERVER_MESSAGE);
            warn!("Envelope estado {} from {}: {}", estado, url, message);
            return Err(AppError::api_envelope(estado, message));
        }
    } else if !status.is_success() {
        error!("HTTP {} (URL: {})", status.as_u16(), url);
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            body.trim().to_string()
        };
        return Err(status_error(status, &message, url));
    }

    match value.get("datos") {
        Some(datos) if is_truthy(datos) => Ok(datos.clone()),
        _ => Ok(value),
    }
}

async fn send(request: RequestBuilder, url: &str) -> Result<(StatusCode, String), AppError> {
    let response = request.send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    let body = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", body.len());
    let preview: String = body.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    Ok((status, body))
}

/// GET returning the unwrapped payload as raw JSON.
///
/// With `cache_ttl` set, a fresh cached copy is served without a request and
/// successful payloads are stored for that many seconds.
#[instrument(skip(client, headers))]
pub(super) async fn get_value(
    client: &Client,
    url: &str,
    headers: HeaderMap,
    cache_ttl: Option<u64>,
) -> Result<Value, AppError> {
    info!("Fetching data from URL: {url}");

    if cache_ttl.is_some()
        && let Some(cached) = get_cached_http_response(url).await
    {
        match serde_json::from_str::<Value>(&cached) {
            Ok(value) => {
                debug!("Using cached HTTP response for URL: {url}");
                return Ok(value);
            }
            Err(e) => warn!("Failed to parse cached response for URL {}: {}", url, e),
        }
    }

    let (status, body) = send(client.get(url).headers(headers), url).await?;
    let value = unwrap_envelope(status, &body, url)?;

    if let Some(ttl) = cache_ttl {
        cache_http_response(url.to_string(), value.to_string(), ttl).await;
    }

    Ok(value)
}

/// POST with a JSON body, returning the unwrapped payload
#[instrument(skip(client, headers, body))]
pub(super) async fn post_json<B: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    headers: HeaderMap,
    body: &B,
) -> Result<Value, AppError> {
    info!("Posting to URL: {url}");
    let (status, text) = send(client.post(url).headers(headers).json(body), url).await?;
    unwrap_envelope(status, &text, url)
}

pub(super) fn decode<T: DeserializeOwned>(value: Value, url: &str) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| {
        error!("Unexpected response structure from {}: {}", url, e);
        AppError::api_unexpected_structure(e.to_string(), url)
    })
}
