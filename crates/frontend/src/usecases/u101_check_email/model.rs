use super::error::ApiError;
use crate::shared::api_utils::{resolve_endpoint, status_url};
use crate::shared::config::AppConfig;
use contracts::usecases::u101_check_email::{
    ModelStatusResponse, PredictionRequest, PredictionResponse, PredictionResult,
};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Sends one `POST` to the prediction endpoint. No retries.
pub async fn predict(
    config: &AppConfig,
    request: &PredictionRequest,
) -> Result<PredictionResult, ApiError> {
    let url = resolve_endpoint(&config.endpoint);
    log::debug!("POST {} (model {})", url, request.model_choice);

    let controller =
        web_sys::AbortController::new().map_err(|e| ApiError::Request(js_error_message(&e)))?;
    let timed_out = Rc::new(Cell::new(false));

    // Dropping the timer at the end of this function disarms it
    let _deadline = config.request_timeout_ms.map(|millis| {
        let controller = controller.clone();
        let timed_out = timed_out.clone();
        Timeout::new(millis, move || {
            timed_out.set(true);
            controller.abort();
        })
    });

    let transport_error = |e: gloo_net::Error| -> ApiError {
        if timed_out.get() {
            ApiError::Timeout {
                millis: config.request_timeout_ms.unwrap_or_default(),
            }
        } else {
            ApiError::Network(network_message(&e))
        }
    };

    let signal = controller.signal();
    let response = Request::post(&url)
        .header("Accept", "application/json")
        .abort_signal(Some(&signal))
        .json(request)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(&transport_error)?;

    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.map_err(&transport_error)?;

    interpret_response(status, &status_text, &body)
}

/// Maps a finished HTTP exchange to a result.
///
/// The payload's own `error` wins over the HTTP status, so a 500 carrying
/// `{"error": "..."}` reports the service's text.
pub fn interpret_response(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<PredictionResult, ApiError> {
    let ok = (200..300).contains(&status);

    match serde_json::from_str::<PredictionResponse>(body) {
        Ok(payload) => {
            if let Some(error) = payload.service_error() {
                return Err(ApiError::Service(error.to_string()));
            }
            if !ok {
                return Err(ApiError::status(status, status_text));
            }
            payload
                .into_result()
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        Err(_) if !ok => Err(ApiError::status(status, status_text)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Fetches model availability. `Ok(None)` when the endpoint has no known
/// status route.
pub async fn fetch_model_status(config: &AppConfig) -> Result<Option<ModelStatusResponse>, String> {
    let Some(path) = status_url(&config.endpoint) else {
        return Ok(None);
    };
    let url = resolve_endpoint(&path);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let status: ModelStatusResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(Some(status))
}

/// Reads the whole file as UTF-8 text
pub async fn read_file_text(file: web_sys::File) -> Result<String, ApiError> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| ApiError::FileRead(js_error_message(&e)))?;

    value
        .as_string()
        .ok_or_else(|| ApiError::FileRead("file contents are not text".to_string()))
}

/// The browser's own text for JS failures ("Failed to fetch"), gloo's
/// rendering otherwise
fn network_message(error: &gloo_net::Error) -> String {
    match error {
        gloo_net::Error::JsError(js) if !js.message.trim().is_empty() => js.message.clone(),
        other => other.to_string(),
    }
}

fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
