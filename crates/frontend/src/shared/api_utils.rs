//! API utilities for talking to the prediction service
//!
//! Helpers for turning the configured endpoint into request URLs.

/// Origin of the page the app is served from
///
/// # Returns
/// - Origin like "http://localhost:8080"
/// - Empty string if window is not available
pub fn page_origin() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

/// Full URL for the configured endpoint
///
/// # Example
/// ```rust,ignore
/// let url = resolve_endpoint("/predict"); // "http://localhost:8080/predict"
/// ```
pub fn resolve_endpoint(endpoint: &str) -> String {
    join_origin(&page_origin(), endpoint)
}

/// Absolute URLs pass through, paths are appended to `origin`
pub fn join_origin(origin: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else if endpoint.starts_with('/') {
        format!("{}{}", origin.trim_end_matches('/'), endpoint)
    } else {
        format!("{}/{}", origin.trim_end_matches('/'), endpoint)
    }
}

/// `GET /status` lives next to `POST /predict` on the service
///
/// Returns `None` when the endpoint does not end with a `/predict` segment,
/// in which case there is no known status route.
pub fn status_url(endpoint: &str) -> Option<String> {
    let trimmed = endpoint.trim_end_matches('/');
    let base = trimmed.strip_suffix("/predict")?;
    Some(format!("{}/status", base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_origin() {
        assert_eq!(
            join_origin("http://localhost:8080", "/predict"),
            "http://localhost:8080/predict"
        );
        assert_eq!(
            join_origin("http://localhost:8080/", "api/predict"),
            "http://localhost:8080/api/predict"
        );
        assert_eq!(
            join_origin("http://localhost:8080", "https://hf.space/predict"),
            "https://hf.space/predict"
        );
    }

    #[test]
    fn test_status_url() {
        assert_eq!(
            status_url("https://api.example.com/predict").as_deref(),
            Some("https://api.example.com/status")
        );
        assert_eq!(
            status_url("https://api.example.com/v1/predict/").as_deref(),
            Some("https://api.example.com/v1/status")
        );
        assert_eq!(status_url("/predict").as_deref(), Some("/status"));
        assert_eq!(status_url("https://api.example.com/classify"), None);
        assert_eq!(status_url("https://api.example.com/mypredict"), None);
    }
}
