use thiserror::Error;

/// Shown when a failure carries no more specific text
pub const FALLBACK_ERROR: &str = "Failed to fetch prediction. Check API status and console.";

/// Everything that can end an analysis attempt in the failure panel
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Could not build the request: {0}")]
    Request(String),

    #[error("{0}")]
    Network(String),

    #[error("The prediction service did not answer within {}.", timeout_text(.millis))]
    Timeout { millis: u32 },

    /// Build with [`ApiError::status`] so the text is never blank
    #[error("API Error: {status_text}")]
    Status { status: u16, status_text: String },

    /// `error` field of the response payload
    #[error("{0}")]
    Service(String),

    #[error("Unexpected response from the prediction service: {0}")]
    Decode(String),

    #[error("Invalid file type. Please upload a .txt or .csv file. You uploaded a .{extension} file.")]
    InvalidFileType { extension: String },

    #[error("Could not read the selected file.")]
    FileRead(String),
}

/// "60 seconds", "1 second", "1.5 seconds", "500 ms"
fn timeout_text(millis: &u32) -> String {
    match *millis {
        1000 => "1 second".to_string(),
        m if m < 1000 => format!("{} ms", m),
        m if m % 1000 == 0 => format!("{} seconds", m / 1000),
        m => format!("{} seconds", f64::from(m) / 1000.0),
    }
}

impl ApiError {
    /// Non-success HTTP status, falling back to the code when the reason
    /// phrase is empty (HTTP/2 responses carry none)
    pub fn status(status: u16, status_text: &str) -> Self {
        let status_text = if status_text.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            status_text.trim().to_string()
        };
        ApiError::Status {
            status,
            status_text,
        }
    }

    /// Text for the failure panel, never empty
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR.to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_messages_fall_back() {
        assert_eq!(ApiError::Network(String::new()).user_message(), FALLBACK_ERROR);
        assert_eq!(ApiError::Service("  ".to_string()).user_message(), FALLBACK_ERROR);
    }

    #[test]
    fn test_status_message() {
        let err = ApiError::status(503, "Service Unavailable");
        assert_eq!(err.user_message(), "API Error: Service Unavailable");

        let err = ApiError::status(502, "");
        assert_eq!(err.user_message(), "API Error: HTTP 502");
    }

    #[test]
    fn test_file_messages() {
        let err = ApiError::InvalidFileType {
            extension: "pdf".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Invalid file type. Please upload a .txt or .csv file. You uploaded a .pdf file."
        );
        assert_eq!(
            ApiError::FileRead("NotReadableError".to_string()).user_message(),
            "Could not read the selected file."
        );
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(
            ApiError::Timeout { millis: 60_000 }.user_message(),
            "The prediction service did not answer within 60 seconds."
        );
        assert_eq!(
            ApiError::Timeout { millis: 500 }.user_message(),
            "The prediction service did not answer within 500 ms."
        );
        assert_eq!(
            ApiError::Timeout { millis: 1500 }.user_message(),
            "The prediction service did not answer within 1.5 seconds."
        );
        assert_eq!(
            ApiError::Timeout { millis: 1000 }.user_message(),
            "The prediction service did not answer within 1 second."
        );
    }
}
