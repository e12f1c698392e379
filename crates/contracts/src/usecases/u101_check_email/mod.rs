pub mod request;
pub mod response;
pub mod status;

pub use request::PredictionRequest;
pub use response::{ExplanationEntry, PredictionResponse, PredictionResult, EXPLANATION_UNAVAILABLE};
pub use status::{ModelAvailability, ModelStatusResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct CheckEmail;

impl UseCaseMetadata for CheckEmail {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "check_email"
    }

    fn display_name() -> &'static str {
        "AI-Powered Phishing Email Detection System"
    }
}
