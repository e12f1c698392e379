use crate::enums::ModelChoice;
use serde::{Deserialize, Serialize};

/// Body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub sender: String,
    pub body: String,
    #[serde(default)]
    pub model_choice: ModelChoice,
}
