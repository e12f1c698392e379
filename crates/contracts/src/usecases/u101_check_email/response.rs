use crate::enums::EmailLabel;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// Word the service puts in the first explanation slot when LIME failed
pub const EXPLANATION_UNAVAILABLE: &str = "LIME explanation error or N/A";

/// One `[word, weight]` pair of the explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)", into = "(String, f64)")]
pub struct ExplanationEntry {
    pub word: String,
    /// Positive weights support the predicted class
    pub weight: f64,
}

impl ExplanationEntry {
    pub fn new(word: impl Into<String>, weight: f64) -> Self {
        Self {
            word: word.into(),
            weight,
        }
    }
}

impl From<(String, f64)> for ExplanationEntry {
    fn from((word, weight): (String, f64)) -> Self {
        Self { word, weight }
    }
}

impl From<ExplanationEntry> for (String, f64) {
    fn from(entry: ExplanationEntry) -> Self {
        (entry.word, entry.weight)
    }
}

/// Raw body returned by `POST /predict`.
///
/// On failure the service still answers with this shape, using
/// `label = -1` and a non-null `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: String,
    pub label: i32,
    pub confidence: f64,
    #[serde(default)]
    pub explanation: Vec<ExplanationEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResponse {
    /// Error text reported by the service, if any
    pub fn service_error(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    /// Validates the payload and drops the error channel
    pub fn into_result(self) -> anyhow::Result<PredictionResult> {
        if let Some(error) = self.service_error() {
            bail!("service reported an error: {}", error);
        }

        let label = EmailLabel::from_code(self.label)
            .with_context(|| format!("unexpected label {}", self.label))?;

        if !(0.0..=1.0).contains(&self.confidence) {
            bail!("confidence {} is outside [0, 1]", self.confidence);
        }

        Ok(PredictionResult {
            prediction: self.prediction,
            label,
            confidence: self.confidence,
            explanation: self.explanation,
        })
    }
}

/// Successful classification of an email
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    /// Class name as the service spells it ("Phishing" / "Legitimate")
    pub prediction: String,
    pub label: EmailLabel,
    pub confidence: f64,
    pub explanation: Vec<ExplanationEntry>,
}

impl PredictionResult {
    /// True when the service could not produce word weights
    pub fn explanation_unavailable(&self) -> bool {
        self.explanation
            .first()
            .map(|entry| entry.word == EXPLANATION_UNAVAILABLE)
            .unwrap_or(false)
    }
}
