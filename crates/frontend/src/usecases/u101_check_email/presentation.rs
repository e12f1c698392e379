//! What the result modal shows for an outcome

use super::state::{Analysis, Outcome};
use contracts::enums::EmailLabel;

/// Weights above this are highlighted in the explanation list
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.01;

pub const EXPLANATION_FALLBACK_TEXT: &str = "Could not generate detailed explanation for this email.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightTone {
    /// Significant word supporting a phishing verdict
    Phishing,
    /// Significant word supporting a legitimate verdict
    Legitimate,
    Neutral,
}

impl WeightTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            WeightTone::Phishing => "factor factor--phishing",
            WeightTone::Legitimate => "factor factor--legitimate",
            WeightTone::Neutral => "factor factor--neutral",
        }
    }
}

pub fn weight_tone(weight: f64, label: EmailLabel) -> WeightTone {
    if weight <= SIGNIFICANCE_THRESHOLD {
        WeightTone::Neutral
    } else if label.is_phishing() {
        WeightTone::Phishing
    } else {
        WeightTone::Legitimate
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactorRow {
    pub word: String,
    /// Weight with 4 decimals
    pub weight: String,
    pub tone: WeightTone,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExplanationView {
    Factors(Vec<FactorRow>),
    /// The service flagged that no explanation could be produced
    Unavailable,
    /// Empty explanation, nothing to show
    Hidden,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalContent {
    Result {
        prediction: String,
        label: EmailLabel,
        /// e.g. "97.31%"
        confidence: String,
        model_name: &'static str,
        /// e.g. "14:02:26 UTC"
        analyzed_at: String,
        explanation: ExplanationView,
    },
    Failure(String),
}

pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

pub fn format_weight(weight: f64) -> String {
    format!("{:.4}", weight)
}

pub fn label_css_class(label: EmailLabel) -> &'static str {
    if label.is_phishing() {
        "verdict verdict--phishing"
    } else {
        "verdict verdict--legitimate"
    }
}

pub fn explanation_view(analysis: &Analysis) -> ExplanationView {
    let result = &analysis.result;
    if result.explanation.is_empty() {
        return ExplanationView::Hidden;
    }
    if result.explanation_unavailable() {
        return ExplanationView::Unavailable;
    }

    let rows = result
        .explanation
        .iter()
        .map(|entry| FactorRow {
            word: entry.word.clone(),
            weight: format_weight(entry.weight),
            tone: weight_tone(entry.weight, result.label),
        })
        .collect();
    ExplanationView::Factors(rows)
}

pub fn modal_content(outcome: &Outcome) -> ModalContent {
    match outcome {
        Outcome::Success(analysis) => ModalContent::Result {
            prediction: analysis.result.prediction.clone(),
            label: analysis.result.label,
            confidence: format_confidence(analysis.result.confidence),
            model_name: analysis.model.display_name(),
            analyzed_at: analysis.analyzed_at.format("%H:%M:%S UTC").to_string(),
            explanation: explanation_view(analysis),
        },
        Outcome::Failure(message) => ModalContent::Failure(message.clone()),
    }
}
