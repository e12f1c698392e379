use serde::{Deserialize, Serialize};

/// Classifier the prediction service should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModelChoice {
    /// Multinomial Naive Bayes over TF-IDF features
    #[default]
    #[serde(rename = "nb")]
    NaiveBayes,
    /// Fine-tuned BERT-mini transformer
    #[serde(rename = "bert-mini")]
    BertMini,
}

impl ModelChoice {
    /// Wire code sent as `model_choice`
    pub fn code(&self) -> &'static str {
        match self {
            ModelChoice::NaiveBayes => "nb",
            ModelChoice::BertMini => "bert-mini",
        }
    }

    /// Human readable name for the selector
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelChoice::NaiveBayes => "MultinomialNB",
            ModelChoice::BertMini => "BERT-mini",
        }
    }

    pub fn all() -> Vec<ModelChoice> {
        vec![ModelChoice::NaiveBayes, ModelChoice::BertMini]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "nb" => Some(ModelChoice::NaiveBayes),
            "bert-mini" => Some(ModelChoice::BertMini),
            _ => None,
        }
    }
}

impl std::fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
