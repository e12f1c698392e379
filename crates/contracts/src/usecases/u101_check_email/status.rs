use crate::enums::ModelChoice;
use serde::{Deserialize, Serialize};

/// Body of `GET /status`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelStatusResponse {
    #[serde(default)]
    pub naive_bayes: NaiveBayesStatus,
    #[serde(rename = "bert-mini", default)]
    pub bert_mini: BertMiniStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesStatus {
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub preprocessor_loaded: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BertMiniStatus {
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub tokenizer_loaded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelAvailability {
    Ready,
    Unavailable,
}

impl ModelStatusResponse {
    /// A model is usable only when all of its artifacts are loaded
    pub fn availability(&self, model: ModelChoice) -> ModelAvailability {
        let ready = match model {
            ModelChoice::NaiveBayes => {
                self.naive_bayes.model_loaded && self.naive_bayes.preprocessor_loaded
            }
            ModelChoice::BertMini => {
                self.bert_mini.model_loaded && self.bert_mini.tokenizer_loaded
            }
        };
        if ready {
            ModelAvailability::Ready
        } else {
            ModelAvailability::Unavailable
        }
    }
}
