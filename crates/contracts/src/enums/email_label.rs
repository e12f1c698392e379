use serde::{Deserialize, Serialize};

/// Class predicted for an email. The service encodes it as 0 / 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum EmailLabel {
    Legitimate,
    Phishing,
}

impl EmailLabel {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(EmailLabel::Legitimate),
            1 => Some(EmailLabel::Phishing),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            EmailLabel::Legitimate => 0,
            EmailLabel::Phishing => 1,
        }
    }

    pub fn is_phishing(&self) -> bool {
        matches!(self, EmailLabel::Phishing)
    }
}

impl TryFrom<i32> for EmailLabel {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        EmailLabel::from_code(code).ok_or_else(|| format!("unknown label code {}", code))
    }
}

impl From<EmailLabel> for i32 {
    fn from(label: EmailLabel) -> Self {
        label.code()
    }
}
