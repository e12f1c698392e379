pub mod email_label;
pub mod model_choice;

pub use email_label::EmailLabel;
pub use model_choice::ModelChoice;
