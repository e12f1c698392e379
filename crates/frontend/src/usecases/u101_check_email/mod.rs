mod error;
mod file_check;
pub mod model;
mod presentation;
mod result_modal;
mod state;
mod view;
pub mod view_model;

pub use error::ApiError;
pub use view::CheckEmailPage;
