mod footer;

pub use footer::{Footer, ServiceStatus};
