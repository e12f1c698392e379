use super::error::ApiError;

pub const ALLOWED_MIME_TYPES: [&str; 2] = ["text/plain", "text/csv"];
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["txt", "csv"];

/// Value for the `accept` attribute of the file input
pub const ACCEPT_ATTR: &str = ".txt,.csv";

/// What the browser tells us about a picked file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    /// Reported MIME type, empty when the browser does not know it
    pub mime_type: String,
    pub size_bytes: u64,
}

impl FileMeta {
    pub fn from_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            size_bytes: file.size() as u64,
        }
    }
}

/// Lowercased text after the last '.', or the whole name when there is none
pub fn file_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Accepts text/plain and text/csv, falling back to the .txt/.csv extension
/// because browsers often report an empty or vendor MIME type for csv
pub fn validate(meta: &FileMeta) -> Result<(), ApiError> {
    if ALLOWED_MIME_TYPES.contains(&meta.mime_type.as_str()) {
        return Ok(());
    }

    let extension = file_extension(&meta.name);
    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Ok(());
    }

    Err(ApiError::InvalidFileType { extension })
}
