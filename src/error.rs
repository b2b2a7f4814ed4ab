#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid launch URL: {0}")]
    LaunchUrl(#[from] url::ParseError),
    #[error("Speech rate must be a positive finite number, got {0}")]
    InvalidRate(f32),
    #[error("Language tag must not be blank")]
    BlankLanguage,
    #[error("Invalid key name table: {0}")]
    KeyTable(String),
    #[error("Missing configuration field: {0}")]
    UninitializedField(#[from] derive_builder::UninitializedFieldError),
}
