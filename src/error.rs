use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to decode bytes as {encoding}: {reason}")]
    Decode { encoding: String, reason: String },

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Expected an object with a string \"text\" field, found {found}")]
    Schema { found: String },

    #[error("Unsupported model: {name} (supported: {supported})")]
    UnsupportedModel { name: String, supported: String },

    #[error("Invalid prompt template: {reason}")]
    Template { reason: String },

    #[error("Failed to render prompt template: {0}")]
    Render(#[from] handlebars::RenderError),
}

pub type Result<T> = std::result::Result<T, Error>;
