use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("error in communication with OpenAI: {0}")]
    OpenAI(String),
    #[error("malformed OpenAI response: {0}")]
    Document(String),
    #[error("generated menu does not match schema: {0}")]
    Schema(String),
}

impl From<ureq::Error> for GenerationError {
    fn from(e: ureq::Error) -> Self {
        GenerationError::OpenAI(e.to_string())
    }
}
impl From<serde_json::Error> for GenerationError {
    fn from(e: serde_json::Error) -> Self {
        GenerationError::Document(e.to_string())
    }
}
