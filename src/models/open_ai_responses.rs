use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct InputMessage {
    pub role: String,
    pub content: String,
}

#[derive(Serialize)]
pub struct TextFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

#[derive(Serialize)]
pub struct TextOptions {
    pub format: TextFormat,
}

#[derive(Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub input: Vec<InputMessage>,
    pub text: TextOptions,
}

#[derive(Deserialize)]
pub struct OutputContent {
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Deserialize)]
pub struct OutputItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub content: Vec<OutputContent>,
}

#[derive(Deserialize)]
pub struct ResponsesResult {
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

impl ResponsesResult {
    /// Returns the first output text of the first message in the response, if any
    pub fn output_text(&self) -> Option<&str> {
        self.output
            .iter()
            .filter(|o| o.item_type == "message")
            .flat_map(|o| o.content.iter())
            .find(|c| c.content_type == "output_text")
            .and_then(|c| c.text.as_deref())
    }
}
