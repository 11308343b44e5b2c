pub mod errors;

use std::time::Duration;
use log::info;
use ureq::Agent;
use crate::config::OpenAIParameters;
use crate::manager_open_ai::errors::GenerationError;
use crate::menu_request::GenerationRequest;
use crate::models::menu::DinnerMenu;
use crate::models::open_ai_responses::{InputMessage, ResponsesRequest, ResponsesResult, TextFormat, TextOptions};

const REQUEST_URL: &str = "https://api.openai.com/v1/responses";

pub struct OpenAI {
    agent: Agent,
    api_key: String,
    model: String,
}

impl OpenAI {
    /// Returns a new instance of the OpenAI struct
    ///
    /// # Arguments
    ///
    /// * 'config' - api key and model to use
    pub fn new(config: &OpenAIParameters) -> Self {
        let agent_config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(60)))
            .build();

        let agent = agent_config.into();

        Self { agent, api_key: config.api_key.to_string(), model: config.model.to_string() }
    }

    /// Sends the generation request in json mode and parses the reply into a menu
    ///
    /// # Arguments
    ///
    /// * 'request' - the fully built generation request
    pub fn generate_menu(&self, request: &GenerationRequest) -> Result<DinnerMenu, GenerationError> {
        info!("requesting menu from model {}", self.model);

        let body = serde_json::to_string(&self.build_body(request))?;

        let json = self.agent
            .post(REQUEST_URL)
            .content_type("application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send(body)?
            .body_mut()
            .read_to_string()?;

        let text = extract_output_text(&json)?;

        DinnerMenu::parse(&text)
    }

    fn build_body(&self, request: &GenerationRequest) -> ResponsesRequest {
        ResponsesRequest {
            model: self.model.clone(),
            input: vec![
                InputMessage { role: "system".to_string(), content: request.system_prompt() },
                InputMessage { role: "user".to_string(), content: request.user_prompt() },
            ],
            text: TextOptions { format: TextFormat { format_type: "json_object".to_string() } },
        }
    }
}

/// Pulls the generated text out of a Responses API document
///
/// # Arguments
///
/// * 'json' - the response document
fn extract_output_text(json: &str) -> Result<String, GenerationError> {
    let result: ResponsesResult = serde_json::from_str(json)?;

    result.output_text()
        .map(|t| t.to_string())
        .ok_or_else(|| GenerationError::Document("no output text in response".to_string()))
}
