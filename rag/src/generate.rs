use serde::{Deserialize, Serialize};

use crate::build_prompt::Message;
use crate::error::RagError;
use crate::http::ApiClient;

/// A chat completion backend. Returns the text of the first candidate completion.
pub trait ChatModel {
    fn complete(&self, messages: &[Message], temperature: f32) -> Result<String, RagError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl ChatModel for ApiClient {
    fn complete(&self, messages: &[Message], temperature: f32) -> Result<String, RagError> {
        let url = self.deployment_url(&self.chat_deployment, "chat/completions");
        let req = ChatRequest {
            model: &self.chat_deployment,
            messages,
            temperature,
        };
        let res = self.post_json::<ChatResponse, _>(&url, &req)?;
        first_choice(res)
    }
}

fn first_choice(res: ChatResponse) -> Result<String, RagError> {
    res.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(RagError::EmptyResponse("chat completion service"))
}

pub fn generate_answer<C: ChatModel + ?Sized>(
    chat: &C,
    messages: &[Message],
    temperature: f32,
) -> Result<String, RagError> {
    chat.complete(messages, temperature)
}
