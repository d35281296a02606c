//! Text-generation client: the single point of entry for model calls.
//!
//! Pipeline code depends on the [`TextGenerator`] trait only, so tests can
//! script model output without a running inference server.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model returned no generated text")]
    EmptyContent,
}

/// Sampling parameters for a single generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub do_sample: bool,
    pub temperature: f32,
}

/// One prompt in, one generated text out. Implementations may fail;
/// callers decide how a failure degrades.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, params: GenerationParams) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    #[serde(flatten)]
    params: GenerationParams,
    /// Echo the prompt in the output, as an in-process pipeline does.
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct InferenceOutput {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct InferenceError {
    error: String,
}

/// Client for a Hugging Face style text-generation inference endpoint.
///
/// No retries and no client-side timeout: both belong to the model runtime.
#[derive(Clone)]
pub struct HttpTextGenerator {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
}

impl HttpTextGenerator {
    pub fn new(endpoint: String, api_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_token,
        }
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn generate(&self, prompt: &str, params: GenerationParams) -> Result<String, LlmError> {
        let body = InferenceRequest {
            inputs: prompt,
            parameters: InferenceParameters {
                params,
                return_full_text: true,
            },
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<InferenceError>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generated = parse_generated_text(&text)?;
        debug!(
            "Generation succeeded: prompt_chars={}, output_chars={}",
            prompt.len(),
            generated.len()
        );
        Ok(generated)
    }
}

/// Extracts the first `generated_text` from an inference response body.
fn parse_generated_text(body: &str) -> Result<String, LlmError> {
    let outputs: Vec<InferenceOutput> = serde_json::from_str(body)?;
    outputs
        .into_iter()
        .next()
        .map(|o| o.generated_text)
        .ok_or(LlmError::EmptyContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generated_text_takes_first_output() {
        let body = r#"[{"generated_text": "first"}, {"generated_text": "second"}]"#;
        assert_eq!(parse_generated_text(body).unwrap(), "first");
    }

    #[test]
    fn test_parse_generated_text_empty_array() {
        assert!(matches!(
            parse_generated_text("[]"),
            Err(LlmError::EmptyContent)
        ));
    }

    #[test]
    fn test_parse_generated_text_malformed() {
        assert!(matches!(
            parse_generated_text(r#"{"oops": true}"#),
            Err(LlmError::Parse(_))
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let body = InferenceRequest {
            inputs: "hello",
            parameters: InferenceParameters {
                params: GenerationParams {
                    max_new_tokens: 300,
                    do_sample: true,
                    temperature: 0.5,
                },
                return_full_text: true,
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["inputs"], "hello");
        assert_eq!(value["parameters"]["max_new_tokens"], 300);
        assert_eq!(value["parameters"]["do_sample"], true);
        assert_eq!(value["parameters"]["temperature"], 0.5);
        assert_eq!(value["parameters"]["return_full_text"], true);
    }
}
