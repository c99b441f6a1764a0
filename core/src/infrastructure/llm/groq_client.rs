use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    analysis::{ports::SemanticAnalyzer, schema::RawAnalysisResponse},
    common::{LlmConfig, entities::app_errors::CoreError},
    profile::value_objects::UserProfile,
};

use super::prompts::{build_analysis_prompt, build_system_prompt};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Semantic analyzer backed by the Groq chat completions API.
///
/// Owns the retry/backoff policy for the collaborator boundary: malformed
/// responses are retried with exponential backoff up to the configured
/// attempt count, then surfaced as `CoreError::ExternalServiceError`.
#[derive(Debug, Clone)]
pub struct GroqSemanticAnalyzer {
    api_key: String,
    model_name: String,
    max_retries: u32,
    retry_delay: Duration,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageResponse,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: String,
}

impl GroqSemanticAnalyzer {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            api_key: config.groq_api_key,
            model_name: config.groq_model,
            max_retries: config.max_retries.max(1),
            retry_delay: Duration::from_secs(config.retry_delay_secs),
            client: Client::new(),
        }
    }

    async fn call_groq_api(&self, request: &ChatRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Groq API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Groq API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Groq response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        chat_response
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }

    /// One analysis round-trip with bounded retries on malformed JSON.
    async fn call_with_retry(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<RawAnalysisResponse, CoreError> {
        let request = ChatRequest {
            model: self.model_name.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt.to_string(),
                },
            ],
            temperature: 0.3,
            max_tokens: 2048,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let mut last_error = None;
        for attempt in 0..self.max_retries {
            if attempt > 0 {
                // Exponential backoff, capped at ten seconds per attempt.
                let delay = self.retry_delay * 2u32.saturating_pow(attempt - 1);
                tokio::time::sleep(delay.min(Duration::from_secs(10))).await;
            }

            let content = self.call_groq_api(&request).await?;

            match serde_json::from_str::<RawAnalysisResponse>(strip_code_fences(&content)) {
                Ok(parsed) => return Ok(parsed),
                Err(e) => {
                    tracing::error!(
                        attempt = attempt + 1,
                        "Failed to parse Groq response as JSON: {}",
                        e
                    );
                    last_error = Some(CoreError::ExternalServiceError(format!(
                        "Failed to parse LLM response: {}",
                        e
                    )));
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string())))
    }
}

/// Strip a surrounding markdown code fence, if the model added one anyway.
fn strip_code_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

impl SemanticAnalyzer for GroqSemanticAnalyzer {
    async fn analyze(
        &self,
        ingredients: &str,
        user_profile: &UserProfile,
    ) -> Result<RawAnalysisResponse, CoreError> {
        if ingredients.trim().is_empty() {
            return Ok(empty_response("No ingredients provided"));
        }
        if user_profile.active_profiles.is_empty() && user_profile.custom_restrictions.is_empty() {
            return Ok(empty_response("No health profiles selected"));
        }

        let system_prompt = build_system_prompt(user_profile);
        let analysis_prompt = build_analysis_prompt(ingredients);

        match self.call_with_retry(&system_prompt, &analysis_prompt).await {
            Ok(response) => Ok(response),
            Err(e) => {
                tracing::error!("Analysis failed: {}", e);
                Err(e)
            }
        }
    }
}

fn empty_response(message: &str) -> RawAnalysisResponse {
    RawAnalysisResponse {
        overall_verdict: Some("CAUTION".to_string()),
        confidence_score: Some(0.0),
        safe_for_general_public: Some(true),
        user_specific_warning: Some(false),
        summary: Some(message.to_string()),
        error: true,
        ..RawAnalysisResponse::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::entities::ProfileType;

    #[test]
    fn code_fences_are_stripped() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
    }

    #[tokio::test]
    async fn empty_ingredients_short_circuit_without_a_network_call() {
        let analyzer = GroqSemanticAnalyzer::new(LlmConfig::new(
            "test-key".to_string(),
            "test-model".to_string(),
        ));
        let profile = UserProfile::new(vec![ProfileType::Keto]);

        let response = analyzer.analyze("   ", &profile).await.unwrap();
        assert!(response.error);
        assert_eq!(response.summary.as_deref(), Some("No ingredients provided"));
    }

    #[tokio::test]
    async fn empty_profile_short_circuits_without_a_network_call() {
        let analyzer = GroqSemanticAnalyzer::new(LlmConfig::new(
            "test-key".to_string(),
            "test-model".to_string(),
        ));

        let response = analyzer
            .analyze("Water, Salt", &UserProfile::default())
            .await
            .unwrap();
        assert!(response.error);
        assert_eq!(
            response.summary.as_deref(),
            Some("No health profiles selected")
        );
    }
}
