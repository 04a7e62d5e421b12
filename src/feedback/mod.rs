//! AI feedback requester
//!
//! Thin client over the external text-generation service. The keyword
//! analysis never depends on this path: every delegate failure is folded
//! into a displayable [`Feedback::Unavailable`] message instead of an error.

pub mod prompts;

use crate::config::FeedbackConfig;
use crate::error::{Result, ResumeAnalyzerError};
use log::{debug, warn};
use prompts::{PromptParams, PromptTemplates};
use serde::{Deserialize, Serialize};

/// Outcome of a feedback request. Always displayable; callers never need an
/// error branch for this component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum Feedback {
    Generated(String),
    Unavailable(String),
}

impl Feedback {
    pub fn text(&self) -> &str {
        match self {
            Feedback::Generated(text) | Feedback::Unavailable(text) => text,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Feedback::Generated(_))
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    error: ServiceErrorBody,
}

#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    message: String,
}

/// Client for the text-generation service. One request per analysis; no
/// retry, no streaming. The HTTP client's timeout is the only time bound.
pub struct FeedbackRequester {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    templates: PromptTemplates,
}

impl FeedbackRequester {
    /// Build a requester from resolved configuration. A missing credential is
    /// a configuration failure, surfaced here rather than mid-analysis.
    pub fn new(config: &FeedbackConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                ResumeAnalyzerError::Configuration(format!(
                    "No API key configured for the feedback service. Set {} or add it to the config file.",
                    crate::config::API_KEY_ENV
                ))
            })?
            .to_string();

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ResumeAnalyzerError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api_key,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            templates: PromptTemplates::default(),
        })
    }

    /// Request prose feedback for a resume against a job description.
    /// Never fails: delegate errors come back as `Feedback::Unavailable`
    /// with the failure description embedded.
    pub async fn request_feedback(&self, resume_text: &str, jd_text: &str) -> Feedback {
        let prompt = self.templates.render_feedback(&PromptParams {
            resume_content: resume_text.to_string(),
            job_content: jd_text.to_string(),
        });

        match self.generate(&prompt).await {
            Ok(text) => Feedback::Generated(text),
            Err(e) => {
                warn!("Feedback generation failed: {}", e);
                Feedback::Unavailable(format!(
                    "An error occurred while generating AI feedback: {}",
                    e
                ))
            }
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let request_body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!("Requesting feedback from model {}", self.model);

        let response = self.client.post(&url).json(&request_body).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ServiceError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ResumeAnalyzerError::Feedback(format!(
                "service returned status {}: {}",
                status, message
            )));
        }

        let parsed: GenerateResponse = serde_json::from_str(&body).map_err(|e| {
            ResumeAnalyzerError::Feedback(format!("unexpected response body: {}", e))
        })?;

        parsed
            .candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .find_map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ResumeAnalyzerError::Feedback("service returned no text content".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeedbackConfig;

    fn config_with_key(endpoint: &str) -> FeedbackConfig {
        FeedbackConfig {
            api_key: Some("test-key".to_string()),
            endpoint: endpoint.to_string(),
            model: "test-model".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_missing_credential_is_configuration_error() {
        let config = FeedbackConfig {
            api_key: None,
            endpoint: "https://example.invalid".to_string(),
            model: "test-model".to_string(),
            timeout_secs: 5,
        };

        let result = FeedbackRequester::new(&config);
        assert!(matches!(
            result,
            Err(ResumeAnalyzerError::Configuration(_))
        ));
    }

    #[test]
    fn test_blank_credential_is_configuration_error() {
        let mut config = config_with_key("https://example.invalid");
        config.api_key = Some("  ".to_string());

        assert!(FeedbackRequester::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_successful_generation() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "POST",
                "/models/test-model:generateContent?key=test-key",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"1. Overall Summary: solid resume."}]}}]}"#,
            )
            .create_async()
            .await;

        let requester = FeedbackRequester::new(&config_with_key(&server.url())).unwrap();
        let feedback = requester
            .request_feedback("Python developer resume", "Python engineer role")
            .await;

        mock.assert_async().await;
        assert!(feedback.is_generated());
        assert!(feedback.text().contains("Overall Summary"));
    }

    #[tokio::test]
    async fn test_service_failure_becomes_unavailable_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                "/models/test-model:generateContent?key=test-key",
            )
            .with_status(503)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"quota exceeded"}}"#)
            .create_async()
            .await;

        let requester = FeedbackRequester::new(&config_with_key(&server.url())).unwrap();
        let feedback = requester.request_feedback("resume", "job").await;

        assert!(!feedback.is_generated());
        assert!(feedback
            .text()
            .contains("An error occurred while generating AI feedback"));
        assert!(feedback.text().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_unavailable_message() {
        // Unroutable endpoint; the connection itself fails.
        let requester =
            FeedbackRequester::new(&config_with_key("http://127.0.0.1:1")).unwrap();
        let feedback = requester.request_feedback("resume", "job").await;

        assert!(!feedback.is_generated());
        assert!(feedback
            .text()
            .contains("An error occurred while generating AI feedback"));
    }

    #[tokio::test]
    async fn test_empty_candidates_is_a_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                "/models/test-model:generateContent?key=test-key",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let requester = FeedbackRequester::new(&config_with_key(&server.url())).unwrap();
        let feedback = requester.request_feedback("resume", "job").await;

        assert!(!feedback.is_generated());
    }
}
