//! Gemini `generateContent` client.
//!
//! One request, no retries. Failures here are absorbed by the prophecy
//! generator, so errors carry context for the log line and nothing else.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::GEMINI_API_BASE;

/// Sampling parameters recovered from the original service: high
/// temperature so repeated requests vary.
const TEMPERATURE: f64 = 1.2;
const TOP_P: f64 = 0.95;
const TOP_K: u32 = 40;

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "topP")]
    top_p: f64,
    #[serde(rename = "topK")]
    top_k: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Client for the Gemini text-generation API. The credential is supplied per
/// call by the requester, never stored.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    /// Creates a client against the production API.
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, GEMINI_API_BASE)
    }

    /// Creates a client against an alternate base URL; used by tests to
    /// point at an unroutable address and exercise the fallback path.
    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Performs a single text-generation call and returns the concatenated
    /// text parts of the first candidate.
    pub async fn generate_text(&self, api_key: &str, model: &str, prompt: &str) -> Result<String> {
        let req_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                top_k: TOP_K,
            },
        };

        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&req_body)
            .send()
            .await
            .context("Request to generateContent failed")?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .context("Failed reading generateContent body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "Gemini API error {status}: {}",
                String::from_utf8_lossy(&bytes)
            ));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_slice(&bytes).context("Failed to parse generateContent JSON")?;
        if let Some(err) = parsed.error {
            return Err(anyhow!("Gemini API returned error: {err}"));
        }

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(anyhow!("generateContent response contained no text"));
        }

        Ok(text)
    }
}
