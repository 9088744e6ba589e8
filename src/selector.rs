//! LLM-guided question selection
//!
//! The selector is shown the answers so far and the numbered list of
//! remaining questions, and replies with the number of the question to ask
//! next. Anything short of a usable in-range number counts as "no further
//! question available"; failures are logged and never raised.

use crate::types::TranscriptEntry;
use anyhow::{Context, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Default chat-completion endpoint
pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "google/gemini-2.0-flash-001";

/// Picks the position of the next question among the remaining candidates
#[allow(async_fn_in_trait)]
pub trait QuestionSelector {
    /// Returns an index into `candidates`, or `None` when selection failed
    async fn select_index(&self, history: &[TranscriptEntry], candidates: &[String])
        -> Option<usize>;
}

impl<S: QuestionSelector + ?Sized> QuestionSelector for &S {
    async fn select_index(
        &self,
        history: &[TranscriptEntry],
        candidates: &[String],
    ) -> Option<usize> {
        (**self).select_index(history, candidates).await
    }
}

/// Configuration for the LLM selector
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Chat-completion endpoint
    pub api_url: String,

    /// Bearer token
    pub api_key: String,

    /// Model to use (default: google/gemini-2.0-flash-001)
    pub model: String,

    /// Sent as `HTTP-Referer` for request attribution
    pub referer: String,

    /// Sent as `X-Title` for request attribution
    pub title: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            referer: "https://github.com/martian-engineering/alexandria".to_string(),
            title: "Alexandria Survey".to_string(),
        }
    }
}

/// Selector backed by a remote chat-completion model
pub struct LlmSelector {
    client: reqwest::Client,
    config: SelectorConfig,
}

impl LlmSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// POST one user message to the endpoint
    async fn send_prompt(&self, prompt: &str) -> Result<reqwest::Response> {
        let request_body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });
        tracing::debug!("Selector request: {}", request_body);

        self.client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title)
            .json(&request_body)
            .send()
            .await
            .context("Failed to reach selector endpoint")
    }

    /// Send one user message and return the reply text
    pub async fn request_completion(&self, prompt: &str) -> Result<String> {
        let api_response = self.send_prompt(prompt).await?;

        let status = api_response.status();
        if !status.is_success() {
            let error_text = api_response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("API error ({}): {}", status, error_text));
        }

        let response_json: serde_json::Value = api_response
            .json()
            .await
            .context("Selector response was not valid JSON")?;
        tracing::debug!("Selector response: {}", response_json);

        extract_content(&response_json)
    }

    /// Ping the endpoint with a trivial prompt; any success status counts
    pub async fn check_connection(&self) -> bool {
        match self.send_prompt("Respond with only the number: 1").await {
            Ok(response) if response.status().is_success() => {
                tracing::info!("API connection ok ({})", response.status());
                true
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                tracing::warn!("API connection test failed ({}): {}", status, body);
                false
            }
            Err(e) => {
                tracing::warn!("API connection test failed: {:#}", e);
                false
            }
        }
    }
}

impl QuestionSelector for LlmSelector {
    async fn select_index(
        &self,
        history: &[TranscriptEntry],
        candidates: &[String],
    ) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }

        let prompt = build_selection_prompt(history, candidates);
        let reply = match self.request_completion(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Error selecting next question: {:#}", e);
                return None;
            }
        };

        let index = parse_selection(&reply, candidates.len());
        match index {
            Some(i) => tracing::info!("Selected index: {}", i),
            None => tracing::warn!("Unusable selector reply: {:?}", reply),
        }
        index
    }
}

/// Pull `choices[0].message.content` out of a chat-completion response
fn extract_content(response: &serde_json::Value) -> Result<String> {
    response["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .context("Response is missing choices[0].message.content")
}

/// Build the prompt asking for the next question number
pub fn build_selection_prompt(history: &[TranscriptEntry], candidates: &[String]) -> String {
    let mut prompt = String::from(
        "Task: Select the most appropriate next question number from the available options.\n\n",
    );

    if !history.is_empty() {
        prompt.push_str("Previous responses:\n");
        for entry in history {
            prompt.push_str(&format!("Q: {}\nA: {}\n", entry.question, entry.answer));
        }
        prompt.push('\n');
    }

    prompt.push_str("Available questions (select one number):\n");
    for (idx, question) in candidates.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", idx, question));
    }

    prompt.push_str(
        "\nProvide ONLY the question number (e.g. '2' or '15'). Do not explain your choice.",
    );
    prompt
}

/// First run of ASCII digits appearing anywhere in the text
pub fn parse_first_integer(text: &str) -> Option<usize> {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    // `\d` is Unicode-aware; only ASCII digits count
    let re = DIGITS.get_or_init(|| Regex::new(r"[0-9]+").expect("valid digit pattern"));

    // A digit run too large for usize is a failure, not a fallback to the next one
    re.find(text)?.as_str().parse().ok()
}

/// Parse a selector reply against the current number of candidates
pub fn parse_selection(text: &str, candidate_count: usize) -> Option<usize> {
    parse_first_integer(text).filter(|&i| i < candidate_count)
}
