use std::time::Duration;

use log::{error, warn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::pipeline::FounderExtraction;

/// Literal model response meaning "no founders mentioned in this text".
pub const NONE_SENTINEL: &str = "NONE";

const MAX_OUTPUT_TOKENS: u32 = 100;

pub struct FounderExtractor {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl FounderExtractor {
    pub fn new(api_key: String, endpoint: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build Model Client");

        FounderExtractor {
            client,
            api_key,
            endpoint,
            model,
        }
    }

    fn request_names(&self, chunk: &str, company: &str) -> Result<Vec<String>, reqwest::Error> {
        let prompt = build_prompt(chunk, company);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: 0.0,
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        if !resp.status().is_success() {
            warn!("Model API returned status {}", resp.status());
            return Ok(Vec::new());
        }

        let body: ChatResponse = resp.json()?;
        let content = body
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .unwrap_or("");

        Ok(parse_founder_list(content))
    }
}

impl FounderExtraction for FounderExtractor {
    /// Asks the model for founder names in one text chunk. Any failure
    /// is logged and counts as zero names for this chunk; the chunk is
    /// not retried.
    fn founder_names(&self, chunk: &str, company: &str) -> Vec<String> {
        match self.request_names(chunk, company) {
            Ok(names) => names,
            Err(e) => {
                error!("Model call failed for {}: {}", company, e);
                Vec::new()
            }
        }
    }
}

pub fn build_prompt(chunk: &str, company: &str) -> String {
    format!(
        "Extract only the names of the company's founders (people who started/co-founded \
         the company: {company}). Do NOT include employees with job titles like 'Founding \
         Engineer' or 'Founding Designer' - only the actual company founders. Return just \
         the founder names separated by commas, nothing else. Names shouldn't be more than \
         3 or 4 words long, so if it is more than that it is probably not what I am looking \
         for. If no company founders mentioned, return '{NONE_SENTINEL}'.\n\nText: {chunk}"
    )
}

/// Parses the model's comma-separated reply. The bare sentinel means no
/// founders; otherwise pieces are trimmed, empties and stray sentinels
/// dropped, and duplicates within this one reply collapsed.
pub fn parse_founder_list(content: &str) -> Vec<String> {
    let content = content.trim();
    if content == NONE_SENTINEL {
        return Vec::new();
    }

    let mut names: Vec<String> = Vec::new();
    for piece in content.split(',') {
        let name = piece.trim();
        if name.is_empty() || name.eq_ignore_ascii_case(NONE_SENTINEL) {
            continue;
        }
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_means_no_founders() {
        assert!(parse_founder_list("NONE").is_empty());
        assert!(parse_founder_list("  NONE  ").is_empty());
    }

    #[test]
    fn splits_and_trims_comma_list() {
        assert_eq!(
            parse_founder_list("Jane Doe, John Smith"),
            vec!["Jane Doe", "John Smith"]
        );
    }

    #[test]
    fn drops_empty_pieces_and_stray_sentinels() {
        assert_eq!(
            parse_founder_list("Jane Doe,, none , John Smith"),
            vec!["Jane Doe", "John Smith"]
        );
    }

    #[test]
    fn dedupes_within_a_single_reply() {
        assert_eq!(
            parse_founder_list("Jane Doe, Jane Doe, John Smith"),
            vec!["Jane Doe", "John Smith"]
        );
    }

    #[test]
    fn prompt_names_the_company_and_sentinel() {
        let prompt = build_prompt("some page text", "Acme Inc");
        assert!(prompt.contains("Acme Inc"));
        assert!(prompt.contains("NONE"));
        assert!(prompt.ends_with("some page text"));
    }
}
