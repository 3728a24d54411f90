use super::ExplanationProvider;
use crate::error::{Result, WordbookError};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Generation can be slow; interactive use still wants a bound.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const PROMPT_TEMPLATE: &str = r#"
Please provide a comprehensive explanation for the English word "{word}" in the following format:

## {word}

*[IPA phonetic symbols]*

> [Brief English definition]

**[Simplified Chinese meaning, NO pinyin]**

- [One example sentence using the word]
- [Chinese translation using only Simplified Chinese characters, NO pinyin]

*[one usage note or tip]*

Important formatting rules:
- Use only Simplified Chinese characters for Chinese translations
- Do NOT include pinyin (romanized Chinese) in any Chinese text
- Ensure the response is in proper markdown format
"#;

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
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
    text: String,
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/{}:generateContent", API_BASE, model),
        })
    }

    fn generate(&self, prompt: String) -> Result<reqwest::blocking::Response> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };
        let url = format!("{}?key={}", self.endpoint, self.api_key);
        Ok(self.client.post(&url).json(&request).send()?)
    }
}

impl ExplanationProvider for GeminiClient {
    fn explain(&self, word: &str) -> Result<String> {
        let prompt = PROMPT_TEMPLATE.replace("{word}", word);
        let response = self.generate(prompt)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(WordbookError::Provider(format!(
                "Gemini API returned {}: {}",
                status,
                api_error_message(&body)
            )));
        }

        let parsed: GenerateResponse = response.json()?;
        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(WordbookError::Provider(
                "no explanation received from the Gemini API".to_string(),
            ));
        }
        Ok(text)
    }

    fn test_connection(&self) -> Result<bool> {
        match self.generate("Hello".to_string()) {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }
}

/// Pull the human-readable message out of a Gemini error body, falling back
/// to the raw body when it is not the expected JSON shape.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
