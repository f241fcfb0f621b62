//! HTTP client for the Gemini `generateContent` endpoint.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::AdjudicatorError;

/// One uploaded document forwarded to the reasoning service inline.
pub struct DocumentPart {
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Abstraction over the reasoning service. Handlers depend on this trait,
/// tests script it.
pub trait ReasoningClient {
    /// Send one prompt (plus optional inline documents) and return the raw
    /// text of the first candidate.
    fn generate(
        &self,
        system: &str,
        prompt: &str,
        documents: &[DocumentPart],
    ) -> Result<String, AdjudicatorError>;
}

/// Gemini client over the public REST API.
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: &str,
        timeout_secs: u64,
    ) -> Result<Self, AdjudicatorError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AdjudicatorError::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
            client,
            timeout_secs,
        })
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
enum Part<'a> {
    #[serde(rename = "text")]
    Text(&'a str),
    #[serde(rename = "inline_data")]
    InlineData { mime_type: String, data: String },
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl ReasoningClient for GeminiClient {
    fn generate(
        &self,
        system: &str,
        prompt: &str,
        documents: &[DocumentPart],
    ) -> Result<String, AdjudicatorError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let mut parts = vec![Part::Text(prompt)];
        for doc in documents {
            parts.push(Part::InlineData {
                mime_type: doc.mime_type.clone(),
                data: BASE64.encode(&doc.data),
            });
        }

        let body = GenerateRequest {
            system_instruction: (!system.is_empty()).then(|| Content {
                role: None,
                parts: vec![Part::Text(system)],
            }),
            contents: vec![Content {
                role: Some("user"),
                parts,
            }],
            generation_config: GenerationConfig {
                temperature: 0.2,
                response_mime_type: "application/json",
            },
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                AdjudicatorError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                AdjudicatorError::Timeout(self.timeout_secs)
            } else {
                AdjudicatorError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AdjudicatorError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| AdjudicatorError::JsonParsing(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                AdjudicatorError::MalformedResponse("response carries no candidates".into())
            })?;

        Ok(text)
    }
}

/// Scripted client for tests — replays canned responses in order.
#[cfg(test)]
pub struct ScriptedClient {
    responses: std::sync::Mutex<std::collections::VecDeque<String>>,
}

#[cfg(test)]
impl ScriptedClient {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: std::sync::Mutex::new(
                responses.into_iter().map(Into::into).collect(),
            ),
        }
    }
}

#[cfg(test)]
impl ReasoningClient for ScriptedClient {
    fn generate(
        &self,
        _system: &str,
        _prompt: &str,
        _documents: &[DocumentPart],
    ) -> Result<String, AdjudicatorError> {
        self.responses
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .ok_or_else(|| AdjudicatorError::MalformedResponse("script exhausted".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_trims_trailing_slash() {
        let client =
            GeminiClient::new("https://generativelanguage.googleapis.com/", "gemini", "k", 60)
                .unwrap();
        assert_eq!(client.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(client.timeout_secs, 60);
    }

    #[test]
    fn scripted_client_replays_in_order() {
        let client = ScriptedClient::new(["first", "second"]);
        assert_eq!(client.generate("", "", &[]).unwrap(), "first");
        assert_eq!(client.generate("", "", &[]).unwrap(), "second");
        assert!(client.generate("", "", &[]).is_err());
    }

    #[test]
    fn request_body_inlines_documents_as_base64() {
        let doc = DocumentPart {
            name: "skan.pdf".into(),
            mime_type: "application/pdf".into(),
            data: vec![1, 2, 3],
        };
        let part = Part::InlineData {
            mime_type: doc.mime_type.clone(),
            data: BASE64.encode(&doc.data),
        };
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["inline_data"]["mime_type"], "application/pdf");
        assert_eq!(json["inline_data"]["data"], "AQID");
    }
}
