//! Client for the hosted `generateContent` text-generation endpoint.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::wire::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use super::{
    greeting_prompt, persona_instruction, GenerationError, ReplyInput, TextGenerator,
    GREETING_EMPTY, GREETING_FALLBACK, GREETING_TEMPERATURE, REPLY_EMPTY, REPLY_FALLBACK,
    REPLY_TEMPERATURE,
};
use crate::models::TranscriptRole;
use crate::traits::{Headers, HttpClient};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

/// Text generator backed by a remote model over an [`HttpClient`].
pub struct GeminiClient<H: HttpClient> {
    http: H,
    config: GeminiConfig,
}

impl<H: HttpClient> GeminiClient<H> {
    pub fn new(http: H, config: GeminiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Build the request body for a conversational reply.
    pub fn reply_request(input: &ReplyInput) -> GenerateContentRequest {
        let mut contents: Vec<Content> = input
            .history
            .iter()
            .map(|(role, text)| match role {
                TranscriptRole::User => Content::user(text.clone()),
                TranscriptRole::Persona => Content::model(text.clone()),
            })
            .collect();
        contents.push(Content::user(input.message.clone()));

        GenerateContentRequest {
            contents,
            system_instruction: Some(Content::instruction(persona_instruction(
                &input.persona_name,
                &input.persona_specialty,
            ))),
            generation_config: GenerationConfig {
                temperature: REPLY_TEMPERATURE,
            },
        }
    }

    /// Build the request body for the opening greeting.
    pub fn greeting_request(name: &str, specialty: &str, location: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(greeting_prompt(name, specialty, location))],
            system_instruction: None,
            generation_config: GenerationConfig {
                temperature: GREETING_TEMPERATURE,
            },
        }
    }

    /// Send one request and extract the first candidate's text.
    pub async fn generate(&self, request: &GenerateContentRequest) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(GenerationError::MissingApiKey)?;

        let body = serde_json::to_string(request)?;
        let mut headers = Headers::new();
        headers.insert("x-goog-api-key".to_string(), api_key.to_string());

        let url = self.config.endpoint();
        debug!(model = %self.config.model, turns = request.contents.len(), "generateContent");
        let response = self.http.post_json(&url, &body, &headers).await?;

        if !response.is_success() {
            return Err(GenerationError::Service {
                status: response.status,
                message: response.text(),
            });
        }

        let parsed: GenerateContentResponse = response.json()?;
        parsed.first_text().ok_or(GenerationError::Empty)
    }
}

/// Map a generation result onto the caller-facing line.
fn resolve(result: Result<String, GenerationError>, empty: &str, fallback: &str, what: &str) -> String {
    match result {
        Ok(text) => text,
        Err(GenerationError::Empty) => empty.to_string(),
        Err(e) => {
            warn!(code = e.error_code(), "{} generation failed: {}", what, e);
            fallback.to_string()
        }
    }
}

#[async_trait]
impl<H: HttpClient> TextGenerator for GeminiClient<H> {
    async fn reply(&self, input: ReplyInput) -> String {
        let request = Self::reply_request(&input);
        resolve(self.generate(&request).await, REPLY_EMPTY, REPLY_FALLBACK, "reply")
    }

    async fn greeting(&self, persona_name: &str, persona_specialty: &str, location: &str) -> String {
        let request = Self::greeting_request(persona_name, persona_specialty, location);
        resolve(
            self.generate(&request).await,
            GREETING_EMPTY,
            GREETING_FALLBACK,
            "greeting",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};

    const OK_BODY: &str =
        r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Breathe with me."}]}}]}"#;

    fn client(mock: &MockHttpClient) -> GeminiClient<MockHttpClient> {
        GeminiClient::new(mock.clone(), GeminiConfig::default().with_api_key("test-key"))
    }

    fn input() -> ReplyInput {
        ReplyInput {
            persona_name: "Seraphina Moon".to_string(),
            persona_specialty: "Energy Healer & Reiki Master".to_string(),
            message: "I feel tense".to_string(),
            history: vec![
                (TranscriptRole::Persona, "Welcome.".to_string()),
                (TranscriptRole::User, "Hello".to_string()),
            ],
        }
    }

    #[test]
    fn test_endpoint_format() {
        let config = GeminiConfig {
            api_base: "http://localhost:9/".to_string(),
            ..GeminiConfig::default()
        };
        assert_eq!(
            config.endpoint(),
            "http://localhost:9/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[tokio::test]
    async fn test_reply_maps_history_roles() {
        let mock = MockHttpClient::always(MockResponse::Success(Response::new(200, OK_BODY)));

        let reply = client(&mock).reply(input()).await;
        assert_eq!(reply, "Breathe with me.");

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].headers.get("x-goog-api-key").map(String::as_str), Some("test-key"));

        let body = requests[0].json();
        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "model");
        assert_eq!(contents[1]["role"], "user");
        assert_eq!(contents[2]["parts"][0]["text"], "I feel tense");
        assert!(body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("You are Seraphina Moon"));
    }

    #[tokio::test]
    async fn test_reply_transport_failure_falls_back() {
        let mock = MockHttpClient::always(MockResponse::Error(HttpError::ConnectionFailed("down".into())));
        assert_eq!(client(&mock).reply(input()).await, REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn test_reply_service_error_falls_back() {
        let mock = MockHttpClient::always(MockResponse::Success(Response::new(500, "boom")));
        assert_eq!(client(&mock).reply(input()).await, REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn test_empty_text_uses_empty_lines() {
        let mock = MockHttpClient::always(MockResponse::Success(Response::new(200, r#"{"candidates":[]}"#)));
        let c = client(&mock);
        assert_eq!(c.reply(input()).await, REPLY_EMPTY);
        assert_eq!(c.greeting("Kenji", "Zen Coach", "Japan").await, GREETING_EMPTY);
    }

    #[tokio::test]
    async fn test_missing_key_never_calls_out() {
        let mock = MockHttpClient::new();
        let c = GeminiClient::new(mock.clone(), GeminiConfig::default());
        assert_eq!(c.greeting("Kenji", "Zen Coach", "Japan").await, GREETING_FALLBACK);
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_greeting_request_shape() {
        let mock = MockHttpClient::always(MockResponse::Success(Response::new(200, OK_BODY)));
        client(&mock).greeting("Master Kenji", "Zen Mindfulness Coach", "Japan").await;

        let body = mock.requests()[0].json();
        assert!(body.get("systemInstruction").is_none());
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
        assert!(body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("Master Kenji, a Zen Mindfulness Coach from Japan"));
    }

    #[tokio::test]
    async fn test_against_http_server() {
        use crate::adapters::ReqwestHttpClient;
        use wiremock::matchers::{header, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-3-flash-preview:generateContent"))
            .and(header("x-goog-api-key", "live-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(OK_BODY))
            .expect(1)
            .mount(&server)
            .await;

        let config = GeminiConfig {
            api_key: Some("live-key".to_string()),
            api_base: server.uri(),
            ..GeminiConfig::default()
        };
        let c = GeminiClient::new(ReqwestHttpClient::new(), config);
        assert_eq!(c.reply(input()).await, "Breathe with me.");
    }
}
