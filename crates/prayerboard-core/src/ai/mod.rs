//! Generative text service client.
//!
//! Thin calls to the Gemini `generateContent` endpoint for two jobs:
//! translating prayer text and composing a sample prayer for a request.
//! Both MUST fail soft - on any error or missing configuration the
//! caller gets the original text (translate) or a user-facing fallback
//! message (generate), never an error.

pub mod cache;

pub use cache::TranslationCache;

use reqwest::Client;
use serde_json::json;
use tracing::warn;
use url::Url;

use crate::error::CoreError;

/// Environment variable holding the text service API key.
pub const API_KEY_ENV: &str = "PRAYERBOARD_API_KEY";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-2.5-flash";

/// Client for the generative text service.
pub struct TextService {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl TextService {
    /// Service configured from the environment. A missing key is not an
    /// error; every call then takes its fallback path.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            warn!("{API_KEY_ENV} is not set, AI features will return fallbacks");
        }
        Self::new(DEFAULT_BASE_URL, api_key)
    }

    /// Service against an explicit endpoint (tests point this at a mock).
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Translate `text` into the named language.
    ///
    /// Returns the input text unchanged when the key is missing or the
    /// service fails.
    pub async fn translate(&self, text: &str, language_name: &str) -> String {
        if self.api_key.is_none() {
            return text.to_string();
        }
        let prompt = format!(
            "Translate the following text to {language_name}. \
             Do not add any extra formatting or quotes around it:\n\n\"{text}\""
        );
        match self.generate_content(&prompt).await {
            Ok(reply) => reply.trim().to_string(),
            Err(e) => {
                warn!("translation to {language_name} failed: {e}");
                text.to_string()
            }
        }
    }

    /// Compose a sample prayer for `topic` in the named language.
    ///
    /// Returns a user-facing fallback message when the key is missing
    /// or the service fails.
    pub async fn generate_sample(&self, topic: &str, language_name: &str) -> String {
        if self.api_key.is_none() {
            return "API Key not configured. Please contact the administrator.".to_string();
        }
        let prompt = format!(
            "Generate a detailed, heartfelt, and encouraging prayer in {language_name} \
             for the following request: \"{topic}\". The prayer must be in the style of \
             the Local Church / Lord's Recovery movement. It must start with a salutation \
             like \"Dear Lord,\" \"Lord Jesus,\" or \"Oh Lord Jesus\" in {language_name}. \
             It must end with \"Amen.\" in {language_name}. \
             Keep the prayer between 3 and 5 sentences long."
        );
        match self.generate_content(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("sample prayer generation failed: {e}");
                format!(
                    "Could not generate a sample prayer in {language_name} at this time. \
                     Please try again later."
                )
            }
        }
    }

    async fn generate_content(&self, prompt: &str) -> Result<String, CoreError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CoreError::TextService("no API key".into()))?;

        let mut url = Url::parse(&self.base_url)
            .and_then(|base| base.join(&format!("/v1beta/models/{MODEL}:generateContent")))
            .map_err(|e| CoreError::TextService(format!("bad endpoint: {e}")))?;
        url.query_pairs_mut().append_pair("key", key);

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let resp = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CoreError::TextService(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CoreError::TextService(format!("HTTP {}", resp.status())));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| CoreError::TextService(e.to_string()))?;

        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| CoreError::TextService("no text in response".into()))
    }
}
