use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use super::Translator;
use crate::error::{Error, Result};

/// DeepL free-tier translation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";

const TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<TranslatedText>,
}

#[derive(Debug, Deserialize)]
struct TranslatedText {
    text: String,
}

/// Blocking client for the DeepL `/v2/translate` form API.
pub struct DeepLClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl DeepLClient {
    pub fn new(endpoint: String, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Translator for DeepLClient {
    fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        let target_lang = target_lang.to_uppercase();
        let form = [
            ("auth_key", self.api_key.as_str()),
            ("text", text),
            ("target_lang", target_lang.as_str()),
        ];

        let response = self.client.post(&self.endpoint).form(&form).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::RemoteApi {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&response.text()?)
    }
}

/// Extracts `translations[0].text` from a response body.
fn parse_response(body: &str) -> Result<String> {
    let response: TranslateResponse =
        serde_json::from_str(body).map_err(|e| Error::MalformedResponse(e.to_string()))?;

    response
        .translations
        .into_iter()
        .next()
        .map(|t| t.text)
        .ok_or_else(|| Error::MalformedResponse("empty 'translations' array".to_string()))
}
