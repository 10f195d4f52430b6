use anyhow::{bail, Context};
use reqwest::blocking::Client;
use std::time::Duration;

use super::provider::TtsBackend;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Speech backend using Google Translate's TTS endpoint.
///
/// The endpoint returns MP3 audio directly. Arabic text is sent in logical
/// order; the service handles shaping on its side.
pub struct GoogleTranslateTts {
    client: Client,
    endpoint: String,
    language: String,
    slow: bool,
}

impl GoogleTranslateTts {
    pub fn new(language: &str, tld: &str, slow: bool) -> anyhow::Result<Self> {
        let endpoint = format!("https://translate.google.{tld}/translate_tts");
        Self::with_endpoint(&endpoint, language, slow)
    }

    /// Point the backend at an arbitrary URL; used to test against a local
    /// server.
    pub fn with_endpoint(endpoint: &str, language: &str, slow: bool) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build http client")?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            language: language.to_string(),
            slow,
        })
    }
}

impl TtsBackend for GoogleTranslateTts {
    fn name(&self) -> &str {
        "google-translate-tts"
    }

    fn fetch(&self, text: &str) -> anyhow::Result<Vec<u8>> {
        // The tw-ob client is the token-free surface gTTS uses.
        let speed = if self.slow { "0.3" } else { "1" };
        let textlen = text.chars().count().to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.language.as_str()),
                ("q", text),
                ("textlen", textlen.as_str()),
                ("ttsspeed", speed),
                ("total", "1"),
                ("idx", "0"),
            ])
            .send()
            .context("send speech request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            bail!("speech endpoint returned {status}: {}", body.trim());
        }

        let bytes = response
            .bytes()
            .context("read speech response body")?
            .to_vec();

        if bytes.is_empty() {
            bail!("speech endpoint returned an empty body");
        }

        Ok(bytes)
    }
}
