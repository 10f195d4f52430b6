pub mod google;
pub mod provider;

use anyhow::Context;
use std::fs;
use std::path::Path;

use crate::audio::transcode::Transcode;
use provider::TtsBackend;

/// Produces one MP3 asset per phrase. Stages only see this seam, so tests
/// can swap the whole network-and-codec pipeline for a stub.
pub trait SpeechSynthesizer {
    fn synthesize_to(&self, text: &str, output: &Path) -> anyhow::Result<()>;
}

/// The production pipeline: fetch encoded speech from the backend, park it
/// in a scoped temp file, and re-export it as the final MP3.
pub struct Synthesizer {
    backend: Box<dyn TtsBackend>,
    transcoder: Box<dyn Transcode>,
}

impl Synthesizer {
    pub fn new(backend: Box<dyn TtsBackend>, transcoder: Box<dyn Transcode>) -> Self {
        Self {
            backend,
            transcoder,
        }
    }
}

impl SpeechSynthesizer for Synthesizer {
    fn synthesize_to(&self, text: &str, output: &Path) -> anyhow::Result<()> {
        let text = normalize(text);

        let speech = self
            .backend
            .fetch(&text)
            .with_context(|| format!("fetch speech from {}", self.backend.name()))?;

        // The guard removes the intermediate file on every exit path.
        let temp = tempfile::Builder::new()
            .prefix("queue-announcer-")
            .suffix(".mp3")
            .tempfile()
            .context("create temp audio file")?;
        fs::write(temp.path(), &speech).context("write temp audio file")?;

        self.transcoder
            .to_mp3(temp.path(), output)
            .with_context(|| format!("export {}", output.display()))?;

        Ok(())
    }
}

/// Collapse runs of whitespace and trim. The backend takes logical-order
/// Arabic as-is, so no reshaping happens here.
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
