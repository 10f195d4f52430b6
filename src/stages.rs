//! The four generation stages. Each iterates its static table exactly once
//! and records per-item outcomes; a failed item never stops the stage.

use std::path::Path;

use crate::audio::tone::{self, ToneSpec};
use crate::audio::transcode::Transcode;
use crate::catalog;
use crate::numerals;
use crate::report::RunReport;
use crate::tts::SpeechSynthesizer;

pub fn generate_number_prompts(
    synth: &dyn SpeechSynthesizer,
    out_dir: &Path,
    report: &mut RunReport,
) {
    tracing::info!("generating number prompts");
    for n in numerals::MIN..=numerals::MAX {
        let file = format!("{n}.mp3");
        let result = numerals::spoken_number(n)
            .map_err(anyhow::Error::from)
            .and_then(|words| {
                let text = format!("{} {}", catalog::NUMBER_CALL_PREFIX, words);
                synth.synthesize_to(&text, &out_dir.join(&file))
            });
        report.record(&file, result);
    }
}

pub fn generate_clinic_prompts(
    synth: &dyn SpeechSynthesizer,
    out_dir: &Path,
    report: &mut RunReport,
) {
    tracing::info!("generating clinic prompts");
    for (id, name) in catalog::CLINICS {
        let file = format!("clinic{id}.mp3");
        let text = format!("{} {}", catalog::CLINIC_CALL_PREFIX, name);
        report.record(&file, synth.synthesize_to(&text, &out_dir.join(&file)));
    }
}

pub fn generate_instant_prompts(
    synth: &dyn SpeechSynthesizer,
    out_dir: &Path,
    report: &mut RunReport,
) {
    tracing::info!("generating waiting-room prompts");
    for (idx, text) in catalog::INSTANT_MESSAGES.iter().enumerate() {
        let file = format!("instant{}.mp3", idx + 1);
        report.record(&file, synth.synthesize_to(text, &out_dir.join(&file)));
    }
}

/// Synthesize the notification chime; on failure, export a silent clip of
/// the same duration so the asset still exists.
pub fn generate_chime(
    transcoder: &dyn Transcode,
    spec: &ToneSpec,
    out_dir: &Path,
    report: &mut RunReport,
) {
    tracing::info!("generating notification chime");
    let file = "ding.mp3";
    let output = out_dir.join(file);

    match export_pcm(transcoder, &tone::render(spec), spec, &output) {
        Ok(()) => report.record(file, Ok(())),
        Err(err) => {
            tracing::warn!(error = ?err, "chime synthesis failed; exporting silence");
            match export_pcm(transcoder, &tone::render_silence(spec), spec, &output) {
                Ok(()) => report.record_fallback(file),
                Err(fallback_err) => report.record(file, Err(fallback_err)),
            }
        }
    }
}

fn export_pcm(
    transcoder: &dyn Transcode,
    samples: &[i16],
    spec: &ToneSpec,
    output: &Path,
) -> anyhow::Result<()> {
    let temp = tempfile::Builder::new()
        .prefix("queue-announcer-")
        .suffix(".wav")
        .tempfile()?;
    tone::write_wav(temp.path(), samples, spec.sample_rate_hz)?;
    transcoder.to_mp3(temp.path(), output)
}
