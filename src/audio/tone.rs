use anyhow::Context;
use serde::Serialize;
use std::path::Path;

/// Parameters for the synthetic notification tone.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToneSpec {
    pub duration_ms: u32,
    pub frequency_hz: f32,
    pub sample_rate_hz: u32,
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self {
            duration_ms: 500,
            frequency_hz: 800.0,
            sample_rate_hz: 44_100,
        }
    }
}

impl ToneSpec {
    pub fn sample_count(&self) -> usize {
        (self.sample_rate_hz as u64 * self.duration_ms as u64 / 1000) as usize
    }
}

/// Decay constant of the fade-out envelope, in 1/seconds.
const ENVELOPE_DECAY: f32 = 10.0;

/// Peak amplitude relative to full scale, before the envelope.
const AMPLITUDE: f32 = 0.5;

/// Render the tone as mono 16-bit PCM: a sine at the configured frequency
/// under an exponential-decay envelope so it fades instead of clipping off.
pub fn render(spec: &ToneSpec) -> Vec<i16> {
    let rate = spec.sample_rate_hz as f32;
    (0..spec.sample_count())
        .map(|i| {
            let t = i as f32 / rate;
            let wave = (2.0 * std::f32::consts::PI * spec.frequency_hz * t).sin();
            let envelope = (-ENVELOPE_DECAY * t).exp();
            (wave * AMPLITUDE * envelope * f32::from(i16::MAX)) as i16
        })
        .collect()
}

/// Silent clip of the same nominal duration, used as the fallback asset.
pub fn render_silence(spec: &ToneSpec) -> Vec<i16> {
    vec![0; spec.sample_count()]
}

pub fn write_wav(path: &Path, samples: &[i16], sample_rate_hz: u32) -> anyhow::Result<()> {
    let wav_spec = hound::WavSpec {
        channels: 1,
        sample_rate: sample_rate_hz,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, wav_spec)
        .with_context(|| format!("create wav at {}", path.display()))?;
    for &sample in samples {
        writer.write_sample(sample).context("write wav sample")?;
    }
    writer.finalize().context("finalize wav")?;
    Ok(())
}
