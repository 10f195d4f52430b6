use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use queue_announcer::audio::tone::ToneSpec;
use queue_announcer::audio::transcode::Transcode;
use queue_announcer::report::RunReport;
use queue_announcer::stages;
use queue_announcer::tts::SpeechSynthesizer;

/// Stub synthesizer that writes a marker file per request and remembers the
/// phrases it was asked to speak. Fails for files listed in `fail_for`.
#[derive(Default)]
struct StubSynth {
    texts: Mutex<Vec<(String, String)>>,
    fail_for: Vec<&'static str>,
}

impl SpeechSynthesizer for StubSynth {
    fn synthesize_to(&self, text: &str, output: &Path) -> anyhow::Result<()> {
        let file = output.file_name().unwrap().to_string_lossy().to_string();
        if self.fail_for.contains(&file.as_str()) {
            anyhow::bail!("simulated synthesis failure");
        }
        self.texts.lock().unwrap().push((file, text.to_string()));
        fs::write(output, b"mp3-bytes")?;
        Ok(())
    }
}

/// Stub transcoder that copies the input through, optionally failing the
/// first N calls.
struct StubTranscoder {
    fail_first: AtomicUsize,
}

impl StubTranscoder {
    fn new(fail_first: usize) -> Self {
        Self {
            fail_first: AtomicUsize::new(fail_first),
        }
    }
}

impl Transcode for StubTranscoder {
    fn to_mp3(&self, input: &Path, output: &Path) -> anyhow::Result<()> {
        let remaining = self.fail_first.load(Ordering::SeqCst);
        if remaining > 0 {
            self.fail_first.store(remaining - 1, Ordering::SeqCst);
            anyhow::bail!("simulated transcode failure");
        }
        fs::copy(input, output)?;
        Ok(())
    }
}

#[test]
fn clean_run_produces_all_216_assets() {
    let dir = tempfile::tempdir().unwrap();
    let synth = StubSynth::default();
    let transcoder = StubTranscoder::new(0);
    let mut report = RunReport::default();

    stages::generate_number_prompts(&synth, dir.path(), &mut report);
    stages::generate_clinic_prompts(&synth, dir.path(), &mut report);
    stages::generate_instant_prompts(&synth, dir.path(), &mut report);
    stages::generate_chime(&transcoder, &ToneSpec::default(), dir.path(), &mut report);

    assert_eq!(report.assets.len(), 216);
    assert_eq!(report.written(), 216);
    assert_eq!(report.failed(), 0);

    let mut files: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    files.sort();
    files.dedup();
    assert_eq!(files.len(), 216);

    for n in 1..=200 {
        let path = dir.path().join(format!("{n}.mp3"));
        assert!(fs::metadata(&path).unwrap().len() > 0, "{n}.mp3 empty");
    }
    for k in 1..=10 {
        assert!(dir.path().join(format!("clinic{k}.mp3")).exists());
    }
    for k in 1..=5 {
        assert!(dir.path().join(format!("instant{k}.mp3")).exists());
    }
    assert!(dir.path().join("ding.mp3").exists());
}

#[test]
fn phrases_follow_the_announcement_templates() {
    let dir = tempfile::tempdir().unwrap();
    let synth = StubSynth::default();
    let mut report = RunReport::default();

    stages::generate_number_prompts(&synth, dir.path(), &mut report);
    stages::generate_clinic_prompts(&synth, dir.path(), &mut report);
    stages::generate_instant_prompts(&synth, dir.path(), &mut report);

    let texts = synth.texts.lock().unwrap();
    let text_for = |file: &str| {
        texts
            .iter()
            .find(|(f, _)| f == file)
            .map(|(_, t)| t.clone())
            .unwrap()
    };

    assert_eq!(text_for("23.mp3"), "على العميل رقم ثلاثة وعشرون");
    assert_eq!(text_for("100.mp3"), "على العميل رقم مائة");
    assert_eq!(text_for("clinic1.mp3"), "التوجه إلى عيادة طب الأسرة");
    // Fixed messages go out verbatim, untemplated.
    assert_eq!(
        text_for("instant2.mp3"),
        "شكراً لصبركم سيتم استدعاؤكم قريباً"
    );
}

#[test]
fn a_failing_item_does_not_stop_its_stage_or_later_stages() {
    let dir = tempfile::tempdir().unwrap();
    let synth = StubSynth {
        fail_for: vec!["7.mp3", "clinic3.mp3"],
        ..StubSynth::default()
    };
    let transcoder = StubTranscoder::new(0);
    let mut report = RunReport::default();

    stages::generate_number_prompts(&synth, dir.path(), &mut report);
    stages::generate_clinic_prompts(&synth, dir.path(), &mut report);
    stages::generate_instant_prompts(&synth, dir.path(), &mut report);
    stages::generate_chime(&transcoder, &ToneSpec::default(), dir.path(), &mut report);

    assert_eq!(report.assets.len(), 216);
    assert_eq!(report.failed(), 2);
    assert_eq!(report.written(), 214);

    assert!(!dir.path().join("7.mp3").exists());
    assert!(!dir.path().join("clinic3.mp3").exists());
    // Neighbours and later stages are unaffected.
    assert!(dir.path().join("8.mp3").exists());
    assert!(dir.path().join("200.mp3").exists());
    assert!(dir.path().join("clinic4.mp3").exists());
    assert!(dir.path().join("instant5.mp3").exists());
    assert!(dir.path().join("ding.mp3").exists());
}

#[test]
fn chime_falls_back_to_silence_when_the_tone_export_fails() {
    let dir = tempfile::tempdir().unwrap();
    let transcoder = StubTranscoder::new(1);
    let mut report = RunReport::default();

    stages::generate_chime(&transcoder, &ToneSpec::default(), dir.path(), &mut report);

    assert!(dir.path().join("ding.mp3").exists());
    assert_eq!(report.fallbacks(), 1);
    assert_eq!(report.failed(), 0);
}

#[test]
fn chime_records_a_failure_when_the_fallback_also_fails() {
    let dir = tempfile::tempdir().unwrap();
    let transcoder = StubTranscoder::new(2);
    let mut report = RunReport::default();

    stages::generate_chime(&transcoder, &ToneSpec::default(), dir.path(), &mut report);

    assert!(!dir.path().join("ding.mp3").exists());
    assert_eq!(report.failed(), 1);
}
