pub mod audio;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod numerals;
pub mod report;
pub mod stages;
pub mod tts;

use anyhow::Context;
use std::fs;

use audio::transcode::FfmpegTranscoder;
use cli::Cli;
use config::GeneratorConfig;
use report::RunReport;
use tts::google::GoogleTranslateTts;
use tts::Synthesizer;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    setup_tracing(cli.verbose);

    let config = GeneratorConfig {
        slow: cli.slow,
        ..GeneratorConfig::default()
    };

    // Probe the one hard external dependency before touching the output dir.
    let transcoder = FfmpegTranscoder::detect().context(
        "ffmpeg is required to encode MP3 output; install it with \
         `apt-get install ffmpeg` or `brew install ffmpeg`",
    )?;

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create output directory {}", cli.out_dir.display()))?;

    let backend = GoogleTranslateTts::new(&config.language, &config.tld, config.slow)
        .context("initialize speech backend")?;
    let synth = Synthesizer::new(Box::new(backend), Box::new(transcoder.clone()));

    let mut report = RunReport::default();
    stages::generate_number_prompts(&synth, &cli.out_dir, &mut report);
    stages::generate_clinic_prompts(&synth, &cli.out_dir, &mut report);
    stages::generate_instant_prompts(&synth, &cli.out_dir, &mut report);
    stages::generate_chime(&transcoder, &config.tone, &cli.out_dir, &mut report);

    tracing::info!(
        written = report.written(),
        fallbacks = report.fallbacks(),
        failed = report.failed(),
        "audio generation finished"
    );

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&report).context("serialize run report")?;
        fs::write(path, json).with_context(|| format!("write report to {}", path.display()))?;
    }

    Ok(())
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
