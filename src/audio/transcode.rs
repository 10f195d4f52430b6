use anyhow::{bail, Context};
use std::path::Path;
use std::process::{Command, Stdio};

/// Re-encodes an audio file into the final MP3 container.
pub trait Transcode: Send + Sync {
    fn to_mp3(&self, input: &Path, output: &Path) -> anyhow::Result<()>;
}

/// Transcoder backed by the ffmpeg binary.
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    program: String,
}

impl FfmpegTranscoder {
    /// Probe for a runnable ffmpeg on PATH. This is the generator's only
    /// hard external dependency, so a miss is fatal at startup.
    pub fn detect() -> anyhow::Result<Self> {
        Self::with_program("ffmpeg")
    }

    pub fn with_program(program: &str) -> anyhow::Result<Self> {
        let status = Command::new(program)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("run `{program} -version`"))?;

        if !status.success() {
            bail!("`{program} -version` exited with status {status}");
        }

        Ok(Self {
            program: program.to_string(),
        })
    }
}

impl Transcode for FfmpegTranscoder {
    fn to_mp3(&self, input: &Path, output: &Path) -> anyhow::Result<()> {
        let result = Command::new(&self.program)
            .args(["-y", "-nostdin", "-loglevel", "error", "-i"])
            .arg(input)
            .args(["-codec:a", "libmp3lame", "-qscale:a", "4"])
            .arg(output)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("transcode {} with {}", input.display(), self.program))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            bail!(
                "{} exited with status {}: {}",
                self.program,
                result.status,
                stderr.trim()
            );
        }

        Ok(())
    }
}
