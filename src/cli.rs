use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "queue-announcer",
    version,
    about = "Generate the Arabic audio prompts used by the queue display"
)]
pub struct Cli {
    #[arg(long, default_value = "audio", help = "Directory to write MP3 assets into")]
    pub out_dir: PathBuf,

    #[arg(long, value_name = "PATH", help = "Write the per-asset run report as JSON")]
    pub report: Option<PathBuf>,

    #[arg(long, help = "Request the slower speech rate")]
    pub slow: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
