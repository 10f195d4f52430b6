use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = queue_announcer::cli::Cli::parse();
    queue_announcer::run(cli)
}
