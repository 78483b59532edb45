use clap::Parser;
use essay_overlap::cli::Cli;
use essay_overlap::run;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("essay_overlap=warn")),
        )
        .init();

    let cli = Cli::parse();
    run(cli)
}
