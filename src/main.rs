use anyhow::Result;
use clap::Parser;
use sentence_parse::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sentence_parse=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
