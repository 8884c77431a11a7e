use anyhow::Context;
use clap::Parser;
use purrfect::cli::Cli;
use purrfect::logging::init_logging;
use purrfect::ui;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;

    match init_logging(&config.logging) {
        Ok(path) => tracing::info!(log = %path.display(), "Purrfect Cat World starting"),
        Err(err) => eprintln!("Warning: logging disabled: {err}"),
    }

    ui::runtime::run(config).context("Session failed")?;
    tracing::info!("Purrfect Cat World exited");
    Ok(())
}
