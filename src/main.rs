use std::io;
use std::process::ExitCode;

use movie_recommender::{
    cli::Shell,
    services::{loader, Catalog, Recommender},
    telemetry, Config,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(config.logging_level)?;

    tracing::debug!(?config, "Configuration loaded");

    let dataset = loader::load(&config.data_source)?;
    let recommender = Recommender::new(Catalog::build(dataset));

    let stdin = io::stdin();
    let mut shell = Shell::new(recommender, stdin.lock(), io::stdout(), config.top_n);
    shell.run()?;

    Ok(())
}
