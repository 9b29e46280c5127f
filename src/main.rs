use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use bucket_drop::{
    app,
    cli::Cli,
    config::Config,
    resolver,
    storage::S3Store,
    utils::init_logger,
    AppError,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    init_logger();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;
    debug!(?config, "configuration loaded");

    let request = match resolver::resolve(&cli, &config.env) {
        Ok(request) => request,
        Err(err @ AppError::MissingOptions(_)) => {
            info!("{err}");
            Cli::command().print_help()?;
            return Ok(ExitCode::from(err.exit_code()));
        }
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::from(err.exit_code()));
        }
    };
    debug!(?request, "options resolved");

    let storage = resolver::resolve_storage(&cli, &config);
    let store = S3Store::new(
        request.access_key_id.clone(),
        request.secret_access_key.clone(),
        storage,
    );

    match app::run(&request, &store).await {
        Ok(outcome) if outcome.is_success() => {
            println!("{}", outcome.message());
            Ok(ExitCode::from(outcome.exit_code()))
        }
        Ok(outcome) => {
            eprintln!("{}", outcome.message());
            Ok(ExitCode::from(outcome.exit_code()))
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
