use clap::Parser;
use prophecy::config::setup_logging;
use prophecy::web::AppState;
use tracing::error;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let cli = prophecy::cli::CliOptions::parse();

    if setup_logging(cli.debug).is_err() {
        return;
    }

    let state = AppState::new(cli.gemini_model, cli.public_url);

    if let Err(err) = prophecy::web::setup_server(&cli.listen_address, cli.port, state).await {
        error!("Application error: {}", err);
    }
}
