use teams_notify::{
    card::{build_adaptive_card, build_legacy_card},
    cfg::{CardMode, Config},
    error::NotifyError,
    utils::get_reqwest_client,
    webhook,
};

use anyhow::Context;
use envconfig::Envconfig;

#[tokio::main]
async fn main() {
    // Tracing. Logs go to stderr so the status line and console dump own stdout.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

async fn run() -> Result<(), NotifyError> {
    // Read configuration.
    let cfg = Config::init_from_env()
        .map_err(|err| NotifyError::usage(format!("parse config: {err}")))?;
    cfg.validate()?;
    // Build the selected payload shape.
    let payload = match cfg.card_mode()? {
        CardMode::Text => build_legacy_card(&cfg)?,
        CardMode::Template => build_adaptive_card(&cfg)?,
    };
    // Send the prepared message.
    let client = get_reqwest_client().map_err(NotifyError::Failure)?;
    webhook::send(&client, &cfg.webhook, &payload)
        .await
        .context("Error sending message")
        .map_err(NotifyError::Failure)
}
