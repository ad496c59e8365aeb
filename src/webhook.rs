use anyhow::{bail, Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::cfg::CONSOLE_ENDPOINT;

/// Posts the payload to the webhook endpoint, or dumps it to stdout when the
/// endpoint is the `console` literal. Exactly one request per call, no retries.
pub async fn send(client: &Client, endpoint: &str, payload: &Value) -> Result<()> {
    let body = serde_json::to_string(payload).context("Serialize card payload")?;

    if endpoint == CONSOLE_ENDPOINT {
        println!("{}", render_console(payload)?);
        return Ok(());
    }

    debug!(endpoint, "posting card");
    let reply = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .context("Failed to send webhook request")?;

    let status = reply.status();
    if status.as_u16() >= 299 {
        bail!("Error on message: {status}");
    }
    println!("{status}");
    Ok(())
}

/// Pretty-printed dump used by the console sink.
pub fn render_console(payload: &Value) -> Result<String> {
    let pretty = serde_json::to_string_pretty(payload).context("Serialize card payload")?;
    Ok(format!("JSON message sent to the webhook:\n{pretty}"))
}
