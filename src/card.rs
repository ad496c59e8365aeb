use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde_json::{json, Value};

use crate::cfg::Config;
use crate::error::NotifyError;

pub const ADAPTIVE_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";

/// Legacy message card, fields passed through verbatim.
/// Reference: https://learn.microsoft.com/en-us/outlook/actionable-messages/message-card-reference
pub fn build_legacy_card(cfg: &Config) -> Result<Value, NotifyError> {
    if cfg.message.is_empty() {
        return Err(NotifyError::usage("Message is required"));
    }
    Ok(json!({
        "title": cfg.title,
        "text": cfg.message,
        "themeColor": cfg.color,
    }))
}

/// Adaptive card envelope wrapping a template file loaded as-is.
/// Reference: https://learn.microsoft.com/en-us/outlook/actionable-messages/adaptive-card
pub fn build_adaptive_card(cfg: &Config) -> Result<Value, NotifyError> {
    if cfg.card_path.is_empty() {
        return Err(NotifyError::usage("Card path is required"));
    }
    let template = load_template(Path::new(&cfg.card_path))?;
    Ok(json!({
        "type": "message",
        "attachments": [{
            "contentType": ADAPTIVE_CONTENT_TYPE,
            "contentUrl": Value::Null,
            "content": template,
        }],
    }))
}

/// The template is forwarded without any schema validation or parameter
/// substitution; any JSON object is accepted.
fn load_template(path: &Path) -> Result<Value> {
    let file = File::open(path)
        .with_context(|| format!("Unable to load card template {}", path.display()))?;
    let template: Value = serde_json::from_reader(BufReader::new(file))
        .context("Card template is not a valid json file")?;
    ensure!(template.is_object(), "Card template is not a json object");
    Ok(template)
}
