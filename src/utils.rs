use std::time::Duration;

use anyhow::Result;
use reqwest::Client;

pub fn get_reqwest_client() -> Result<Client> {
    Ok(
        reqwest::ClientBuilder::new()
            .connect_timeout(Duration::from_secs(15))
            .timeout(Duration::from_secs(15))
            .use_rustls_tls()
            .build()?
        )
}
