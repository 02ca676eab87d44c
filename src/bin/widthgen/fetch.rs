use reqwest::header::HeaderValue;
use reqwest::header::USER_AGENT;
use reqwest::Client;

use crate::Error;

pub async fn fetch_text(client: &Client, url: &str) -> Result<String, Error> {
    do_fetch_text(client, url)
        .await
        .inspect_err(|e| log::error!("Failed to fetch {}: {}", url, e))
}

async fn do_fetch_text(client: &Client, url: &str) -> Result<String, Error> {
    log::debug!("Fetching {}", url);
    let response = client
        .get(url)
        .header(USER_AGENT, &WIDTHGEN_UA)
        .send()
        .await?;
    let response = response.error_for_status()?;
    let text = response.text().await?;
    log::debug!("Finished fetching {}", url);
    Ok(text)
}

const WIDTHGEN_UA: HeaderValue =
    HeaderValue::from_static(concat!("Widthgen/", env!("CARGO_PKG_VERSION")));
