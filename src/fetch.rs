use reqwest::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::MenuError;

pub fn build_client(config: &Config) -> anyhow::Result<Client> {
    let client = Client::builder()
        // The menu host is reached directly; ignore HTTP(S)_PROXY from the environment.
        .no_proxy()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()?;
    Ok(client)
}

pub async fn download_pdf(client: &Client, url: &str) -> Result<Vec<u8>, MenuError> {
    info!(url, "downloading menu pdf");
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    debug!(bytes = bytes.len(), "downloaded menu pdf");
    Ok(bytes.to_vec())
}

/// Text of the first page. The menu table never spans more than one page.
pub fn extract_first_page(bytes: &[u8]) -> Result<String, MenuError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)?;
    pages
        .into_iter()
        .next()
        .ok_or_else(|| MenuError::Extraction("pdf has no pages".to_string()))
}

pub async fn download_and_extract_text(client: &Client, url: &str) -> Result<String, MenuError> {
    let bytes = download_pdf(client, url).await?;
    tokio::task::spawn_blocking(move || extract_first_page(&bytes))
        .await
        .map_err(|err| MenuError::Extraction(format!("extraction task failed: {err}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_an_extraction_error() {
        let err = extract_first_page(b"definitely not a pdf").unwrap_err();
        assert_eq!(err.code(), "extraction-error");
    }

    #[test]
    fn client_builds_from_default_config() {
        assert!(build_client(&Config::default()).is_ok());
    }
}
