use anyhow::{bail, Result};
use lead_capture_core::LeadRecord;

/// HTTP client for the lead collection endpoint. The endpoint is taken
/// as-is from the host; the widget performs no validation of it.
#[derive(Clone)]
pub struct SubmitClient {
    api_url: String,
    client: reqwest::Client,
}

impl SubmitClient {
    pub fn new(api_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            api_url: api_url.to_string(),
            client,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// POST the record as a JSON body. The response body is never read; a
    /// non-success status becomes an error for the caller to log. Nothing
    /// here drives UI state.
    pub async fn post_lead(&self, lead: &LeadRecord) -> Result<()> {
        log::debug!("Posting lead to {}", self.api_url);

        let response = self.client.post(&self.api_url).json(lead).send().await?;

        let status = response.status();
        if !status.is_success() {
            bail!("lead submission failed with status: {status}");
        }

        Ok(())
    }
}
