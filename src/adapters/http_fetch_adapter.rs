//! Blocking HTTP retrieval of the weekly report pages.

use crate::domain::error::CotError;
use crate::domain::instrument::SourceGroup;
use crate::domain::settings::SourceSettings;
use crate::ports::fetch_port::FetchPort;

pub struct HttpFetchAdapter {
    client: reqwest::blocking::Client,
    settings: SourceSettings,
}

impl HttpFetchAdapter {
    pub fn new(settings: SourceSettings) -> Result<Self, CotError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| CotError::Io(std::io::Error::other(e)))?;
        Ok(Self { client, settings })
    }
}

impl FetchPort for HttpFetchAdapter {
    fn fetch(&self, group: SourceGroup) -> Result<String, CotError> {
        let url = self.settings.url_for(group);
        tracing::info!(source_group = %group, url, "fetching report");

        let fetch_err = |reason: String| CotError::Fetch {
            source_group: group,
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| fetch_err(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_err(format!("HTTP {status} from {url}")));
        }

        let body = response.text().map_err(|e| fetch_err(e.to_string()))?;
        tracing::debug!(source_group = %group, bytes = body.len(), "report fetched");
        Ok(body)
    }
}
