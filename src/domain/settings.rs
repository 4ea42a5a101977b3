//! Validated runtime settings.
//!
//! Everything is read through [`ConfigPort`] and checked up-front, so the
//! fetch and render stages never see an invalid value.

use crate::domain::error::CotError;
use crate::domain::instrument::SourceGroup;
use crate::ports::config_port::ConfigPort;
use std::time::Duration;

pub const DEFAULT_USD_INDEX_URL: &str = "https://www.cftc.gov/dea/futures/deanybtlf.htm";
pub const DEFAULT_CME_URL: &str = "https://www.cftc.gov/dea/futures/deacmelf.htm";
pub const DEFAULT_FINANCIAL_URL: &str = "https://www.cftc.gov/dea/futures/financial_lf.htm";
pub const DEFAULT_TIMEOUT_SECS: i64 = 30;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_INSTRUMENT: &str = "USD INDEX";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    pub usd_index_url: String,
    pub cme_url: String,
    pub financial_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            usd_index_url: DEFAULT_USD_INDEX_URL.to_string(),
            cme_url: DEFAULT_CME_URL.to_string(),
            financial_url: DEFAULT_FINANCIAL_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS as u64),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SourceSettings {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, CotError> {
        let timeout_secs = config.get_int("sources", "timeout_secs", DEFAULT_TIMEOUT_SECS);
        if timeout_secs <= 0 {
            return Err(invalid("sources", "timeout_secs", "timeout_secs must be positive"));
        }

        Ok(Self {
            usd_index_url: url(config, "usd_index_url", DEFAULT_USD_INDEX_URL)?,
            cme_url: url(config, "cme_url", DEFAULT_CME_URL)?,
            financial_url: url(config, "financial_url", DEFAULT_FINANCIAL_URL)?,
            timeout: Duration::from_secs(timeout_secs as u64),
            user_agent: config
                .get_string("sources", "user_agent")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }

    pub fn url_for(&self, group: SourceGroup) -> &str {
        match group {
            SourceGroup::UsdIndex => &self.usd_index_url,
            SourceGroup::Financial => &self.financial_url,
            SourceGroup::Cme => &self.cme_url,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: true,
        }
    }
}

impl OutputSettings {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, CotError> {
        let format = match config.get_string("output", "format") {
            None => OutputFormat::default(),
            Some(raw) => OutputFormat::parse(&raw)
                .ok_or_else(|| invalid("output", "format", "format must be 'text' or 'json'"))?,
        };
        Ok(Self {
            format,
            pretty: config.get_bool("output", "pretty", true),
        })
    }
}

/// Instrument analyzed when none is given on the command line.
pub fn default_instrument(config: &dyn ConfigPort) -> String {
    config
        .get_string("analysis", "instrument")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_INSTRUMENT.to_string())
}

fn url(config: &dyn ConfigPort, key: &str, default: &str) -> Result<String, CotError> {
    match config.get_string("sources", key) {
        None => Ok(default.to_string()),
        Some(value) => {
            let value = value.trim();
            if value.starts_with("http://") || value.starts_with("https://") {
                Ok(value.to_string())
            } else {
                Err(invalid("sources", key, &format!("{key} must be an http(s) URL")))
            }
        }
    }
}

fn invalid(section: &str, key: &str, reason: &str) -> CotError {
    CotError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
