use serde::{Deserialize, Serialize};
use url::Url;

/// Static reference row used to drive the external lookups
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Country {
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code
    pub code: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// ISO 4217 currency code
    pub currency: &'static str,
    pub emoji: &'static str,
}

/// Current conditions as reported by the weather provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: f64,
    pub description: String,
}

/// Where a snapshot's numbers came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotSource {
    Live,
    /// Placeholder values substituted after a provider failure
    Fallback,
}

/// Per-selection display data; overwritten on every lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySnapshot {
    pub temperature: f64,
    pub description: String,
    /// Units of the country's currency per one unit of the base currency
    pub exchange_rate: f64,
    pub source: SnapshotSource,
}

impl CountrySnapshot {
    pub fn rounded_temperature(&self) -> i64 {
        self.temperature.round() as i64
    }

    /// Base-currency units per one unit of the country's currency
    pub fn inverse_rate(&self) -> Option<f64> {
        (self.exchange_rate > 0.0).then(|| 1.0 / self.exchange_rate)
    }

    pub fn is_fallback(&self) -> bool {
        self.source == SnapshotSource::Fallback
    }
}

/// Provider errors
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Provider returned status {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("No rate for currency {0}")]
    MissingRate(String),
    #[error("Invalid provider URL: {0}")]
    InvalidUrl(String),
}

/// Parse a provider root and make sure relative joins keep its path.
pub(crate) fn provider_root(raw: &str) -> Result<Url, LookupError> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized).map_err(|e| LookupError::InvalidUrl(format!("{raw}: {e}")))
}
