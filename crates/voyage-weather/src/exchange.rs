//! Exchange rates relative to a fixed base currency (`<root>/latest/<base>`).

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;
use url::Url;
use voyage_core::LookupConfig;

use crate::types::{provider_root, LookupError};

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

#[derive(Debug, Clone)]
pub struct ExchangeProvider {
    client: Arc<Client>,
    base_url: Url,
    base_currency: String,
}

impl ExchangeProvider {
    pub fn new(client: Arc<Client>, config: &LookupConfig) -> Result<Self, LookupError> {
        Ok(Self {
            client,
            base_url: provider_root(&config.exchange_api_url)?,
            base_currency: config.base_currency.trim().to_uppercase(),
        })
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Units of `currency` per one unit of the base currency.
    pub async fn rate(&self, currency: &str) -> Result<f64, LookupError> {
        let url = self
            .base_url
            .join(&format!("latest/{}", self.base_currency))
            .map_err(|e| LookupError::InvalidUrl(e.to_string()))?;

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            tracing::debug!("Exchange provider returned status {}", response.status());
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body: LatestRatesResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        let rate = body
            .rates
            .get(currency)
            .copied()
            .filter(|r| r.is_finite() && *r > 0.0)
            .ok_or_else(|| LookupError::MissingRate(currency.to_string()))?;

        tracing::info!("1 {} = {} {}", self.base_currency, rate, currency);
        Ok(rate)
    }
}
