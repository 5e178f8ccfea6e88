//! Combined weather and exchange lookup for a selected country.

use std::sync::Arc;

use reqwest::Client;
use voyage_core::LookupConfig;

use crate::exchange::ExchangeProvider;
use crate::provider::WeatherProvider;
use crate::types::{Country, CountrySnapshot, LookupError, SnapshotSource};

pub const FALLBACK_TEMPERATURE: f64 = 25.0;
/// Also used when the weather provider omits a description
pub const FALLBACK_DESCRIPTION: &str = "Sunny";
pub const FALLBACK_EXCHANGE_RATE: f64 = 0.25;

impl CountrySnapshot {
    /// Placeholder shown when either provider fails
    pub fn fallback() -> Self {
        Self {
            temperature: FALLBACK_TEMPERATURE,
            description: FALLBACK_DESCRIPTION.to_string(),
            exchange_rate: FALLBACK_EXCHANGE_RATE,
            source: SnapshotSource::Fallback,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CountryLookup {
    weather: WeatherProvider,
    exchange: ExchangeProvider,
}

impl CountryLookup {
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let client = Arc::new(Client::builder().build()?);
        Ok(Self {
            weather: WeatherProvider::new(client.clone(), config)?,
            exchange: ExchangeProvider::new(client, config)?,
        })
    }

    pub fn base_currency(&self) -> &str {
        self.exchange.base_currency()
    }

    /// Run both lookups concurrently. Never fails: any provider error yields
    /// the fallback snapshot in full.
    pub async fn snapshot(&self, country: &Country) -> CountrySnapshot {
        let (weather, rate) = tokio::join!(
            self.weather.fetch(country.lat, country.lon),
            self.exchange.rate(country.currency),
        );

        match (weather, rate) {
            (Ok(reading), Ok(exchange_rate)) => CountrySnapshot {
                temperature: reading.temperature,
                description: reading.description,
                exchange_rate,
                source: SnapshotSource::Live,
            },
            (weather, rate) => {
                if let Err(e) = weather {
                    tracing::warn!("Weather lookup for {} failed: {}", country.code, e);
                }
                if let Err(e) = rate {
                    tracing::warn!("Exchange lookup for {} failed: {}", country.code, e);
                }
                tracing::info!("Using placeholder snapshot for {}", country.code);
                CountrySnapshot::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_values() {
        let snap = CountrySnapshot::fallback();
        assert_eq!(snap.rounded_temperature(), 25);
        assert_eq!(snap.description, "Sunny");
        assert_eq!(snap.exchange_rate, 0.25);
        assert!(snap.is_fallback());
        assert_eq!(snap.inverse_rate(), Some(4.0));
    }

    #[test]
    fn test_new_rejects_bad_url() {
        let config = LookupConfig {
            weather_api_url: "not a url".to_string(),
            ..LookupConfig::default()
        };
        assert!(matches!(
            CountryLookup::new(&config),
            Err(LookupError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_base_currency_normalized() {
        let config = LookupConfig {
            base_currency: " twd ".to_string(),
            ..LookupConfig::default()
        };
        let lookup = CountryLookup::new(&config).unwrap();
        assert_eq!(lookup.base_currency(), "TWD");
    }
}
