//! Current-weather lookup against an OpenWeatherMap-compatible endpoint.

use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;
use url::Url;
use voyage_core::LookupConfig;

use crate::lookup::FALLBACK_DESCRIPTION;
use crate::types::{provider_root, LookupError, WeatherReading};

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: Url,
    api_key: String,
    units: String,
    lang: String,
}

impl WeatherProvider {
    pub fn new(client: Arc<Client>, config: &LookupConfig) -> Result<Self, LookupError> {
        Ok(Self {
            client,
            base_url: provider_root(&config.weather_api_url)?,
            api_key: config.weather_api_key.clone(),
            units: config.units.clone(),
            lang: config.lang.clone(),
        })
    }

    /// Fetch current conditions at the given coordinates.
    pub async fn fetch(&self, lat: f64, lon: f64) -> Result<WeatherReading, LookupError> {
        let url = self
            .base_url
            .join("weather")
            .map_err(|e| LookupError::InvalidUrl(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", self.units.clone()),
                ("lang", self.lang.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!("Weather provider returned status {}", response.status());
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        if !body.main.temp.is_finite() {
            return Err(LookupError::Parse("temperature is not a number".to_string()));
        }

        let description = body
            .weather
            .into_iter()
            .find_map(|c| c.description)
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());

        tracing::info!("Weather at {:.2},{:.2}: {} ({})", lat, lon, body.main.temp, description);
        Ok(WeatherReading {
            temperature: body.main.temp,
            description,
        })
    }
}
