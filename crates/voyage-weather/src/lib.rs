//! Country weather and exchange-rate lookup.

pub mod countries;
pub mod exchange;
pub mod lookup;
pub mod provider;
pub mod types;

pub use countries::{find_country, COUNTRIES};
pub use exchange::ExchangeProvider;
pub use lookup::{CountryLookup, FALLBACK_DESCRIPTION, FALLBACK_EXCHANGE_RATE, FALLBACK_TEMPERATURE};
pub use provider::WeatherProvider;
pub use types::{Country, CountrySnapshot, LookupError, SnapshotSource, WeatherReading};
