//! Country lookup backend: runs off the event loop, results sent via mpsc.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use voyage_weather::{Country, CountryLookup, CountrySnapshot};

/// Messages sent from lookup tasks back to the event loop
#[derive(Debug)]
pub enum CountryServiceMessage {
    /// Snapshot for `code`; the lookup itself never fails
    LookupDone {
        code: &'static str,
        snapshot: CountrySnapshot,
    },
}

/// Spawn a lookup for `country` on the current runtime.
/// Sends `LookupDone` on the channel when complete.
pub fn request_lookup(
    tx: &Sender<CountryServiceMessage>,
    lookup: Arc<CountryLookup>,
    country: &'static Country,
) {
    let tx = tx.clone();
    tracing::debug!("Looking up {}", country.code);

    tokio::spawn(async move {
        let snapshot = lookup.snapshot(country).await;
        if snapshot.is_fallback() {
            tracing::info!("{} snapshot is a placeholder", country.code);
        }
        // The receiver is gone once the UI has exited
        let _ = tx.send(CountryServiceMessage::LookupDone {
            code: country.code,
            snapshot,
        });
    });
}
