//! Fixed table of countries offered in the browser.

use crate::types::Country;

pub static COUNTRIES: [Country; 8] = [
    Country { name: "Japan", code: "JP", lat: 35.6762, lon: 139.6503, currency: "JPY", emoji: "🇯🇵" },
    Country { name: "South Korea", code: "KR", lat: 37.5665, lon: 126.9780, currency: "KRW", emoji: "🇰🇷" },
    Country { name: "Thailand", code: "TH", lat: 13.7563, lon: 100.5018, currency: "THB", emoji: "🇹🇭" },
    Country { name: "Singapore", code: "SG", lat: 1.3521, lon: 103.8198, currency: "SGD", emoji: "🇸🇬" },
    Country { name: "United States", code: "US", lat: 40.7128, lon: -74.0060, currency: "USD", emoji: "🇺🇸" },
    Country { name: "United Kingdom", code: "GB", lat: 51.5074, lon: -0.1278, currency: "GBP", emoji: "🇬🇧" },
    Country { name: "France", code: "FR", lat: 48.8566, lon: 2.3522, currency: "EUR", emoji: "🇫🇷" },
    Country { name: "Australia", code: "AU", lat: -33.8688, lon: 151.2093, currency: "AUD", emoji: "🇦🇺" },
];

/// Case-insensitive lookup by country code
pub fn find_country(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_country_ignores_case() {
        let jp = find_country("jp").unwrap();
        assert_eq!(jp.currency, "JPY");
        assert_eq!(jp.name, "Japan");
    }

    #[test]
    fn test_unknown_code() {
        assert!(find_country("XX").is_none());
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<&str> = COUNTRIES.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), COUNTRIES.len());
    }

    #[test]
    fn test_coordinates_in_range() {
        for c in &COUNTRIES {
            assert!((-90.0..=90.0).contains(&c.lat), "{} lat", c.code);
            assert!((-180.0..=180.0).contains(&c.lon), "{} lon", c.code);
        }
    }
}
