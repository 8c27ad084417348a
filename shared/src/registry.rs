//! Static locale and brand lookup tables
//!
//! The registry is built once at startup and shared read-only (usually behind
//! an `Arc`) by every generation worker.

use std::collections::HashMap;

use crate::errors::{SharedError, SharedResult};

/// Brand whose output always uses the country-code layout
pub const AVG_BRAND: &str = "avg";

/// Countries appended when all English variants are requested
pub const EN_COUNTRIES: [&str; 4] = ["US", "CA", "AU", "GB"];

const BRAND_COUNTRIES: &[(&str, &[&str])] = &[
    (
        "avast",
        &[
            "US", "SA", "CN", "TW", "CZ", "BR", "DE", "DK", "ES", "FI", "FR", "GR", "HU", "ID", "IL",
            "IT", "JP", "KR", "MY", "NL", "NO", "PL", "PT", "RU", "SE", "SK", "TH", "TR", "UA",
        ],
    ),
    (
        "smb",
        &["CZ", "DK", "NL", "US", "FR", "DE", "IT", "JP", "NO", "PL", "BR", "RU", "ES", "SE"],
    ),
    (
        "norton",
        &["US", "FI", "PL", "BR", "IT", "NO", "DK", "NL", "FR", "DE", "ES", "SE"],
    ),
    (
        AVG_BRAND,
        &[
            "US", "SA", "CN", "TW", "CZ", "DK", "NL", "FI", "FR", "DE", "GR", "IL", "HU", "ID", "IT",
            "JP", "KR", "MY", "NO", "PL", "BR", "PT", "RU", "RS", "SK", "ES", "SE", "TH", "TR", "VN",
        ],
    ),
];

const COUNTRY_LOCALES: &[(&str, &str)] = &[
    ("AE", "ar-AE"),
    ("AR", "es-AR"),
    ("AT", "de-AT"),
    ("AU", "en-AU"),
    ("BE", "nl-BE"),
    ("BG", "bg-BG"),
    ("BR", "pt-BR"),
    ("CA", "en-CA"),
    ("CH", "de-CH"),
    ("CL", "es-CL"),
    ("CN", "zh-CN"),
    ("CO", "es-CO"),
    ("CZ", "cs-CZ"),
    ("DE", "de-DE"),
    ("DK", "da-DK"),
    ("EE", "et-EE"),
    ("EG", "ar-EG"),
    ("ES", "es-ES"),
    ("FI", "fi-FI"),
    ("FR", "fr-FR"),
    ("GB", "en-GB"),
    ("GR", "el-GR"),
    ("HK", "zh-HK"),
    ("HR", "hr-HR"),
    ("HU", "hu-HU"),
    ("ID", "id-ID"),
    ("IE", "en-IE"),
    ("IL", "he-IL"),
    ("IN", "en-IN"),
    ("IT", "it-IT"),
    ("JP", "ja-JP"),
    ("KR", "ko-KR"),
    ("LT", "lt-LT"),
    ("LV", "lv-LV"),
    ("MX", "es-MX"),
    ("MY", "ms-MY"),
    ("NL", "nl-NL"),
    ("NO", "nb-NO"),
    ("NZ", "en-NZ"),
    ("PH", "en-PH"),
    ("PL", "pl-PL"),
    ("PT", "pt-PT"),
    ("RO", "ro-RO"),
    ("RS", "sr-RS"),
    ("RU", "ru-RU"),
    ("SA", "ar-SA"),
    ("SE", "sv-SE"),
    ("SG", "en-SG"),
    ("SI", "sl-SI"),
    ("SK", "sk-SK"),
    ("TH", "th-TH"),
    ("TR", "tr-TR"),
    ("TW", "zh-TW"),
    ("UA", "uk-UA"),
    ("US", "en-US"),
    ("VN", "vi-VN"),
    ("ZA", "en-ZA"),
];

/// Read-only brand → countries and country → locale tables
#[derive(Debug, Clone, Default)]
pub struct Registry {
    brands: HashMap<String, Vec<String>>,
    locales: HashMap<String, String>,
}

impl Registry {
    /// Create a registry from explicit tables.
    ///
    /// Brand names are matched case-insensitively, country codes are stored
    /// uppercased.
    pub fn new(brands: HashMap<String, Vec<String>>, locales: HashMap<String, String>) -> Self {
        Self {
            brands: brands
                .into_iter()
                .map(|(brand, countries)| (brand.to_lowercase(), countries))
                .collect(),
            locales: locales
                .into_iter()
                .map(|(country, locale)| (country.to_uppercase(), locale))
                .collect(),
        }
    }

    /// Registry with the built-in brand and locale tables
    pub fn builtin() -> Self {
        let brands = BRAND_COUNTRIES
            .iter()
            .map(|(brand, countries)| {
                (
                    brand.to_string(),
                    countries.iter().map(|c| c.to_string()).collect(),
                )
            })
            .collect();
        let locales = COUNTRY_LOCALES
            .iter()
            .map(|(country, locale)| (country.to_string(), locale.to_string()))
            .collect();

        Self::new(brands, locales)
    }

    /// Countries registered for a brand, if the brand is known
    pub fn brand_countries(&self, brand: &str) -> Option<&[String]> {
        self.brands
            .get(&brand.trim().to_lowercase())
            .map(|countries| countries.as_slice())
    }

    /// Locale tag for a two-letter country code
    pub fn locale_for(&self, country: &str) -> SharedResult<&str> {
        self.locales
            .get(&country.to_uppercase())
            .map(String::as_str)
            .ok_or_else(|| SharedError::LocaleMappingMiss {
                country: country.to_string(),
            })
    }

    pub fn locale_count(&self) -> usize {
        self.locales.len()
    }
}
