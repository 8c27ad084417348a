//! Country resolution from the `loc` argument
//!
//! The first `loc` token is checked against the static brand registry, then
//! against the remote lookup, and otherwise the whole list is taken literally.

use std::sync::Arc;

use shared::{stage_debug, stage_info, CountryList, OutputFormat, Registry, Stage, AVG_BRAND, EN_COUNTRIES};

use crate::error::TgenResult;
use crate::traits::BrandLookup;

/// Run-level switches that influence resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationFlags {
    /// Raw `format` flag; only `countryiso` changes the layout
    pub format: Option<String>,
    /// Append every English-speaking country
    pub en_all: bool,
}

/// Outcome of country resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub countries: CountryList,
    pub format: OutputFormat,
}

pub struct CountryResolver<B: BrandLookup> {
    registry: Arc<Registry>,
    lookup: B,
}

impl<B: BrandLookup> CountryResolver<B> {
    pub fn new(registry: Arc<Registry>, lookup: B) -> Self {
        Self { registry, lookup }
    }

    /// Turn raw `loc` values and flags into the countries to generate for.
    ///
    /// A recognised brand replaces the whole list, so tokens after the brand
    /// are ignored. Only remote lookup failures produce an error.
    pub async fn resolve(&self, languages: &[String], flags: &GenerationFlags) -> TgenResult<Resolution> {
        let mut format = OutputFormat::from_flag(flags.format.as_deref());

        let first = languages.first().map(|token| token.trim()).unwrap_or("");
        if first.eq_ignore_ascii_case(AVG_BRAND) {
            format = OutputFormat::CountryIso;
        }

        let mut codes: Vec<String> = match self.registry.brand_countries(first) {
            Some(countries) => {
                stage_debug!(Stage::Resolve, "Brand '{}' resolved from registry", first);
                countries.to_vec()
            }
            None if !first.is_empty() && !looks_like_code(first) => {
                match self.lookup.lookup_countries(&first.to_lowercase()).await? {
                    Some(countries) => {
                        stage_debug!(Stage::Resolve, "Brand '{}' resolved remotely", first);
                        countries
                    }
                    None => languages.to_vec(),
                }
            }
            None => languages.to_vec(),
        };

        if flags.en_all {
            codes.extend(EN_COUNTRIES.iter().map(|c| c.to_string()));
        }

        let countries = CountryList::from_codes(&codes);
        stage_info!(
            Stage::Resolve,
            "Resolved {} countries (format: {})",
            countries.len(),
            format
        );

        Ok(Resolution { countries, format })
    }
}

/// True for tokens shaped like a country code (`de`) or locale tag (`de-DE`)
pub fn looks_like_code(token: &str) -> bool {
    let chars: Vec<char> = token.chars().collect();
    match chars.len() {
        2 => chars.iter().all(|c| c.is_ascii_alphabetic()),
        5 => {
            (chars[2] == '-' || chars[2] == '_')
                && chars[..2].iter().all(|c| c.is_ascii_alphabetic())
                && chars[3..].iter().all(|c| c.is_ascii_alphabetic())
        }
        _ => false,
    }
}
