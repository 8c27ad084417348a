//! Remote brand → countries lookup over HTTP

use async_trait::async_trait;
use serde::Deserialize;

use shared::{stage_debug, Stage};

use crate::error::{TgenError, TgenResult};
use crate::traits::{BrandLookup, LookupCredentials};

#[derive(Debug, Deserialize)]
struct BrandCountryResponse {
    result: Option<String>,
}

/// Brand lookup backed by a key/value HTTP service.
///
/// Without credentials the lookup is disabled and every brand is reported as
/// unknown.
pub struct RealBrandLookup {
    client: reqwest::Client,
    credentials: Option<LookupCredentials>,
}

impl RealBrandLookup {
    pub fn new(credentials: Option<LookupCredentials>) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
        }
    }

    /// Lookup that never contacts a remote service
    pub fn offline() -> Self {
        Self::new(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }

    fn brand_url(base_url: &str, brand: &str) -> String {
        format!("{}/get/BRAND:{}", base_url.trim_end_matches('/'), brand)
    }
}

#[async_trait]
impl BrandLookup for RealBrandLookup {
    async fn lookup_countries(&self, brand: &str) -> TgenResult<Option<Vec<String>>> {
        let Some(credentials) = &self.credentials else {
            return Ok(None);
        };

        let url = Self::brand_url(&credentials.base_url, brand);
        stage_debug!(Stage::Resolve, "Looking up brand '{}' at {}", brand, url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", credentials.token))
            .send()
            .await
            .map_err(|e| TgenError::resolution(brand, e.to_string()))?;

        if !response.status().is_success() {
            return Err(TgenError::resolution(
                brand,
                format!("lookup service returned {}", response.status()),
            ));
        }

        let body: BrandCountryResponse = response
            .json()
            .await
            .map_err(|e| TgenError::resolution(brand, format!("failed to decode response: {e}")))?;

        let countries: Vec<String> = body
            .result
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect();

        if countries.is_empty() {
            Ok(None)
        } else {
            Ok(Some(countries))
        }
    }
}
