//! Service trait definitions for dependency injection
//!
//! Every I/O edge of a generation run sits behind one of these traits so the
//! runner can be exercised with mockall mocks.

use std::path::Path;

use async_trait::async_trait;
use shared::RecordSet;

use crate::error::TgenResult;

/// Connection details for the remote brand lookup service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCredentials {
    pub base_url: String,
    pub token: String,
}

/// Brand → country list lookup that is not covered by the static registry
#[mockall::automock]
#[async_trait]
pub trait BrandLookup: Send + Sync {
    /// Resolve a brand to its country codes.
    ///
    /// `Ok(None)` means the brand is unknown and the caller should fall back
    /// to a literal interpretation of the input.
    async fn lookup_countries(&self, brand: &str) -> TgenResult<Option<Vec<String>>>;
}

/// Reader for the optional tab-delimited locale file
#[mockall::automock]
#[async_trait]
pub trait LocFileReader: Send + Sync {
    /// Read candidate language codes from the first cell of each row
    async fn read_languages(&self, path: &Path) -> TgenResult<Vec<String>>;
}

/// Destination for the final record set
#[mockall::automock]
#[async_trait]
pub trait RecordWriter: Send + Sync {
    /// Write the header and every data record to `path`
    async fn write_records(&self, records: &RecordSet, path: &Path) -> TgenResult<()>;
}

/// Source of lookup service credentials
#[mockall::automock]
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Credentials for the remote brand lookup, if one is configured
    async fn lookup_credentials(&self) -> Option<LookupCredentials>;
}
