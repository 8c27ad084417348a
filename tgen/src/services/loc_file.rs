//! Tab-delimited locale file reader

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use shared::{stage_debug, Stage};

use crate::error::{TgenError, TgenResult};
use crate::traits::LocFileReader;

/// Reads candidate language codes from the first column of a TSV file
pub struct RealLocFileReader;

impl RealLocFileReader {
    pub fn new() -> Self {
        Self
    }

    /// Extract two-character codes from the first cell of every row
    pub fn parse_languages(content: &[u8]) -> TgenResult<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(content);

        let mut languages = Vec::new();
        for result in reader.records() {
            let record = result
                .map_err(|e| TgenError::input(format!("error reading loc file: {e}")))?;
            if let Some(code) = record.get(0) {
                if code.chars().count() == 2 {
                    languages.push(code.to_string());
                }
            }
        }

        Ok(languages)
    }
}

impl Default for RealLocFileReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocFileReader for RealLocFileReader {
    async fn read_languages(&self, path: &Path) -> TgenResult<Vec<String>> {
        let content = fs::read(path).await.map_err(|e| {
            TgenError::input(format!("error reading loc file {}: {e}", path.display()))
        })?;

        let languages = Self::parse_languages(&content)?;
        stage_debug!(
            Stage::Resolve,
            "Read {} language codes from {}",
            languages.len(),
            path.display()
        );
        Ok(languages)
    }
}
