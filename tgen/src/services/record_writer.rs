//! Tab-delimited output writer
//!
//! Records are serialized in memory, written next to the destination and then
//! renamed into place so a failed run never leaves a half-written file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use shared::{stage_info, RecordSet, Stage};

use crate::error::{TgenError, TgenResult};
use crate::traits::RecordWriter;

pub struct RealRecordWriter;

impl RealRecordWriter {
    pub fn new() -> Self {
        Self
    }

    /// Serialize the header and every data row as TSV
    pub fn to_tsv(records: &RecordSet) -> TgenResult<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .flexible(false)
            .from_writer(Vec::new());

        for record in records.iter_all() {
            writer
                .write_record(record.cells())
                .map_err(|e| TgenError::output("<memory>", e.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| TgenError::output("<memory>", e.to_string()))
    }

    fn staging_path(path: &Path) -> PathBuf {
        let mut staging = path.as_os_str().to_owned();
        staging.push(".tmp");
        PathBuf::from(staging)
    }

    /// Remove a staging file left by a failed write and build the error
    pub(crate) async fn discard_staging(
        staging: &Path,
        destination: &str,
        error: std::io::Error,
    ) -> TgenError {
        let _ = fs::remove_file(staging).await;
        TgenError::output(destination, error.to_string())
    }
}

impl Default for RealRecordWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordWriter for RealRecordWriter {
    async fn write_records(&self, records: &RecordSet, path: &Path) -> TgenResult<()> {
        let destination = path.display().to_string();
        let bytes = Self::to_tsv(records)?;

        let staging = Self::staging_path(path);
        if let Err(e) = fs::write(&staging, &bytes).await {
            return Err(Self::discard_staging(&staging, &destination, e).await);
        }

        if let Err(e) = fs::rename(&staging, path).await {
            return Err(Self::discard_staging(&staging, &destination, e).await);
        }

        stage_info!(
            Stage::Output,
            "Wrote {} records to {}",
            records.len(),
            destination
        );
        Ok(())
    }
}
