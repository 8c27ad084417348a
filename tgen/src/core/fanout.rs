//! Concurrent per-country generation with a single collecting channel
//!
//! One blocking task runs the combination engine per country and pushes every
//! record into a shared unbounded channel. After all tasks are joined the
//! channel is drained into a [`RecordSet`] and deduplicated.

use std::sync::Arc;

use shared::{
    stage_debug, stage_info, stage_warn, AttributeSet, CountryList, OutputFormat, Record, RecordSet,
    Registry, Stage,
};
use tokio::sync::mpsc;

use super::combinations::{combination_count, generate_country_records, CountryTarget};
use super::header::build_header;
use crate::error::TgenResult;

/// Result of one fan-out run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub records: RecordSet,
    /// Countries skipped because the registry has no locale for them
    pub missing_locales: Vec<String>,
    /// Rows removed by deduplication
    pub duplicates_removed: usize,
}

pub struct FanOut {
    registry: Arc<Registry>,
}

impl FanOut {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Generate the full record set for every country.
    ///
    /// Rows are ordered by country position and, within a country, in
    /// combination order, so repeated runs give identical output.
    pub async fn run(
        &self,
        countries: &CountryList,
        attributes: &AttributeSet,
        format: OutputFormat,
    ) -> TgenResult<GenerationReport> {
        let plan = Arc::new(build_header(attributes, format));
        let attributes = Arc::new(attributes.clone());

        stage_debug!(
            Stage::Generate,
            "Spawning {} workers, {} columns and up to {} records per country",
            countries.len(),
            plan.width(),
            combination_count(&plan.active_attributes, &attributes)
        );

        let (tx, mut rx) = mpsc::unbounded_channel::<(usize, Record)>();
        let mut handles = Vec::with_capacity(countries.len());

        for (position, country) in countries.iter().enumerate() {
            let tx = tx.clone();
            let plan = Arc::clone(&plan);
            let attributes = Arc::clone(&attributes);
            let registry = Arc::clone(&self.registry);
            let worker_country = country.clone();

            // `None` when the registry has no locale for the country
            let handle = tokio::task::spawn_blocking(move || -> Option<usize> {
                let locale = registry.locale_for(&worker_country).ok()?;
                let target = CountryTarget::new(worker_country.as_str(), locale);
                let mut sink = |record: Record| {
                    // the receiver outlives every worker
                    let _ = tx.send((position, record));
                };
                Some(generate_country_records(
                    &plan.active_attributes,
                    &attributes,
                    &target,
                    format,
                    &mut sink,
                ))
            });
            handles.push((country.clone(), handle));
        }

        // close the channel once the last worker drops its sender
        drop(tx);

        let mut missing_locales = Vec::new();
        for (country, handle) in handles {
            match handle.await? {
                Some(produced) => {
                    stage_debug!(Stage::Worker(country), "Generated {} records", produced);
                }
                None => {
                    stage_warn!(
                        Stage::Worker(country.clone()),
                        "Language mapping not found for country {}, skipping",
                        country
                    );
                    missing_locales.push(country);
                }
            }
        }

        let mut collected = Vec::new();
        while let Some(entry) = rx.recv().await {
            collected.push(entry);
        }
        collected.sort_by_key(|(position, _)| *position);

        let mut records = RecordSet::new(plan.header.clone());
        for (_, record) in collected {
            records.push(record);
        }
        let duplicates_removed = records.dedup();

        stage_info!(
            Stage::Generate,
            "Successfully generated {} records with {} languages ({} duplicates removed)",
            records.len(),
            countries.len(),
            duplicates_removed
        );

        Ok(GenerationReport {
            records,
            missing_locales,
            duplicates_removed,
        })
    }
}
