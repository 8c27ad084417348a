//! Application runner wiring the services into one generation run
//!
//! Languages are resolved first (explicit `loc` or the loc file), then the
//! countries, then the fan-out generates the records which are finally written
//! to the destination file. Every fatal error surfaces before any worker is
//! started, except output failures which happen last.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use shared::{logging, stage_info, OutputFormat, Registry, Stage};

use crate::config::{output_path, RunSettings};
use crate::core::{CountryResolver, FanOut, GenerationReport, Resolution};
use crate::error::{TgenError, TgenResult};
use crate::traits::{BrandLookup, LocFileReader, RecordWriter};

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub output_path: PathBuf,
    pub record_count: usize,
    pub countries: Vec<String>,
    pub missing_locales: Vec<String>,
    pub format: OutputFormat,
}

/// Main application with injected services
pub struct App<B, L, W>
where
    B: BrandLookup,
    L: LocFileReader,
    W: RecordWriter,
{
    resolver: CountryResolver<B>,
    fan_out: FanOut,
    loc_reader: L,
    writer: W,
}

impl<B, L, W> App<B, L, W>
where
    B: BrandLookup,
    L: LocFileReader,
    W: RecordWriter,
{
    pub fn new(registry: Arc<Registry>, lookup: B, loc_reader: L, writer: W) -> Self {
        Self {
            resolver: CountryResolver::new(Arc::clone(&registry), lookup),
            fan_out: FanOut::new(registry),
            loc_reader,
            writer,
        }
    }

    /// Pick the language tokens: explicit `loc` values first, else the loc file
    pub async fn resolve_languages(&self, settings: &RunSettings) -> TgenResult<Vec<String>> {
        if !settings.languages.is_empty() {
            return Ok(settings.languages.clone());
        }

        if let Some(loc_file) = &settings.loc_file {
            let languages = self.loc_reader.read_languages(loc_file).await?;
            if languages.is_empty() {
                return Err(TgenError::input(format!(
                    "no languages found in loc file {}",
                    loc_file.display()
                )));
            }
            return Ok(languages);
        }

        Err(TgenError::input(
            "missing list of locales in required argument 'loc' or --loc-file",
        ))
    }

    /// Resolve countries and generate the record set without writing it
    pub async fn generate(&self, settings: &RunSettings) -> TgenResult<(Resolution, GenerationReport)> {
        let languages = self.resolve_languages(settings).await?;
        let resolution = self
            .resolver
            .resolve(&languages, &settings.generation_flags())
            .await?;

        if resolution.countries.is_empty() {
            return Err(TgenError::input("no countries resolved from the given languages"));
        }

        logging::log_progress(
            &Stage::Generate,
            "Generating",
            &format!(
                "{} countries x {} attributes",
                resolution.countries.len(),
                settings.attributes.len()
            ),
        );

        let report = self
            .fan_out
            .run(&resolution.countries, &settings.attributes, resolution.format)
            .await?;

        Ok((resolution, report))
    }

    /// Full run: generate and write the output file
    pub async fn run(&self, settings: &RunSettings) -> TgenResult<RunReport> {
        logging::log_startup(&Stage::Generate, "target record generation");

        let (resolution, report) = self.generate(settings).await?;
        let path = output_path(settings.output.as_deref(), Local::now());

        self.writer.write_records(&report.records, &path).await?;

        stage_info!(
            Stage::Output,
            "Generated {} records for {} countries into {}",
            report.records.len(),
            resolution.countries.len(),
            path.display()
        );

        Ok(RunReport {
            output_path: path,
            record_count: report.records.len(),
            countries: resolution.countries.into_vec(),
            missing_locales: report.missing_locales,
            format: resolution.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockBrandLookup, MockLocFileReader, MockRecordWriter};
    use shared::AttributeSet;

    fn offline_lookup() -> MockBrandLookup {
        let mut lookup = MockBrandLookup::new();
        lookup.expect_lookup_countries().returning(|_| Ok(None));
        lookup
    }

    fn settings(languages: &[&str]) -> RunSettings {
        let mut attributes = AttributeSet::new();
        attributes.insert("segment", vec!["SKU1".to_string(), "SKU2".to_string()]);
        RunSettings {
            languages: languages.iter().map(|s| s.to_string()).collect(),
            attributes,
            output: Some("unit-test-output".to_string()),
            ..RunSettings::default()
        }
    }

    #[tokio::test]
    async fn test_run_writes_generated_records() {
        let mut writer = MockRecordWriter::new();
        writer
            .expect_write_records()
            .withf(|records, path| {
                records.len() == 4 && path == std::path::Path::new("unit-test-output.csv")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut loc_reader = MockLocFileReader::new();
        loc_reader.expect_read_languages().never();

        let app = App::new(Arc::new(Registry::builtin()), offline_lookup(), loc_reader, writer);
        let report = app.run(&settings(&["de", "fr"])).await.unwrap();

        assert_eq!(report.record_count, 4);
        assert_eq!(report.countries, vec!["DE", "FR"]);
        assert!(report.missing_locales.is_empty());
        assert_eq!(report.format, OutputFormat::Locale);
    }

    #[tokio::test]
    async fn test_loc_file_is_used_when_loc_is_missing() {
        let mut loc_reader = MockLocFileReader::new();
        loc_reader
            .expect_read_languages()
            .times(1)
            .returning(|_| Ok(vec!["se".to_string(), "no".to_string()]));

        let app = App::new(
            Arc::new(Registry::builtin()),
            offline_lookup(),
            loc_reader,
            MockRecordWriter::new(),
        );

        let mut run_settings = settings(&[]);
        run_settings.loc_file = Some(PathBuf::from("locales.tsv"));

        let (resolution, report) = app.generate(&run_settings).await.unwrap();
        assert_eq!(resolution.countries.as_slice(), &["SE", "NO"]);
        assert_eq!(report.records.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_languages_is_input_error() {
        let mut writer = MockRecordWriter::new();
        writer.expect_write_records().never();

        let app = App::new(
            Arc::new(Registry::builtin()),
            offline_lookup(),
            MockLocFileReader::new(),
            writer,
        );

        let result = app.run(&settings(&[])).await;
        assert!(matches!(result, Err(TgenError::InputError { .. })));
    }

    #[tokio::test]
    async fn test_empty_loc_file_is_input_error() {
        let mut loc_reader = MockLocFileReader::new();
        loc_reader.expect_read_languages().returning(|_| Ok(vec![]));

        let app = App::new(
            Arc::new(Registry::builtin()),
            offline_lookup(),
            loc_reader,
            MockRecordWriter::new(),
        );

        let mut run_settings = settings(&[]);
        run_settings.loc_file = Some(PathBuf::from("empty.tsv"));
        let result = app.generate(&run_settings).await;
        assert!(matches!(result, Err(TgenError::InputError { .. })));
    }

    #[tokio::test]
    async fn test_resolution_error_stops_before_writing() {
        let mut lookup = MockBrandLookup::new();
        lookup
            .expect_lookup_countries()
            .returning(|brand| Err(TgenError::resolution(brand, "timeout")));
        let mut writer = MockRecordWriter::new();
        writer.expect_write_records().never();

        let app = App::new(
            Arc::new(Registry::builtin()),
            lookup,
            MockLocFileReader::new(),
            writer,
        );

        let result = app.run(&settings(&["somebrand"])).await;
        assert!(matches!(result, Err(TgenError::ResolutionError { .. })));
    }

    #[tokio::test]
    async fn test_output_error_is_propagated() {
        let mut writer = MockRecordWriter::new();
        writer
            .expect_write_records()
            .returning(|_, path| Err(TgenError::output(path.display().to_string(), "disk full")));

        let app = App::new(
            Arc::new(Registry::builtin()),
            offline_lookup(),
            MockLocFileReader::new(),
            writer,
        );

        let result = app.run(&settings(&["de"])).await;
        assert!(matches!(result, Err(TgenError::OutputError { .. })));
    }
}
