//! Main entry point for the tgen binary

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use shared::{logging, stage_debug, stage_info, stage_warn, Registry, Stage};
use tgen::{
    App, CliFlags, CredentialSource, RealBrandLookup, RealCredentialSource, RealLocFileReader,
    RealRecordWriter, RunSettings,
};

/// Generate target records for every locale and attribute combination
#[derive(Parser)]
#[command(name = "tgen")]
#[command(about = "Generates tab-delimited target records for a set of locales")]
#[command(long_about = "Generates tab-delimited target records for a set of locales.

Parameters are given as key=value1,value2 pairs. The 'loc' key holds the
target languages, a brand name or 'avg'; every other key is an attribute whose
values are combined with all other attributes.

Examples:
  tgen loc=de,fr segment=SKU1,SKU2
  tgen loc=avast segment=SKU1 --output records
  tgen loc=avg activationKey=xxx --en-all
  tgen --loc-file locales.tsv segment=SKU1 --format countryiso
  tgen --config run.yaml")]
pub struct Args {
    /// Attribute parameters in key=value1,value2 form (loc=... selects languages)
    pub params: Vec<String>,

    /// Add all English speaking countries (US, CA, AU, GB)
    #[arg(long)]
    pub en_all: bool,

    /// Tab-delimited file whose first column lists language codes
    #[arg(long)]
    pub loc_file: Option<PathBuf>,

    /// Output file or folder (defaults to tgen-<timestamp>.csv)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Second column format: default (locale) or countryiso
    #[arg(long)]
    pub format: Option<String>,

    /// YAML configuration file replacing the positional parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(&Stage::Resolve, "tgen");

    let flags = CliFlags {
        loc_file: args.loc_file.clone(),
        output: args.output.clone(),
        format: args.format.clone(),
        en_all: args.en_all,
    };

    let settings = match &args.config {
        Some(path) => {
            if !args.params.is_empty() {
                stage_warn!(
                    Stage::Resolve,
                    "Ignoring {} positional parameters, using config file {}",
                    args.params.len(),
                    path.display()
                );
            }
            RunSettings::from_config_file(path, flags).await
        }
        None => RunSettings::from_params(&args.params, flags),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            logging::log_error(&Stage::Resolve, "Invalid arguments", &e);
            return Err(e.into());
        }
    };

    let credentials = RealCredentialSource.lookup_credentials().await;
    let lookup = RealBrandLookup::new(credentials);
    if lookup.is_enabled() {
        stage_debug!(Stage::Resolve, "Remote brand lookup enabled");
    } else {
        stage_debug!(
            Stage::Resolve,
            "{} not set, remote brand lookup disabled",
            RealCredentialSource::URL_KEY
        );
    }

    let registry = Arc::new(Registry::builtin());
    stage_debug!(
        Stage::Resolve,
        "Registry holds {} locale mappings",
        registry.locale_count()
    );

    let app = App::new(
        registry,
        lookup,
        RealLocFileReader::new(),
        RealRecordWriter::new(),
    );

    match app.run(&settings).await {
        Ok(report) => {
            if !report.missing_locales.is_empty() {
                stage_warn!(
                    Stage::Output,
                    "Skipped countries without locale mapping: {}",
                    report.missing_locales.join(", ")
                );
            }
            stage_info!(
                Stage::Output,
                "{} records ({} format) written to {}",
                report.record_count,
                report.format,
                report.output_path.display()
            );
            logging::log_success(&Stage::Output, "Generation finished");
            Ok(())
        }
        Err(e) => {
            logging::log_error(&Stage::Output, "Generation failed", &e);
            Err(e.into())
        }
    }
}
