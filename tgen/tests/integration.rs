//! End-to-end generation runs with real services

mod common;

use std::collections::HashSet;

use common::{offline_app, params, read_rows};
use shared::OutputFormat;
use tempfile::tempdir;
use tgen::{CliFlags, RunSettings, TgenError};

fn flags_with_output(output: &std::path::Path) -> CliFlags {
    CliFlags {
        output: Some(output.to_string_lossy().into_owned()),
        ..CliFlags::default()
    }
}

#[tokio::test]
async fn test_brand_expands_to_its_countries() {
    let dir = tempdir().unwrap();
    let settings = RunSettings::from_params(
        &params(&["loc=avast", "segment=SKU1,SKU2"]),
        flags_with_output(&dir.path().join("avast")),
    )
    .unwrap();

    let report = offline_app().run(&settings).await.unwrap();
    assert_eq!(report.output_path, dir.path().join("avast.csv"));
    assert_eq!(report.format, OutputFormat::Locale);
    assert!(report.missing_locales.is_empty());

    let rows = read_rows(&report.output_path);
    assert_eq!(rows[0], vec!["email", "locale", "segment"]);
    assert_eq!(rows.len() - 1, report.record_count);
    assert_eq!(report.record_count, report.countries.len() * 2);

    assert!(rows.contains(&params(&["ttgen_de_de_SKU1@example.com", "de-DE", "SKU1"])));
    assert!(rows.contains(&params(&["ttgen_de_de_SKU2@example.com", "de-DE", "SKU2"])));
}

#[tokio::test]
async fn test_avg_uses_country_codes() {
    let dir = tempdir().unwrap();
    let settings = RunSettings::from_params(
        &params(&["loc=avg", "activationKey=xxx"]),
        flags_with_output(&dir.path().join("avg.csv")),
    )
    .unwrap();

    let report = offline_app().run(&settings).await.unwrap();
    assert_eq!(report.format, OutputFormat::CountryIso);

    let rows = read_rows(&report.output_path);
    assert_eq!(rows[0], vec!["email", "country_iso", "activationKey"]);
    assert!(rows.contains(&params(&["ttgen_de_de_xxx@example.com", "DE", "xxx"])));
    assert_eq!(rows.len() - 1, report.countries.len());
}

#[tokio::test]
async fn test_en_all_adds_english_countries_once() {
    let dir = tempdir().unwrap();
    let mut flags = flags_with_output(&dir.path().join("en"));
    flags.en_all = true;
    let settings = RunSettings::from_params(&params(&["loc=us,de", "tier=gold"]), flags).unwrap();

    let report = offline_app().run(&settings).await.unwrap();
    assert_eq!(report.countries, vec!["US", "DE", "CA", "AU", "GB"]);

    let rows = read_rows(&report.output_path);
    let locales: Vec<&str> = rows[1..].iter().map(|row| row[1].as_str()).collect();
    assert_eq!(locales, vec!["en-US", "de-DE", "en-CA", "en-AU", "en-GB"]);
}

#[tokio::test]
async fn test_unknown_country_is_skipped() {
    let dir = tempdir().unwrap();
    let settings = RunSettings::from_params(
        &params(&["loc=de,xx", "segment=SKU1"]),
        flags_with_output(&dir.path().join("partial")),
    )
    .unwrap();

    let report = offline_app().run(&settings).await.unwrap();
    assert_eq!(report.missing_locales, vec!["XX"]);
    assert_eq!(report.record_count, 1);

    let rows = read_rows(&report.output_path);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][1], "de-DE");
}

#[tokio::test]
async fn test_cartesian_product_without_duplicates() {
    let dir = tempdir().unwrap();
    let settings = RunSettings::from_params(
        &params(&["loc=fr", "size=S,M,L", "color=red,blue", "unused="]),
        flags_with_output(&dir.path().join("product")),
    )
    .unwrap();

    let report = offline_app().run(&settings).await.unwrap();
    assert_eq!(report.record_count, 6);

    let rows = read_rows(&report.output_path);
    assert_eq!(rows[0], vec!["email", "locale", "size", "color"]);
    assert_eq!(rows[1], params(&["ttgen_fr_fr_S_red@example.com", "fr-FR", "S", "red"]));

    let unique: HashSet<&Vec<String>> = rows.iter().collect();
    assert_eq!(unique.len(), rows.len());
}

#[tokio::test]
async fn test_values_differing_in_case_keep_distinct_emails() {
    let dir = tempdir().unwrap();
    let settings = RunSettings::from_params(
        &params(&["loc=de", "segment=SKU1,sku1"]),
        flags_with_output(&dir.path().join("case")),
    )
    .unwrap();

    let report = offline_app().run(&settings).await.unwrap();
    assert_eq!(report.record_count, 2);

    let rows = read_rows(&report.output_path);
    assert_eq!(rows[1][0], "ttgen_de_de_SKU1@example.com");
    assert_eq!(rows[2][0], "ttgen_de_de_sku1@example.com");
}

#[tokio::test]
async fn test_loc_file_and_output_directory() {
    let dir = tempdir().unwrap();
    let loc_file = dir.path().join("locales.tsv");
    std::fs::write(&loc_file, "it\tItalian\nes\tSpanish\n").unwrap();

    let flags = CliFlags {
        loc_file: Some(loc_file),
        output: Some(dir.path().to_string_lossy().into_owned()),
        format: Some("countryiso".to_string()),
        en_all: false,
    };
    let settings = RunSettings::from_params(&params(&["segment=SKU1"]), flags).unwrap();

    let report = offline_app().run(&settings).await.unwrap();
    assert_eq!(report.output_path.parent(), Some(dir.path()));
    let file_name = report.output_path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.starts_with("tgen-") && file_name.ends_with(".csv"));

    let rows = read_rows(&report.output_path);
    assert_eq!(rows[0], vec!["email", "country_iso", "segment"]);
    assert_eq!(rows[1], params(&["ttgen_it_it_SKU1@example.com", "IT", "SKU1"]));
    assert_eq!(rows[2], params(&["ttgen_es_es_SKU1@example.com", "ES", "SKU1"]));
}

#[tokio::test]
async fn test_config_file_run() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("run.yaml");
    let output = dir.path().join("from-config");
    std::fs::write(
        &config,
        format!(
            "languages: \"pl, nl\"\noutput: \"{}\"\nparams:\n  - segment=SKU9\n",
            output.display()
        ),
    )
    .unwrap();

    let settings = RunSettings::from_config_file(&config, CliFlags::default()).await.unwrap();
    let report = offline_app().run(&settings).await.unwrap();

    assert_eq!(report.output_path, dir.path().join("from-config.csv"));
    assert_eq!(report.countries, vec!["PL", "NL"]);
    assert_eq!(report.record_count, 2);
}

#[tokio::test]
async fn test_missing_languages_fails_without_output() {
    let dir = tempdir().unwrap();
    let settings = RunSettings::from_params(
        &params(&["segment=SKU1"]),
        flags_with_output(&dir.path().join("never")),
    )
    .unwrap();

    let result = offline_app().run(&settings).await;
    assert!(matches!(result, Err(TgenError::InputError { .. })));
    assert!(!dir.path().join("never.csv").exists());
}
