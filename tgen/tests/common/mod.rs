//! Common test utilities for end-to-end runs

use std::path::Path;
use std::sync::Arc;

use shared::Registry;
use tgen::{App, RealBrandLookup, RealLocFileReader, RealRecordWriter};

pub type RealApp = App<RealBrandLookup, RealLocFileReader, RealRecordWriter>;

/// App wired with the real file services and no remote lookup
pub fn offline_app() -> RealApp {
    App::new(
        Arc::new(Registry::builtin()),
        RealBrandLookup::offline(),
        RealLocFileReader::new(),
        RealRecordWriter::new(),
    )
}

pub fn params(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Read a generated file back as rows of cells
pub fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let content = std::fs::read_to_string(path).expect("output file should exist");
    content
        .lines()
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}
