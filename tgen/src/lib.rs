//! Target record generator
//!
//! Expands a list of languages (or a brand name) and a set of attribute
//! parameters into a tab-delimited file holding one record per locale and
//! attribute combination.
//!
//! Architecture:
//! - `core`: country resolution, header layout, combinations and the
//!   per-country worker fan-out
//! - `services`: real implementations of the I/O traits (HTTP lookup, files,
//!   environment)
//! - `traits`: the service seams used for dependency injection and mocking
//! - `app`: wires everything into a single run

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;

pub use app::{App, RunReport};
pub use config::{output_path, CliFlags, RunSettings};
pub use crate::core::{
    build_header, synthesize_email, CountryResolver, CountryTarget, FanOut, GenerationFlags,
    GenerationReport, HeaderPlan, Resolution,
};
pub use error::{TgenError, TgenResult};
pub use services::{RealBrandLookup, RealCredentialSource, RealLocFileReader, RealRecordWriter};
pub use traits::*;
