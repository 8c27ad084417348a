//! Run configuration from command-line parameters or a YAML file
//!
//! Positional parameters follow the `key=value1,value2` convention. The `loc`
//! key carries the target languages; every other key becomes an attribute.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Deserialize;

use shared::{stage_debug, AttributeSet, Stage};

use crate::core::GenerationFlags;
use crate::error::{TgenError, TgenResult};

/// Parameter key holding the target languages
pub const LOC_PARAM: &str = "loc";

/// Extension appended to output file names
pub const OUTPUT_EXTENSION: &str = ".csv";

/// Flags given on the command line next to the positional parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub loc_file: Option<PathBuf>,
    pub output: Option<String>,
    pub format: Option<String>,
    pub en_all: bool,
}

/// Everything a generation run needs, independent of where it came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSettings {
    /// Raw `loc` tokens (brand, `avg` or country/locale codes)
    pub languages: Vec<String>,
    pub attributes: AttributeSet,
    pub loc_file: Option<PathBuf>,
    pub output: Option<String>,
    pub format: Option<String>,
    pub en_all: bool,
}

/// On-disk configuration layout
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    loc_file: Option<String>,
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    en_all: bool,
    #[serde(default)]
    params: Vec<String>,
    #[serde(default)]
    languages: Option<String>,
}

impl RunSettings {
    /// Build settings from positional `key=value` parameters and CLI flags
    pub fn from_params(params: &[String], flags: CliFlags) -> TgenResult<Self> {
        let mut attributes = AttributeSet::new();
        for param in params {
            let (key, values) = AttributeSet::parse_param(param)
                .map_err(|e| TgenError::input(e.to_string()))?;
            attributes.insert(key, values);
        }

        let languages = clean_tokens(attributes.remove(LOC_PARAM).unwrap_or_default());

        Ok(Self {
            languages,
            attributes,
            loc_file: flags.loc_file,
            output: flags.output,
            format: flags.format,
            en_all: flags.en_all,
        })
    }

    /// Build settings from YAML text.
    ///
    /// Values present in the file win; CLI flags fill the gaps and `en_all`
    /// is enabled when either side enables it.
    pub fn from_config_str(yaml: &str, flags: CliFlags) -> TgenResult<Self> {
        let file: FileConfig = serde_yaml::from_str(yaml)
            .map_err(|e| TgenError::config(format!("invalid config file: {e}")))?;

        let mut attributes = AttributeSet::new();
        for param in &file.params {
            let (key, values) = param
                .split_once('=')
                .filter(|(key, values)| !key.trim().is_empty() && !values.contains('='))
                .ok_or_else(|| TgenError::input(format!("invalid parameter: {param}")))?;
            let values = if values.is_empty() {
                Vec::new()
            } else {
                values.split(',').map(str::to_string).collect()
            };
            attributes.insert(key.trim(), values);
        }

        let languages = file
            .languages
            .map(|raw| {
                clean_tokens(
                    raw.replace(' ', "")
                        .split(',')
                        .map(str::to_string)
                        .collect(),
                )
            })
            .unwrap_or_default();

        let settings = Self {
            languages,
            attributes,
            loc_file: non_empty(file.loc_file).map(PathBuf::from).or(flags.loc_file),
            output: non_empty(file.output).or(flags.output),
            format: non_empty(file.format).or(flags.format),
            en_all: file.en_all || flags.en_all,
        };

        if settings.languages.is_empty() && settings.loc_file.is_none() {
            return Err(TgenError::input(
                "missing required parameters in config file (loc_file or languages)",
            ));
        }

        Ok(settings)
    }

    /// Read and parse a YAML configuration file
    pub async fn from_config_file(path: &Path, flags: CliFlags) -> TgenResult<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            TgenError::config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        stage_debug!(Stage::Resolve, "Loaded configuration from {}", path.display());
        Self::from_config_str(&content, flags)
    }

    pub fn generation_flags(&self) -> GenerationFlags {
        GenerationFlags {
            format: self.format.clone(),
            en_all: self.en_all,
        }
    }
}

/// Destination path for the output file.
///
/// Without an explicit path a timestamped name is used. An explicit path
/// naming an existing directory receives the timestamped name inside it;
/// otherwise `.csv` is appended when missing.
pub fn output_path(explicit: Option<&str>, now: DateTime<Local>) -> PathBuf {
    let default_name = format!("tgen-{}{}", now.format("%Y%m%d%H%M%S"), OUTPUT_EXTENSION);

    match explicit.map(str::trim).filter(|p| !p.is_empty()) {
        None => PathBuf::from(default_name),
        Some(path) if Path::new(path).is_dir() => Path::new(path).join(default_name),
        Some(path) if path.ends_with(OUTPUT_EXTENSION) => PathBuf::from(path),
        Some(path) => PathBuf::from(format!("{path}{OUTPUT_EXTENSION}")),
    }
}

fn clean_tokens(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
