//! Core data model shared by the generation stages

use std::collections::HashSet;
use std::fmt;

use crate::errors::{SharedError, SharedResult};

/// Ordered mapping from attribute name to its candidate values.
///
/// Insertion order of the names is preserved and determines the output column
/// order. Re-inserting an existing name replaces its values in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeSet {
    entries: Vec<(String, Vec<String>)>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute, keeping the position of its first insertion
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = values,
            None => self.entries.push((name, values)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values.as_slice())
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        let index = self.entries.iter().position(|(existing, _)| existing == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Attribute names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a single `key=value1,value2` parameter.
    ///
    /// A parameter without `=` names an attribute with no values, and so does
    /// `key=` with nothing after the separator. An empty key is rejected.
    pub fn parse_param(param: &str) -> SharedResult<(String, Vec<String>)> {
        let (key, raw_values) = match param.split_once('=') {
            Some((key, values)) => (key.trim(), values),
            None => (param.trim(), ""),
        };

        if key.is_empty() {
            return Err(SharedError::InvalidParameter {
                parameter: param.to_string(),
            });
        }

        let values = if raw_values.is_empty() {
            Vec::new()
        } else {
            raw_values.split(',').map(str::to_string).collect()
        };

        Ok((key.to_string(), values))
    }
}

impl FromIterator<(String, Vec<String>)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for (name, values) in iter {
            set.insert(name, values);
        }
        set
    }
}

/// Selects what goes in the second output column
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Full locale tag, e.g. `de-DE`
    #[default]
    Locale,
    /// Two-letter country code, e.g. `DE`
    CountryIso,
}

impl OutputFormat {
    /// Interpret a `format` flag. Only `countryiso` (any case) selects the
    /// country-code layout; anything else falls back to locale tags.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(value) if value.trim().eq_ignore_ascii_case("countryiso") => OutputFormat::CountryIso,
            _ => OutputFormat::Locale,
        }
    }

    pub fn is_country_iso(&self) -> bool {
        matches!(self, OutputFormat::CountryIso)
    }

    /// Header label of the second column
    pub fn column_label(&self) -> &'static str {
        match self {
            OutputFormat::Locale => "locale",
            OutputFormat::CountryIso => "country_iso",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Locale => write!(f, "default"),
            OutputFormat::CountryIso => write!(f, "countryiso"),
        }
    }
}

/// Deduplicated, uppercased country codes in first-occurrence order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountryList(Vec<String>);

impl CountryList {
    /// Build a list from raw codes.
    ///
    /// Tokens are trimmed, empty tokens dropped, locale tags such as `de-DE`
    /// or `pt_BR` reduced to their region subtag, then uppercased and
    /// deduplicated.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut countries = Vec::new();

        for code in codes {
            let code = code.as_ref().trim();
            let region = code.rsplit(|c: char| c == '-' || c == '_').next().unwrap_or(code).trim();
            if region.is_empty() {
                continue;
            }
            let upper = region.to_uppercase();
            if seen.insert(upper.clone()) {
                countries.push(upper);
            }
        }

        CountryList(countries)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a CountryList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One output row: `[email, locale_or_country, attr1_value, ...]`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record(Vec<String>);

impl Record {
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_cells(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Record {
    fn from(cells: Vec<String>) -> Self {
        Self(cells)
    }
}

impl<'a> From<Vec<&'a str>> for Record {
    fn from(cells: Vec<&'a str>) -> Self {
        Self(cells.into_iter().map(str::to_string).collect())
    }
}

/// Header row followed by data rows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSet {
    header: Record,
    rows: Vec<Record>,
}

impl RecordSet {
    pub fn new(header: Record) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn header(&self) -> &Record {
        &self.header
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn push(&mut self, row: Record) {
        self.rows.push(row);
    }

    /// Number of data rows (header excluded)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop data rows that are cell-wise identical to an earlier row.
    ///
    /// Returns how many rows were removed. Idempotent.
    pub fn dedup(&mut self) -> usize {
        let before = self.rows.len();
        let mut seen = HashSet::with_capacity(before);
        self.rows.retain(|row| seen.insert(row.clone()));
        before - self.rows.len()
    }

    /// Header first, then every data row
    pub fn iter_all(&self) -> impl Iterator<Item = &Record> {
        std::iter::once(&self.header).chain(self.rows.iter())
    }
}
