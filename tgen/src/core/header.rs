//! Output header derivation

use shared::{AttributeSet, OutputFormat, Record};

/// Column layout shared by every worker of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPlan {
    /// Attributes with at least one value, in insertion order
    pub active_attributes: Vec<String>,
    /// `["email", "locale" | "country_iso", active attributes...]`
    pub header: Record,
}

impl HeaderPlan {
    pub fn width(&self) -> usize {
        self.header.len()
    }
}

/// Build the header and the list of attributes that take part in combinations
pub fn build_header(attributes: &AttributeSet, format: OutputFormat) -> HeaderPlan {
    let active_attributes: Vec<String> = attributes
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(name, _)| name.to_string())
        .collect();

    let mut header = Vec::with_capacity(2 + active_attributes.len());
    header.push("email".to_string());
    header.push(format.column_label().to_string());
    header.extend(active_attributes.iter().cloned());

    HeaderPlan {
        active_attributes,
        header: Record::new(header),
    }
}
