//! Cartesian-product enumeration of attribute values
//!
//! Combinations are visited depth-first in odometer order: the last active
//! attribute varies fastest and values keep the order they were supplied in.

use shared::{AttributeSet, OutputFormat, Record};

use super::email::synthesize_email;

/// A resolved country together with its locale tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTarget {
    pub country: String,
    pub locale: String,
}

impl CountryTarget {
    pub fn new(country: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            locale: locale.into(),
        }
    }
}

/// Call `emit` once per full combination of the active attributes' values.
///
/// With no active attributes `emit` is called exactly once with an empty
/// slice. Attributes without values are stepped over.
pub fn for_each_combination<F>(active: &[String], attributes: &AttributeSet, emit: &mut F)
where
    F: FnMut(&[&str]),
{
    let mut current = Vec::with_capacity(active.len());
    visit(0, active, attributes, &mut current, emit);
}

fn visit<'a, F>(
    index: usize,
    active: &[String],
    attributes: &'a AttributeSet,
    current: &mut Vec<&'a str>,
    emit: &mut F,
) where
    F: FnMut(&[&str]),
{
    if index == active.len() {
        emit(current.as_slice());
        return;
    }

    let values = attributes.get(&active[index]).unwrap_or(&[]);
    if values.is_empty() {
        visit(index + 1, active, attributes, current, emit);
        return;
    }

    for value in values {
        current.push(value.as_str());
        visit(index + 1, active, attributes, current, emit);
        current.pop();
    }
}

/// Number of records one country produces for the given active attributes
pub fn combination_count(active: &[String], attributes: &AttributeSet) -> usize {
    active
        .iter()
        .map(|name| attributes.get(name).map_or(0, <[String]>::len).max(1))
        .product()
}

/// Emit every record for one country into `sink`, returning how many were emitted
pub fn generate_country_records<S>(
    active: &[String],
    attributes: &AttributeSet,
    target: &CountryTarget,
    format: OutputFormat,
    sink: &mut S,
) -> usize
where
    S: FnMut(Record),
{
    let second_column = if format.is_country_iso() {
        &target.country
    } else {
        &target.locale
    };

    let mut emitted = 0;
    for_each_combination(active, attributes, &mut |combination: &[&str]| {
        let mut cells = Vec::with_capacity(2 + combination.len());
        cells.push(synthesize_email(&target.locale, combination));
        cells.push(second_column.clone());
        cells.extend(combination.iter().map(|value| value.to_string()));
        sink(Record::new(cells));
        emitted += 1;
    });
    emitted
}
