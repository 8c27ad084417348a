//! Synthetic email addresses derived from a locale and attribute values

/// Local-part prefix of every generated address
pub const EMAIL_PREFIX: &str = "ttgen";

/// Reserved domain used for every generated address
pub const EMAIL_DOMAIN: &str = "example.com";

/// Build the email for one combination.
///
/// Format: `ttgen_<locale>[_<values>]@example.com` where the locale has `-`
/// replaced by `_` and lowercased, and the values are joined with `_`.
/// Values keep their case so distinct combinations never share an address.
/// Whitespace inside the values is flattened so the address stays a single
/// cell.
pub fn synthesize_email<S: AsRef<str>>(locale: &str, values: &[S]) -> String {
    let normalized_locale = locale.replace('-', "_").to_lowercase();

    let joined = values
        .iter()
        .map(|value| value.as_ref())
        .collect::<Vec<_>>()
        .join("_");
    let sanitized = sanitize_values(&joined);

    if sanitized.is_empty() {
        format!("{EMAIL_PREFIX}_{normalized_locale}@{EMAIL_DOMAIN}")
    } else {
        format!("{EMAIL_PREFIX}_{normalized_locale}_{sanitized}@{EMAIL_DOMAIN}")
    }
}

fn sanitize_values(joined: &str) -> String {
    let mut out = String::with_capacity(joined.len());
    for ch in joined.chars() {
        match ch {
            '\r' => {}
            '\n' => out.push_str("__"),
            c if c.is_whitespace() => out.push('_'),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}
