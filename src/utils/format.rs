//! Display formatting for job fields. Every helper is a pure function.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{FixedLocation, JobLocation, Salary};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// GB long date, e.g. `31 December 2025`. Rendered in UTC.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%-d %B %Y").to_string()
}

/// `£45,000 - £55,000`, or `58,000 EUR` when no symbol is known.
pub fn format_salary(salary: Option<&Salary>) -> Option<String> {
    let salary = salary?;
    let symbol = salary
        .currency_symbol
        .as_deref()
        .filter(|symbol| !symbol.is_empty())
        .unwrap_or("");

    let mut range = if salary.minimum.is_zero() {
        String::new()
    } else {
        format!("{}{}", symbol, group_thousands(salary.minimum))
    };

    if let Some(maximum) = salary.maximum.filter(|maximum| !maximum.is_zero()) {
        range.push_str(&format!(" - {}{}", symbol, group_thousands(maximum)));
    }

    let currency = if symbol.is_empty() && !salary.currency.is_empty() {
        format!(" {}", salary.currency)
    } else {
        String::new()
    };

    Some(format!("{}{}", range, currency))
}

/// All locations of a job joined with ` | `; entries with nothing to show
/// are dropped.
pub fn format_location_display(locations: &[JobLocation]) -> String {
    locations
        .iter()
        .map(location_display)
        .filter(|display| !display.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn location_display(location: &JobLocation) -> String {
    match location {
        JobLocation::Overseas(overseas) => overseas
            .location_display
            .as_deref()
            .filter(|display| !display.is_empty())
            .unwrap_or(&overseas.country_name)
            .to_string(),
        JobLocation::Fixed(fixed) => fixed_location_display(fixed),
    }
}

fn fixed_location_display(location: &FixedLocation) -> String {
    if let Some(formatted) = location.formatted_address.as_deref().filter(|a| !a.is_empty()) {
        return formatted.to_string();
    }

    [
        &location.sao_text,
        &location.pao_text,
        &location.street_description,
        &location.locality,
        &location.post_town,
        &location.postcode,
    ]
    .into_iter()
    .filter_map(|part| part.as_deref())
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

/// Human-readable size for an attachment byte count.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} bytes", bytes)
    } else if bytes < MIB {
        format!("{} kb", (bytes as f64 / KIB as f64).round())
    } else {
        format!("{:.1} mb", bytes as f64 / MIB as f64)
    }
}

/// `1234567.5` → `1,234,567.5`; at most three fraction digits are kept.
pub fn group_thousands(amount: Decimal) -> String {
    let text = amount.round_dp(3).normalize().abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if amount.is_sign_negative() && !amount.is_zero() {
        grouped.push('-');
    }
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
