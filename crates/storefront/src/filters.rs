//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Format a whole-rupiah amount for display, e.g. `45000` -> `Rp 45.000`.
///
/// Usage in templates: `{{ product.price|rupiah }}`
#[askama::filter_fn]
pub fn rupiah(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_rupiah(&amount.to_string()))
}

/// Group a digit string into thousands with Indonesian separators.
fn format_rupiah(digits: &str) -> String {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        // Not a plain amount; show it untouched.
        return format!("Rp {digits}");
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("Rp {grouped}")
}
