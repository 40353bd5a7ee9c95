//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the symbol rendered before an amount for a currency code.
///
/// Only the Ghanaian cedi carries a symbol; every other code renders the
/// bare amount.
///
/// Usage in templates: `{{ payment.currency|currency_symbol }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn currency_symbol(code: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(if code.to_string() == "GHC" { "\u{20b5}" } else { "" })
}
