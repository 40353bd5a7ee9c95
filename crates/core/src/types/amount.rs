//! Payment amount type backed by decimal arithmetic.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A payment amount, always carried at a scale of exactly two decimal
/// places.
///
/// Amounts originate as free text from the payment form. [`Amount::coerce`]
/// applies the portal's lenient input contract: whitespace is trimmed,
/// anything unparsable (including the empty string) becomes zero, and the
/// result is rescaled so that it serializes and displays as `"12.30"` rather
/// than `"12.3"`.
///
/// With the `serde-with-str` feature of `rust_decimal`, the wire form is the
/// formatted string, which matches the stored payment records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Scale every amount is normalized to.
    pub const SCALE: u32 = 2;

    /// An amount of zero, at the canonical scale.
    #[must_use]
    pub fn zero() -> Self {
        let mut d = Decimal::ZERO;
        d.rescale(Self::SCALE);
        Self(d)
    }

    /// Coerce free-form field text into an amount.
    ///
    /// Unparsable input degrades to zero; no error is surfaced.
    #[must_use]
    pub fn coerce(input: &str) -> Self {
        let mut d = Decimal::from_str(input.trim())
            .unwrap_or(Decimal::ZERO)
            .round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        d.rescale(Self::SCALE);
        Self(d)
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
