//! Number rendering for step snapshots and solution lines.
//!
//! Two modes: exact fractions (`p/q`) or fixed-precision decimals with
//! trailing zeros trimmed. Decimal rendering scales by powers of ten in
//! exact integer arithmetic, so output depends only on the exact value.

use num_traits::Zero;

use crate::integer::Integer;
use crate::rational::Rational;

/// How numbers are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PrecisionMode {
    /// Reduced fractions: `3`, `-2/5`.
    #[default]
    Fraction,
    /// Fixed-precision decimals with trailing zeros trimmed: `0.4`, `-1.5`.
    Decimal,
}

/// Renders rationals as fraction or decimal strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberFormatter {
    mode: PrecisionMode,
    decimal_places: u32,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new(PrecisionMode::Fraction, 6)
    }
}

impl NumberFormatter {
    /// Creates a formatter with the given mode and decimal places.
    #[must_use]
    pub fn new(mode: PrecisionMode, decimal_places: u32) -> Self {
        Self {
            mode,
            decimal_places,
        }
    }

    /// Returns the rendering mode.
    #[must_use]
    pub fn mode(&self) -> PrecisionMode {
        self.mode
    }

    /// Formats a rational according to the configured mode.
    #[must_use]
    pub fn format(&self, value: &Rational) -> String {
        match self.mode {
            PrecisionMode::Fraction => value.to_string(),
            PrecisionMode::Decimal => self.format_decimal(value),
        }
    }

    /// Fixed-precision decimal, rounded half away from zero, with trailing
    /// zeros (and a bare trailing dot) trimmed.
    fn format_decimal(&self, value: &Rational) -> String {
        if value.is_zero() {
            return "0".to_string();
        }

        let scale = Integer::new(10).pow(self.decimal_places);
        let scaled = value.numerator().abs() * scale;
        let denominator = value.denominator();
        let (mut quotient, remainder) = scaled.div_rem(&denominator);
        if &remainder + &remainder >= denominator {
            quotient = quotient + Integer::new(1);
        }

        if quotient.is_zero() {
            // Rounded away entirely, sign included.
            return "0".to_string();
        }

        let digits = quotient.to_string();
        let places = self.decimal_places as usize;
        let mut out = String::new();
        if value.is_negative() {
            out.push('-');
        }
        if places == 0 {
            out.push_str(&digits);
            return out;
        }
        if digits.len() > places {
            out.push_str(&digits[..digits.len() - places]);
        } else {
            out.push('0');
        }
        out.push('.');
        if digits.len() < places {
            out.extend(std::iter::repeat('0').take(places - digits.len()));
        }
        out.push_str(&digits[digits.len().saturating_sub(places)..]);

        let trimmed = out.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}
