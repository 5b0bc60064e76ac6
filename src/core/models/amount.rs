//! Monetary amounts
//!
//! Charges are either whole (`2`, `12`) or fractional (`3.5`, `5.0`). Whole
//! values stay whole under addition and scaling; once a fractional value is
//! involved the result is fractional, even when it happens to be integral.
//! That distinction is visible in statements: `5.0` is not printed as `5`.
//!
//! Arithmetic is checked: whole overflow and non-finite fractional results
//! come back as `None`.

use serde::{Deserialize, Serialize};

/// A charge or a total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// Integral amount, printed without a decimal point
    Whole(i64),
    /// Fractional amount, always printed with a decimal point
    Fractional(f64),
}

impl Amount {
    /// Whole zero, the starting point of every total
    pub const ZERO: Self = Self::Whole(0);

    /// Numeric value as a float
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Whole(n) => n as f64,
            Self::Fractional(v) => v,
        }
    }

    /// Whether the amount is fractional
    #[must_use]
    pub const fn is_fractional(self) -> bool {
        matches!(self, Self::Fractional(_))
    }

    /// Whether the amount is a finite number
    #[must_use]
    pub const fn is_finite(self) -> bool {
        match self {
            Self::Whole(_) => true,
            Self::Fractional(v) => v.is_finite(),
        }
    }

    /// Add two amounts, `None` on overflow
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self, rhs) {
            (Self::Whole(a), Self::Whole(b)) => a.checked_add(b).map(Self::Whole),
            (a, b) => finite(a.as_f64() + b.as_f64()),
        }
    }

    /// Scale by a number of days, `None` on overflow
    #[must_use]
    pub fn checked_mul_days(self, days: u32) -> Option<Self> {
        match self {
            Self::Whole(n) => n.checked_mul(i64::from(days)).map(Self::Whole),
            Self::Fractional(v) => finite(v * f64::from(days)),
        }
    }

    /// Whether the amount is below zero
    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Whole(n) => n < 0,
            Self::Fractional(v) => v < 0.0,
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Amount {
    fn from(n: i64) -> Self {
        Self::Whole(n)
    }
}

impl From<f64> for Amount {
    fn from(v: f64) -> Self {
        Self::Fractional(v)
    }
}

fn finite(v: f64) -> Option<Amount> {
    v.is_finite().then_some(Amount::Fractional(v))
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Whole(n) => write!(f, "{n}"),
            // Integral floats keep their ".0"; large or fractional ones use
            // the shortest round-trip form.
            Self::Fractional(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 => {
                write!(f, "{v:.1}")
            },
            Self::Fractional(v) => write!(f, "{v}"),
        }
    }
}
