//! Tariffs: pricing and points parameters per category
//!
//! A [`Tariff`] describes how one category is charged:
//!
//! ```text
//! charge = base + daily * max(0, days - included_days)
//! points = 1 + (1 if days > bonus_after_days)
//! ```
//!
//! A [`TariffTable`] maps every [`PriceCode`] to its tariff. The default table
//! is the store's standard price list; tables read from a tariff file may leave
//! categories out.

use serde::{Deserialize, Serialize};

use super::{Amount, PriceCode};
use crate::error::{Result, StoreError};

/// Pricing and points rule for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tariff {
    /// Flat charge covering the first `included_days`
    pub base: Amount,

    /// Charge per day past `included_days`
    pub daily: Amount,

    /// Days covered by the base charge
    #[serde(default)]
    pub included_days: u32,

    /// An extra point is earned when the rental is longer than this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_after_days: Option<u32>,
}

impl Tariff {
    /// Charge for a rental of `days`
    ///
    /// # Errors
    ///
    /// [`StoreError::AmountOverflow`] if the charge does not fit an amount.
    pub fn charge(&self, days: u32) -> Result<Amount> {
        let extra_days = days.saturating_sub(self.included_days);
        if extra_days == 0 {
            return Ok(self.base);
        }

        self.daily
            .checked_mul_days(extra_days)
            .and_then(|extra| self.base.checked_add(extra))
            .ok_or(StoreError::AmountOverflow)
    }

    /// Frequent renter points for a rental of `days`
    #[must_use]
    pub const fn points(&self, days: u32) -> u32 {
        match self.bonus_after_days {
            Some(threshold) if days > threshold => 2,
            _ => 1,
        }
    }
}

/// Tariffs for every category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TariffTable {
    /// Regular titles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular: Option<Tariff>,

    /// New releases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_release: Option<Tariff>,

    /// Children's titles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub childrens: Option<Tariff>,
}

impl TariffTable {
    /// Standard price list
    pub const STANDARD: Self = Self {
        regular: Some(Tariff {
            base: Amount::Whole(2),
            daily: Amount::Fractional(1.5),
            included_days: 2,
            bonus_after_days: None,
        }),
        new_release: Some(Tariff {
            base: Amount::Whole(0),
            daily: Amount::Whole(3),
            included_days: 0,
            bonus_after_days: Some(1),
        }),
        childrens: Some(Tariff {
            base: Amount::Fractional(1.5),
            daily: Amount::Fractional(1.5),
            included_days: 3,
            bonus_after_days: None,
        }),
    };

    /// Tariff for a category, if the table has one
    #[must_use]
    pub const fn get(&self, code: PriceCode) -> Option<&Tariff> {
        match code {
            PriceCode::Regular => self.regular.as_ref(),
            PriceCode::NewRelease => self.new_release.as_ref(),
            PriceCode::Childrens => self.childrens.as_ref(),
        }
    }

    /// Replace the tariff for a category
    pub const fn set(&mut self, code: PriceCode, tariff: Tariff) {
        match code {
            PriceCode::Regular => self.regular = Some(tariff),
            PriceCode::NewRelease => self.new_release = Some(tariff),
            PriceCode::Childrens => self.childrens = Some(tariff),
        }
    }

    /// Categories this table prices, in display order
    pub fn entries(&self) -> impl Iterator<Item = (PriceCode, &Tariff)> {
        PriceCode::ALL.into_iter().filter_map(|code| self.get(code).map(|t| (code, t)))
    }
}

impl Default for TariffTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
