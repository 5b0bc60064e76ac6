//! Movie price codes
//!
//! The category a movie is rented under decides its pricing and points.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Movie categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PriceCode {
    /// Catalogue titles
    #[default]
    Regular,
    /// Recently released titles, charged per day
    NewRelease,
    /// Children's titles
    Childrens,
}

impl PriceCode {
    /// Every category, in display order
    pub const ALL: [Self; 3] = [Self::Regular, Self::NewRelease, Self::Childrens];

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::NewRelease => "new_release",
            Self::Childrens => "childrens",
        }
    }
}

impl std::fmt::Display for PriceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PriceCode {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "new_release" | "new-release" => Ok(Self::NewRelease),
            "childrens" => Ok(Self::Childrens),
            _ => Err(StoreError::InvalidCategory(s.to_string())),
        }
    }
}
