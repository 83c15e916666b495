//! Typed identifier for cafe shop rows.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Database-assigned identifier of a [`CafeShop`](crate::cafe_shop::CafeShop).
///
/// Values are handed out by the storage layer and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CafeShopId(i64);

impl CafeShopId {
    /// Wrap a raw database key.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// Access the raw database key.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CafeShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CafeShopId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
