//! Cafe shop — the single record managed by the service.
//!
//! A row carries an owner username, the cafe's display name, a map link,
//! free-text opening hours and three amenity [`Rating`]s. Every field except
//! the id can be changed independently; there are no cross-field rules.

pub mod field;
pub mod rating;

use serde::Serialize;

pub use self::field::{CafeShopField, FieldUpdate};
pub use self::rating::Rating;

use crate::error::{CafeShopError, FieldError, ValidationError};
use crate::id::CafeShopId;

/// The user-supplied part of a cafe shop row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CafeShopDetails {
    pub cafe_username: String,
    pub cafe: String,
    pub location: String,
    pub open: String,
    pub close: String,
    pub coffee_rating: Rating,
    pub wifi_rating: Rating,
    pub power_rating: Rating,
}

impl CafeShopDetails {
    /// Create a builder for constructing validated [`CafeShopDetails`].
    #[must_use]
    pub fn builder() -> CafeShopDetailsBuilder {
        CafeShopDetailsBuilder::default()
    }

    /// Text value of a single field.
    #[must_use]
    pub fn get(&self, field: CafeShopField) -> &str {
        match field {
            CafeShopField::CafeUsername => &self.cafe_username,
            CafeShopField::Cafe => &self.cafe,
            CafeShopField::Location => &self.location,
            CafeShopField::Open => &self.open,
            CafeShopField::Close => &self.close,
            CafeShopField::CoffeeRating => self.coffee_rating.as_str(),
            CafeShopField::WifiRating => self.wifi_rating.as_str(),
            CafeShopField::PowerRating => self.power_rating.as_str(),
        }
    }

    /// Overwrite the single column named by `update`.
    pub fn apply(&mut self, update: &FieldUpdate) {
        match update.clone() {
            FieldUpdate::CafeUsername(value) => self.cafe_username = value,
            FieldUpdate::Cafe(value) => self.cafe = value,
            FieldUpdate::Location(value) => self.location = value,
            FieldUpdate::Open(value) => self.open = value,
            FieldUpdate::Close(value) => self.close = value,
            FieldUpdate::CoffeeRating(rating) => self.coffee_rating = rating,
            FieldUpdate::WifiRating(rating) => self.wifi_rating = rating,
            FieldUpdate::PowerRating(rating) => self.power_rating = rating,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CafeShopError::Validation`] listing every field that is
    /// blank or malformed.
    pub fn validate(&self) -> Result<(), CafeShopError> {
        let errors: Vec<_> = CafeShopField::ALL
            .into_iter()
            .filter_map(|field| FieldUpdate::parse(field, Some(self.get(field).to_string())).err())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Fields(errors).into())
        }
    }
}

/// A persisted cafe shop row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CafeShop {
    pub id: CafeShopId,
    #[serde(flatten)]
    pub details: CafeShopDetails,
}

/// Step-by-step builder for [`CafeShopDetails`].
///
/// Unset fields are reported as missing by [`build`](Self::build).
#[derive(Debug, Default)]
pub struct CafeShopDetailsBuilder {
    cafe_username: Option<String>,
    cafe: Option<String>,
    location: Option<String>,
    open: Option<String>,
    close: Option<String>,
    coffee_rating: Option<String>,
    wifi_rating: Option<String>,
    power_rating: Option<String>,
    rejected: Vec<FieldError>,
}

impl CafeShopDetailsBuilder {
    /// Set (or clear) a field from a raw, unvalidated value.
    #[must_use]
    pub fn field(mut self, field: CafeShopField, value: Option<String>) -> Self {
        let slot = match field {
            CafeShopField::CafeUsername => &mut self.cafe_username,
            CafeShopField::Cafe => &mut self.cafe,
            CafeShopField::Location => &mut self.location,
            CafeShopField::Open => &mut self.open,
            CafeShopField::Close => &mut self.close,
            CafeShopField::CoffeeRating => &mut self.coffee_rating,
            CafeShopField::WifiRating => &mut self.wifi_rating,
            CafeShopField::PowerRating => &mut self.power_rating,
        };
        *slot = value;
        self
    }

    #[must_use]
    pub fn cafe_username(self, value: impl Into<String>) -> Self {
        self.field(CafeShopField::CafeUsername, Some(value.into()))
    }

    #[must_use]
    pub fn cafe(self, value: impl Into<String>) -> Self {
        self.field(CafeShopField::Cafe, Some(value.into()))
    }

    #[must_use]
    pub fn location(self, value: impl Into<String>) -> Self {
        self.field(CafeShopField::Location, Some(value.into()))
    }

    #[must_use]
    pub fn open(self, value: impl Into<String>) -> Self {
        self.field(CafeShopField::Open, Some(value.into()))
    }

    #[must_use]
    pub fn close(self, value: impl Into<String>) -> Self {
        self.field(CafeShopField::Close, Some(value.into()))
    }

    #[must_use]
    pub fn coffee_rating(self, value: impl Into<String>) -> Self {
        self.field(CafeShopField::CoffeeRating, Some(value.into()))
    }

    #[must_use]
    pub fn wifi_rating(self, value: impl Into<String>) -> Self {
        self.field(CafeShopField::WifiRating, Some(value.into()))
    }

    #[must_use]
    pub fn power_rating(self, value: impl Into<String>) -> Self {
        self.field(CafeShopField::PowerRating, Some(value.into()))
    }

    /// Fail the field named by `error` with that error, whatever its value.
    ///
    /// Lets callers add rules the builder does not know about while keeping
    /// a single report in declaration order.
    #[must_use]
    pub fn reject(mut self, error: FieldError) -> Self {
        self.rejected.push(error);
        self
    }

    /// Consume the builder, validate every field, and return the details.
    ///
    /// # Errors
    ///
    /// Returns [`CafeShopError::Validation`] with one [`FieldError`] per
    /// failing field, in declaration order.
    pub fn build(self) -> Result<CafeShopDetails, CafeShopError> {
        let mut report = Report {
            errors: Vec::new(),
            rejected: self.rejected,
        };

        let cafe_username = report.keep(CafeShopField::CafeUsername, |f| {
            f.check_text(self.cafe_username)
        });
        let cafe = report.keep(CafeShopField::Cafe, |f| f.check_text(self.cafe));
        let location = report.keep(CafeShopField::Location, |f| f.check_text(self.location));
        let open = report.keep(CafeShopField::Open, |f| f.check_text(self.open));
        let close = report.keep(CafeShopField::Close, |f| f.check_text(self.close));
        let coffee_rating = report.keep(CafeShopField::CoffeeRating, |f| {
            f.check_rating(self.coffee_rating)
        });
        let wifi_rating =
            report.keep(CafeShopField::WifiRating, |f| f.check_rating(self.wifi_rating));
        let power_rating = report.keep(CafeShopField::PowerRating, |f| {
            f.check_rating(self.power_rating)
        });
        let Report { errors, .. } = report;

        match (
            cafe_username,
            cafe,
            location,
            open,
            close,
            coffee_rating,
            wifi_rating,
            power_rating,
        ) {
            (
                Some(cafe_username),
                Some(cafe),
                Some(location),
                Some(open),
                Some(close),
                Some(coffee_rating),
                Some(wifi_rating),
                Some(power_rating),
            ) if errors.is_empty() => Ok(CafeShopDetails {
                cafe_username,
                cafe,
                location,
                open,
                close,
                coffee_rating,
                wifi_rating,
                power_rating,
            }),
            _ => Err(ValidationError::Fields(errors).into()),
        }
    }
}

/// Field errors collected by [`CafeShopDetailsBuilder::build`].
struct Report {
    errors: Vec<FieldError>,
    rejected: Vec<FieldError>,
}

impl Report {
    /// Record the outcome for `field`; a rejection wins over its own check.
    fn keep<T>(
        &mut self,
        field: CafeShopField,
        check: impl FnOnce(CafeShopField) -> Result<T, FieldError>,
    ) -> Option<T> {
        if let Some(pos) = self
            .rejected
            .iter()
            .position(|err| err.field == field.column())
        {
            self.errors.push(self.rejected.remove(pos));
            return None;
        }
        match check(field) {
            Ok(value) => Some(value),
            Err(err) => {
                self.errors.push(err);
                None
            }
        }
    }
}
