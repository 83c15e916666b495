//! Field allow-list — the mutable columns of a cafe shop and their rules.

use std::fmt;
use std::str::FromStr;

use url::{Host, Url};

use crate::cafe_shop::rating::Rating;
use crate::error::{CafeShopError, FieldError, ValidationError};

/// A user-editable column of the `cafe_shops` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CafeShopField {
    CafeUsername,
    Cafe,
    Location,
    Open,
    Close,
    CoffeeRating,
    WifiRating,
    PowerRating,
}

impl CafeShopField {
    /// Every editable field, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::CafeUsername,
        Self::Cafe,
        Self::Location,
        Self::Open,
        Self::Close,
        Self::CoffeeRating,
        Self::WifiRating,
        Self::PowerRating,
    ];

    /// Column name, also used as the JSON key.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::CafeUsername => "cafe_username",
            Self::Cafe => "cafe",
            Self::Location => "location",
            Self::Open => "open",
            Self::Close => "close",
            Self::CoffeeRating => "coffee_rating",
            Self::WifiRating => "wifi_rating",
            Self::PowerRating => "power_rating",
        }
    }

    /// Path segment used by the single-field update route.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::CafeUsername => "username",
            Self::Cafe => "name",
            Self::Location => "location",
            Self::Open => "open",
            Self::Close => "close",
            Self::CoffeeRating => "coffee-rating",
            Self::WifiRating => "wifi-rating",
            Self::PowerRating => "power-rating",
        }
    }

    /// Apply the text rules to a raw submitted value.
    ///
    /// Every field is required and must not be blank; the value is stored
    /// trimmed. `location` must also be a URL with a host.
    pub(crate) fn check_text(self, raw: Option<String>) -> Result<String, FieldError> {
        let name = self.column();
        let value = match raw.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => return Err(FieldError::required(name)),
        };

        if self == Self::Location && !is_map_link(&value) {
            return Err(FieldError::invalid_url(name));
        }
        Ok(value)
    }

    /// Apply the text rules, then require the value to name a [`Rating`].
    pub(crate) fn check_rating(self, raw: Option<String>) -> Result<Rating, FieldError> {
        self.check_text(raw)?
            .parse()
            .map_err(|_| FieldError::invalid_choice(self.column()))
    }
}

/// Absolute URL with a host; domain hosts need a top-level domain.
fn is_map_link(value: &str) -> bool {
    let Ok(url) = Url::parse(value) else {
        return false;
    };
    match url.host() {
        Some(Host::Domain(domain)) => domain.trim_end_matches('.').contains('.'),
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
        None => false,
    }
}

impl fmt::Display for CafeShopField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for CafeShopField {
    type Err = ValidationError;

    /// Accepts either the slug or the column name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.slug() == s || field.column() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

/// A validated single-column write.
///
/// Rating columns carry a parsed [`Rating`], so applying an update cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    CafeUsername(String),
    Cafe(String),
    Location(String),
    Open(String),
    Close(String),
    CoffeeRating(Rating),
    WifiRating(Rating),
    PowerRating(Rating),
}

impl FieldUpdate {
    /// Validate `raw` against the rule of `field`.
    ///
    /// # Errors
    ///
    /// Returns [`CafeShopError::Validation`] carrying a single field error
    /// when the value is missing or malformed.
    pub fn new(field: CafeShopField, raw: Option<String>) -> Result<Self, CafeShopError> {
        Self::parse(field, raw).map_err(|err| ValidationError::Fields(vec![err]).into())
    }

    pub(crate) fn parse(field: CafeShopField, raw: Option<String>) -> Result<Self, FieldError> {
        Ok(match field {
            CafeShopField::CafeUsername => Self::CafeUsername(field.check_text(raw)?),
            CafeShopField::Cafe => Self::Cafe(field.check_text(raw)?),
            CafeShopField::Location => Self::Location(field.check_text(raw)?),
            CafeShopField::Open => Self::Open(field.check_text(raw)?),
            CafeShopField::Close => Self::Close(field.check_text(raw)?),
            CafeShopField::CoffeeRating => Self::CoffeeRating(field.check_rating(raw)?),
            CafeShopField::WifiRating => Self::WifiRating(field.check_rating(raw)?),
            CafeShopField::PowerRating => Self::PowerRating(field.check_rating(raw)?),
        })
    }

    #[must_use]
    pub fn field(&self) -> CafeShopField {
        match self {
            Self::CafeUsername(_) => CafeShopField::CafeUsername,
            Self::Cafe(_) => CafeShopField::Cafe,
            Self::Location(_) => CafeShopField::Location,
            Self::Open(_) => CafeShopField::Open,
            Self::Close(_) => CafeShopField::Close,
            Self::CoffeeRating(_) => CafeShopField::CoffeeRating,
            Self::WifiRating(_) => CafeShopField::WifiRating,
            Self::PowerRating(_) => CafeShopField::PowerRating,
        }
    }

    /// Text form of the new value, as stored in the column.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::CafeUsername(value)
            | Self::Cafe(value)
            | Self::Location(value)
            | Self::Open(value)
            | Self::Close(value) => value,
            Self::CoffeeRating(rating) | Self::WifiRating(rating) | Self::PowerRating(rating) => {
                rating.as_str()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_slug_and_column_name() {
        assert_eq!(
            "wifi-rating".parse::<CafeShopField>().unwrap(),
            CafeShopField::WifiRating
        );
        assert_eq!(
            "wifi_rating".parse::<CafeShopField>().unwrap(),
            CafeShopField::WifiRating
        );
        assert_eq!(
            "name".parse::<CafeShopField>().unwrap(),
            CafeShopField::Cafe
        );
    }

    #[test]
    fn should_reject_field_outside_allow_list() {
        let result = "id".parse::<CafeShopField>();
        assert_eq!(result, Err(ValidationError::UnknownField("id".to_string())));
    }

    #[test]
    fn should_accept_map_link() {
        let update = FieldUpdate::new(
            CafeShopField::Location,
            Some("https://maps.google.com/?q=cafe".to_string()),
        )
        .unwrap();
        assert_eq!(update.value(), "https://maps.google.com/?q=cafe");
    }

    #[test]
    fn should_reject_location_without_scheme() {
        let result = FieldUpdate::new(
            CafeShopField::Location,
            Some("maps.google.com/cafe".to_string()),
        );
        assert!(matches!(
            result,
            Err(CafeShopError::Validation(ValidationError::Fields(ref errors)))
                if errors[0].code == "invalid_url"
        ));
    }

    #[test]
    fn should_reject_location_without_top_level_domain() {
        assert!(!is_map_link("http://localhost/map"));
        assert!(is_map_link("http://127.0.0.1/map"));
    }

    #[test]
    fn should_reject_blank_value() {
        let result = FieldUpdate::new(CafeShopField::Open, Some("   ".to_string()));
        assert!(matches!(
            result,
            Err(CafeShopError::Validation(ValidationError::Fields(ref errors)))
                if errors[0].field == "open" && errors[0].code == "required"
        ));
    }

    #[test]
    fn should_reject_rating_outside_choices() {
        let result = FieldUpdate::new(CafeShopField::PowerRating, Some("7".to_string()));
        assert!(matches!(
            result,
            Err(CafeShopError::Validation(ValidationError::Fields(ref errors)))
                if errors[0].code == "invalid_choice"
        ));
    }

    #[test]
    fn should_hold_parsed_rating() {
        let update = FieldUpdate::new(CafeShopField::CoffeeRating, Some("10".to_string())).unwrap();
        assert_eq!(update, FieldUpdate::CoffeeRating(Rating::Ten));
        assert_eq!(update.value(), "10");
    }

    #[test]
    fn should_store_trimmed_value() {
        let update = FieldUpdate::new(
            CafeShopField::Location,
            Some("  https://maps.example.com/cafe ".to_string()),
        )
        .unwrap();
        assert_eq!(update.value(), "https://maps.example.com/cafe");

        let update = FieldUpdate::new(CafeShopField::WifiRating, Some(" 8 ".to_string())).unwrap();
        assert_eq!(update, FieldUpdate::WifiRating(Rating::Eight));
    }

    #[test]
    fn should_keep_free_text_hours_untouched() {
        let update = FieldUpdate::new(CafeShopField::Close, Some("5:30PM".to_string())).unwrap();
        assert_eq!(update.field(), CafeShopField::Close);
        assert_eq!(update.value(), "5:30PM");
    }
}
