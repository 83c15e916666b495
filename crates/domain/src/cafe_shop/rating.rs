//! Rating — the six-step amenity score attached to a cafe shop.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Amenity score, one of the even numbers from 0 to 10.
///
/// Persisted and serialized as its text form (`"0"` … `"10"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rating {
    Zero,
    Two,
    Four,
    Six,
    Eight,
    Ten,
}

impl Rating {
    /// Every accepted rating, lowest first.
    pub const ALL: [Self; 6] = [
        Self::Zero,
        Self::Two,
        Self::Four,
        Self::Six,
        Self::Eight,
        Self::Ten,
    ];

    /// Text form used on the wire and in storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::Two => "2",
            Self::Four => "4",
            Self::Six => "6",
            Self::Eight => "8",
            Self::Ten => "10",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value is not one of the six accepted ratings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid rating {0:?}")]
pub struct InvalidRating(pub String);

impl FromStr for Rating {
    type Err = InvalidRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rating| rating.as_str() == s)
            .ok_or_else(|| InvalidRating(s.to_string()))
    }
}

impl TryFrom<String> for Rating {
    type Error = InvalidRating;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rating> for String {
    fn from(rating: Rating) -> Self {
        rating.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_every_accepted_value() {
        for (text, expected) in ["0", "2", "4", "6", "8", "10"].iter().zip(Rating::ALL) {
            assert_eq!(text.parse::<Rating>().unwrap(), expected);
        }
    }

    #[test]
    fn should_reject_odd_value() {
        assert_eq!("5".parse::<Rating>(), Err(InvalidRating("5".to_string())));
    }

    #[test]
    fn should_reject_out_of_range_value() {
        assert!("12".parse::<Rating>().is_err());
    }

    #[test]
    fn should_reject_padded_value() {
        assert!(" 4".parse::<Rating>().is_err());
    }

    #[test]
    fn should_serialize_as_json_string() {
        let json = serde_json::to_string(&Rating::Eight).unwrap();
        assert_eq!(json, "\"8\"");
        let parsed: Rating = serde_json::from_str("\"10\"").unwrap();
        assert_eq!(parsed, Rating::Ten);
    }

    #[test]
    fn should_fail_deserializing_unknown_rating() {
        assert!(serde_json::from_str::<Rating>("\"3\"").is_err());
    }
}
