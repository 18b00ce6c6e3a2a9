//! Lifecycle status of a trip.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where a trip sits in its lifecycle.
///
/// Any status may follow any other; only presence is checked on create.
/// Names are matched case-insensitively when parsed or deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum TripStatus {
    Draft,
    Planned,
    Active,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::Planned,
        Self::Active,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Canonical upper-case name, as used on the wire and in storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Planned => "PLANNED",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a status name that is not part of [`TripStatus`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown trip status {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for TripStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for TripStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_every_status_through_display_and_from_str() {
        for status in TripStatus::ALL {
            let parsed: TripStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn should_accept_lower_case_names() {
        assert_eq!("draft".parse::<TripStatus>().unwrap(), TripStatus::Draft);
    }

    #[test]
    fn should_reject_unknown_status() {
        let err = "ARCHIVED".parse::<TripStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus("ARCHIVED".to_string()));
    }

    #[test]
    fn should_deserialize_any_case_and_reject_unknown_names() {
        let parsed: TripStatus = serde_json::from_str("\"draft\"").unwrap();
        assert_eq!(parsed, TripStatus::Draft);

        let err = serde_json::from_str::<TripStatus>("\"ARCHIVED\"").unwrap_err();
        assert!(err.to_string().contains("unknown trip status"));
    }

    #[test]
    fn should_serialize_as_screaming_case() {
        let json = serde_json::to_string(&TripStatus::Cancelled).unwrap();
        assert_eq!(json, "\"CANCELLED\"");
    }
}
