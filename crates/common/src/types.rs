use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reported movement status of a vehicle.
///
/// Serialized in lowercase both on the wire and in stored documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationStatus {
    Moving,
    Stopped,
    Offline,
}

impl LocationStatus {
    /// Every accepted status, in declaration order.
    pub const ALL: [LocationStatus; 3] = [Self::Moving, Self::Stopped, Self::Offline];

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Moving => "moving",
            Self::Stopped => "stopped",
            Self::Offline => "offline",
        }
    }
}

impl std::fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl std::fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown location status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for LocationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Page/limit pair used by list queries.
///
/// Values are always normalized: `page >= 1` and `1 <= limit <= MAX_LIMIT`.
/// The fields are private so [`Pagination::new`] is the only constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 100;

    /// Builds a pagination, defaulting missing values and clamping the rest.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(Self::DEFAULT_PAGE).max(1),
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
        }
    }

    /// One-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of records on a page.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of records to skip before the current page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_lowercase_names() {
        assert_eq!("moving".parse::<LocationStatus>(), Ok(LocationStatus::Moving));
        assert_eq!("stopped".parse::<LocationStatus>(), Ok(LocationStatus::Stopped));
        assert_eq!("offline".parse::<LocationStatus>(), Ok(LocationStatus::Offline));
        assert!("Moving".parse::<LocationStatus>().is_err());
        assert!("parked".parse::<LocationStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&LocationStatus::Stopped).unwrap();
        assert_eq!(json, "\"stopped\"");
        let status: LocationStatus = serde_json::from_str("\"offline\"").unwrap();
        assert_eq!(status, LocationStatus::Offline);
    }

    #[test]
    fn pagination_defaults() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.limit(), 10);
        assert_eq!(pagination.skip(), 0);
    }

    #[test]
    fn pagination_clamps_out_of_range_values() {
        let pagination = Pagination::new(Some(0), Some(500));
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.limit(), 100);
        assert_eq!(pagination.skip(), 0);

        let pagination = Pagination::new(None, Some(0));
        assert_eq!(pagination.limit(), 1);
    }

    #[test]
    fn pagination_skip_counts_previous_pages() {
        let pagination = Pagination::new(Some(3), Some(25));
        assert_eq!(pagination.skip(), 50);
    }

    #[test]
    fn pagination_skip_does_not_overflow() {
        let pagination = Pagination::new(Some(u32::MAX), Some(Pagination::MAX_LIMIT));
        assert_eq!(
            pagination.skip(),
            u64::from(u32::MAX - 1) * u64::from(Pagination::MAX_LIMIT)
        );
    }
}
