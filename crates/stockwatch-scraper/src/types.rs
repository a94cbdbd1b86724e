//! Value types shared by the fetch, extract, and classify steps.

use std::fmt;

use serde::Serialize;

/// The product page being checked: a URL plus the browser identity sent as
/// the `User-Agent` header. Fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    url: String,
    user_agent: String,
}

impl Target {
    #[must_use]
    pub fn new(url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user_agent: user_agent.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    OutOfStock,
    InStock,
    Unknown,
    Error,
}

impl AvailabilityStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OutOfStock => "out_of_stock",
            Self::InStock => "in_stock",
            Self::Unknown => "unknown",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one availability check.
///
/// `Error` is only produced when fetching the page failed; the other three
/// statuses always follow a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityReport {
    pub status: AvailabilityStatus,
    pub message: String,
}

impl AvailabilityReport {
    #[must_use]
    pub fn out_of_stock() -> Self {
        Self {
            status: AvailabilityStatus::OutOfStock,
            message: "Product is not available".to_string(),
        }
    }

    #[must_use]
    pub fn in_stock(availability_text: &str) -> Self {
        Self {
            status: AvailabilityStatus::InStock,
            message: format!("Product availability: {availability_text}"),
        }
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self {
            status: AvailabilityStatus::Unknown,
            message: "Availability information not found".to_string(),
        }
    }

    #[must_use]
    pub fn error(failure: &dyn std::error::Error) -> Self {
        Self {
            status: AvailabilityStatus::Error,
            message: failure.to_string(),
        }
    }
}

impl fmt::Display for AvailabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_snake_case() {
        let json = serde_json::to_value(AvailabilityReport::out_of_stock()).unwrap();
        assert_eq!(json["status"], "out_of_stock");
        assert_eq!(json["message"], "Product is not available");
    }

    #[test]
    fn status_display_matches_serialized_tag() {
        for status in [
            AvailabilityStatus::OutOfStock,
            AvailabilityStatus::InStock,
            AvailabilityStatus::Unknown,
            AvailabilityStatus::Error,
        ] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.to_string());
        }
    }

    #[test]
    fn in_stock_message_embeds_text() {
        let report = AvailabilityReport::in_stock("В наличии");
        assert_eq!(report.message, "Product availability: В наличии");
    }

    #[test]
    fn report_display_includes_status_and_message() {
        assert_eq!(
            AvailabilityReport::unknown().to_string(),
            "unknown: Availability information not found"
        );
    }

    #[test]
    fn target_accessors_return_construction_values() {
        let target = Target::new("https://shop.example.com/p/1", "agent/1.0");
        assert_eq!(target.url(), "https://shop.example.com/p/1");
        assert_eq!(target.user_agent(), "agent/1.0");
    }
}
