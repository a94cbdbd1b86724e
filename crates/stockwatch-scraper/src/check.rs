//! The fetch, extract, classify pipeline for one product page.

use crate::classify::classify;
use crate::client::PageClient;
use crate::error::ScraperError;
use crate::extract::extract_availability;
use crate::types::{AvailabilityReport, Target};

/// Checks the availability of a single product page.
///
/// Holds no state between checks; calling [`check`](Self::check) twice
/// against an unchanged page yields equal reports.
pub struct AvailabilityChecker {
    client: PageClient,
    target: Target,
}

impl AvailabilityChecker {
    /// Creates a checker for `target` whose requests time out after
    /// `timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::ClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(target: Target, timeout_secs: u64) -> Result<Self, ScraperError> {
        Ok(Self::with_client(target, PageClient::new(timeout_secs)?))
    }

    /// Creates a checker that reuses an existing [`PageClient`].
    #[must_use]
    pub fn with_client(target: Target, client: PageClient) -> Self {
        Self { client, target }
    }

    /// Fetches the page, extracts the availability badge, and classifies it.
    ///
    /// Never fails: a fetch error becomes a report with status `error` whose
    /// message is the error's description.
    pub async fn check(&self) -> AvailabilityReport {
        match self.client.fetch_page(&self.target).await {
            Ok(html) => {
                let availability_text = extract_availability(&html);
                classify(availability_text.as_deref())
            }
            Err(e) => {
                tracing::error!(
                    url = self.target.url(),
                    error = %e,
                    "failed to check product availability"
                );
                AvailabilityReport::error(&e)
            }
        }
    }
}
