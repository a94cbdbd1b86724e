pub mod check;
pub mod classify;
pub mod client;
pub mod error;
pub mod extract;
pub mod types;

pub use check::AvailabilityChecker;
pub use classify::{classify, OUT_OF_STOCK_TEXT};
pub use client::PageClient;
pub use error::ScraperError;
pub use extract::{extract_availability, extract_text, ElementLocator};
pub use types::{AvailabilityReport, AvailabilityStatus, Target};
