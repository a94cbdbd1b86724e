use crate::types::AvailabilityReport;

/// Badge text the store shows for a sold-out product.
///
/// Compared byte-for-byte: no case folding or whitespace normalization beyond
/// the trim done during extraction.
pub const OUT_OF_STOCK_TEXT: &str = "Нет в наличии";

/// Maps extracted availability text to a report.
///
/// An empty string is treated like a missing badge.
#[must_use]
pub fn classify(availability_text: Option<&str>) -> AvailabilityReport {
    match availability_text {
        Some(OUT_OF_STOCK_TEXT) => AvailabilityReport::out_of_stock(),
        Some(text) if !text.is_empty() => AvailabilityReport::in_stock(text),
        _ => AvailabilityReport::unknown(),
    }
}
