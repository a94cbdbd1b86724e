//! Locates the availability element in a product page.
//!
//! Matching is on the element's full `class` attribute value, compared as an
//! exact string. A page that lists the same classes in a different order, or
//! adds one more class, does not match.

use scraper::{ElementRef, Html};

/// Identifies an element by tag name and exact `class` attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementLocator {
    pub tag: &'static str,
    pub class: &'static str,
}

impl ElementLocator {
    /// The stock badge on the product page.
    pub const AVAILABILITY: Self = Self {
        tag: "span",
        class: "c-product-available c-product-available_out-of-stock c-product-available_size_s",
    };

    fn matches(&self, element: &ElementRef<'_>) -> bool {
        let value = element.value();
        value.name().eq_ignore_ascii_case(self.tag) && value.attr("class") == Some(self.class)
    }
}

/// Returns the trimmed text of the availability element, or `None` if the
/// page does not contain it.
#[must_use]
pub fn extract_availability(html: &str) -> Option<String> {
    extract_text(html, &ElementLocator::AVAILABILITY)
}

/// Returns the trimmed text content of the first element in document order
/// matching `locator`.
///
/// Malformed markup is parsed with html5ever's error recovery and never
/// causes a failure; at worst nothing matches.
#[must_use]
pub fn extract_text(html: &str, locator: &ElementLocator) -> Option<String> {
    let document = Html::parse_document(html);

    let found = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| locator.matches(element));

    if let Some(element) = found {
        let text = element.text().collect::<String>().trim().to_string();
        tracing::info!(text = %text, "found availability text");
        Some(text)
    } else {
        tracing::warn!(
            tag = locator.tag,
            class = locator.class,
            "availability tag not found"
        );
        None
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
