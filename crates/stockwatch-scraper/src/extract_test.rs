use super::*;

const BADGE_CLASS: &str =
    "c-product-available c-product-available_out-of-stock c-product-available_size_s";

fn page_with_badge(text: &str) -> String {
    format!(
        r#"<html><head><title>Толстовка</title></head><body>
<div class="product"><span class="{BADGE_CLASS}">{text}</span></div>
</body></html>"#
    )
}

#[test]
fn finds_badge_text() {
    let html = page_with_badge("Нет в наличии");
    assert_eq!(
        extract_availability(&html).as_deref(),
        Some("Нет в наличии")
    );
}

#[test]
fn trims_surrounding_whitespace() {
    let html = page_with_badge("\n      В наличии   \n");
    assert_eq!(extract_availability(&html).as_deref(), Some("В наличии"));
}

#[test]
fn concatenates_nested_text() {
    let html = page_with_badge("  <b>Осталось</b> 2 шт. ");
    assert_eq!(extract_availability(&html).as_deref(), Some("Осталось 2 шт."));
}

#[test]
fn returns_none_when_badge_missing() {
    let html = "<html><body><p>Толстовка</p></body></html>";
    assert_eq!(extract_availability(html), None);
}

#[test]
fn partial_class_does_not_match() {
    let html = r#"<span class="c-product-available">В наличии</span>"#;
    assert_eq!(extract_availability(html), None);
}

#[test]
fn extra_class_does_not_match() {
    let html = format!(r#"<span class="{BADGE_CLASS} is-hidden">В наличии</span>"#);
    assert_eq!(extract_availability(&html), None);
}

#[test]
fn same_class_on_other_tag_does_not_match() {
    let html = format!(r#"<div class="{BADGE_CLASS}">В наличии</div>"#);
    assert_eq!(extract_availability(&html), None);
}

#[test]
fn first_match_in_document_order_wins() {
    let html = format!(
        r#"<span class="{BADGE_CLASS}">Нет в наличии</span><span class="{BADGE_CLASS}">В наличии</span>"#
    );
    assert_eq!(
        extract_availability(&html).as_deref(),
        Some("Нет в наличии")
    );
}

#[test]
fn empty_badge_yields_empty_text() {
    let html = page_with_badge("   ");
    assert_eq!(extract_availability(&html).as_deref(), Some(""));
}

#[test]
fn malformed_markup_is_tolerated() {
    let html = format!(r#"<div><p><span class="{BADGE_CLASS}">В наличии</div></body"#);
    assert_eq!(extract_availability(&html).as_deref(), Some("В наличии"));
}

#[test]
fn garbage_input_finds_nothing() {
    assert_eq!(extract_availability("<<<>>> {not html} </"), None);
    assert_eq!(extract_availability(""), None);
}

#[test]
fn custom_locator() {
    let locator = ElementLocator {
        tag: "div",
        class: "price",
    };
    let html = r#"<div class="price-old">1 990 ₽</div><div class="price"> 1 490 ₽ </div>"#;
    assert_eq!(extract_text(html, &locator).as_deref(), Some("1 490 ₽"));
}
