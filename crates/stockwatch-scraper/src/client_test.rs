use super::*;

#[test]
fn new_builds_client_with_short_timeout() {
    assert!(PageClient::new(1).is_ok());
}

#[test]
fn new_builds_client_with_default_timeout() {
    assert!(PageClient::new(30).is_ok());
}

#[test]
fn http_status_error_message_names_status_and_url() {
    let err = ScraperError::HttpStatus {
        status: 503,
        url: "https://shop.example.com/item".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "unexpected HTTP status 503 from https://shop.example.com/item"
    );
}

#[tokio::test]
async fn fetch_page_rejects_url_without_scheme_as_request_error() {
    let client = PageClient::new(5).unwrap();
    let target = Target::new("not a url", "stockwatch-test/0.1");

    let err = client.fetch_page(&target).await.unwrap_err();
    assert!(
        matches!(err, ScraperError::Request { ref url, .. } if url == "not a url"),
        "expected Request, got: {err:?}"
    );
}
