use super::*;

fn response(body: &str) -> GenerateStylesResponse {
    serde_json::from_str(body).unwrap()
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoints_join_with_single_slash() {
    assert_eq!(history_endpoint("http://api.test"), "http://api.test/history");
    assert_eq!(history_endpoint("http://api.test/"), "http://api.test/history");
    assert_eq!(generate_styles_endpoint("http://api.test/v1/"), "http://api.test/v1/generate-styles");
    assert_eq!(endpoint("http://api.test/", "/x"), "http://api.test/x");
}

// =============================================================
// Locator resolution
// =============================================================

#[test]
fn absolute_locators_pass_through() {
    for locator in [
        "https://cdn.test/a.jpg",
        "http://cdn.test/a.jpg",
        "blob:http://localhost:3000/1234",
        "data:image/png;base64,AAAA",
    ] {
        assert!(is_absolute_locator(locator));
        assert_eq!(resolve_image_src("http://api.test", locator), locator);
    }
}

#[test]
fn relative_locators_get_backend_prefix() {
    assert_eq!(resolve_image_src("http://api.test", "/static/a.jpg"), "http://api.test/static/a.jpg");
    assert_eq!(resolve_image_src("http://api.test/", "static/a.jpg"), "http://api.test/static/a.jpg");
}

#[test]
fn empty_locator_stays_empty() {
    assert_eq!(resolve_image_src("http://api.test", ""), "");
}

// =============================================================
// Response normalization
// =============================================================

#[test]
fn normalize_capitalizes_keys_in_response_order() {
    let images = normalize_generated_images(&response(
        r#"{"generated_images":{"office":"a.jpg","party":"b.jpg"}}"#,
    ));
    assert_eq!(
        images,
        vec![
            StylizedImage { url: "a.jpg".to_owned(), occasion: Occasion::Office },
            StylizedImage { url: "b.jpg".to_owned(), occasion: Occasion::Party },
        ]
    );
}

#[test]
fn normalize_keeps_non_alphabetical_order() {
    let images = normalize_generated_images(&response(
        r#"{"generated_images":{"vacation":"v.jpg","office":"o.jpg"}}"#,
    ));
    let occasions: Vec<Occasion> = images.iter().map(|i| i.occasion).collect();
    assert_eq!(occasions, vec![Occasion::Vacation, Occasion::Office]);
}

#[test]
fn normalize_skips_unknown_occasions_and_non_string_urls() {
    let images = normalize_generated_images(&response(
        r#"{"generated_images":{"casual":"c.jpg","party":42,"vacation":"v.jpg"}}"#,
    ));
    assert_eq!(images, vec![StylizedImage { url: "v.jpg".to_owned(), occasion: Occasion::Vacation }]);
}

#[test]
fn normalize_missing_mapping_yields_no_images() {
    assert!(normalize_generated_images(&response("{}")).is_empty());
}

// =============================================================
// Session records
// =============================================================

#[test]
fn build_history_item_uses_upload_locator_and_timestamp() {
    let results = vec![StylizedImage { url: "a.jpg".to_owned(), occasion: Occasion::Office }];
    let item = build_history_item("blob:preview", results.clone(), 1_700_000_000_123);
    assert_eq!(item.uploaded, "blob:preview");
    assert_eq!(item.results, results);
    assert_eq!(item.created_at, 1_700_000_000_123);
    assert!(item.session_id.starts_with("session-"));
}

#[test]
fn session_ids_are_unique() {
    assert_ne!(new_session_id(), new_session_id());
}

// =============================================================
// Non-browser fallback
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_history_is_unavailable_outside_browser() {
    let result = block_on_ready(fetch_history("http://api.test"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn api_error_messages_are_descriptive() {
    assert_eq!(ApiError::Status(502).to_string(), "backend responded with status 502");
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "invalid response body: eof");
}

/// Drive a future that never awaits anything pending.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::task::{Context, Poll, Waker};
    let mut future = std::pin::pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
