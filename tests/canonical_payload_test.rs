use serde_json::json;
use vitrine_sync::normalize::normalize;
use vitrine_sync::types::RawProduct;

#[test]
fn test_payload_matches_catalog_schema() {
    let raw: RawProduct = serde_json::from_value(json!({
        "title": "Balance Bike",
        "currentPrice": 199.90,
        "originalPrice": 249.90,
        "rating": 4.5,
        "category": "Sports & Outdoors",
        "inStock": true
    }))
    .unwrap();

    let payload = serde_json::to_value(normalize(&raw, "https://amzn.to/44TPsu4")).unwrap();

    assert_eq!(
        payload,
        json!({
            "title": "Balance Bike",
            "description": "",
            "category": "familia",
            "currentPrice": "199.9",
            "originalPrice": "249.9",
            "discount": 20,
            "rating": "4.5",
            "affiliateLink": "https://amzn.to/44TPsu4",
            "featured": true,
            "inStock": true
        })
    );
}

#[test]
fn test_absent_optionals_are_left_out_of_the_body() {
    let raw: RawProduct = serde_json::from_value(json!({
        "title": "Umidificador de Ar",
        "currentPrice": 120.0
    }))
    .unwrap();

    let payload = serde_json::to_value(normalize(&raw, "https://amzn.to/umidificador")).unwrap();
    let body = payload.as_object().unwrap();

    assert!(!body.contains_key("imageUrl"));
    assert!(!body.contains_key("originalPrice"));
    assert!(!body.contains_key("discount"));
    assert_eq!(payload["rating"], "");
    assert_eq!(payload["inStock"], true);
}
