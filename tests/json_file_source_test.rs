use anyhow::Result;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;
use vitrine_sync::normalize::normalize;
use vitrine_sync::sources::JsonFileSource;
use vitrine_sync::types::{Category, ProductSource};

fn write_items(items: &serde_json::Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{}", items)?;
    Ok(file)
}

#[tokio::test]
async fn test_fetch_and_normalize_items_from_file() -> Result<()> {
    let file = write_items(&json!([
        {
            "title": "Air Fryer 4L",
            "description": "Fritadeira sem óleo para a cozinha",
            "currentPrice": 329.0,
            "originalPrice": 399.0,
            "rating": 4.7,
            "category": "Home & Kitchen",
            "imageUrl": "https://m.media-amazon.com/images/I/air-fryer.jpg",
            "inStock": true,
            "affiliateLink": "https://amzn.to/airfryer"
        },
        {
            "title": "Cadeira de Escritório",
            "currentPrice": 899.0,
            "category": "Office Products",
            "affiliateLink": "https://amzn.to/cadeira"
        }
    ]))?;

    let source = JsonFileSource::new(file.path());
    let raw_items = source.fetch_items().await?;
    assert_eq!(raw_items.len(), 2);

    let product = source.get_product(&raw_items[0])?;
    let link = source.get_affiliate_link(&raw_items[0])?;
    let canonical = normalize(&product, &link);

    assert_eq!(canonical.title, "Air Fryer 4L");
    assert_eq!(canonical.category, Category::Casa);
    assert_eq!(canonical.current_price, "329");
    assert_eq!(canonical.original_price.as_deref(), Some("399"));
    assert_eq!(canonical.discount, Some(18));
    assert_eq!(canonical.affiliate_link, "https://amzn.to/airfryer");
    assert!(canonical.featured);

    // Unrecognized category falls back, absent optionals take their defaults
    let product = source.get_product(&raw_items[1])?;
    let link = source.get_affiliate_link(&raw_items[1])?;
    let canonical = normalize(&product, &link);

    assert_eq!(canonical.category, Category::Casa);
    assert_eq!(canonical.rating, "");
    assert!(!canonical.featured);
    assert!(canonical.in_stock);

    Ok(())
}

#[tokio::test]
async fn test_malformed_item_fails_on_its_own() -> Result<()> {
    // Second item has no currentPrice; extraction must fail for it alone
    let file = write_items(&json!([
        { "title": "Produto A", "currentPrice": 10.0, "affiliateLink": "https://amzn.to/a" },
        { "title": "Produto B", "affiliateLink": "https://amzn.to/b" },
        { "title": "Produto C", "currentPrice": 30.0, "affiliateLink": "https://amzn.to/c" }
    ]))?;

    let source = JsonFileSource::new(file.path());
    let raw_items = source.fetch_items().await?;

    assert!(source.get_product(&raw_items[0]).is_ok());
    assert!(source.get_product(&raw_items[1]).is_err());
    assert!(source.get_product(&raw_items[2]).is_ok());

    Ok(())
}

#[tokio::test]
async fn test_missing_affiliate_link_is_an_error() -> Result<()> {
    let file = write_items(&json!([
        { "title": "Produto sem link", "currentPrice": 59.0 }
    ]))?;

    let source = JsonFileSource::new(file.path());
    let raw_items = source.fetch_items().await?;

    let err = source.get_affiliate_link(&raw_items[0]).unwrap_err();
    assert!(err.to_string().contains("affiliateLink"));

    Ok(())
}

#[tokio::test]
async fn test_non_array_file_is_rejected() -> Result<()> {
    let file = write_items(&json!({ "title": "não é uma lista" }))?;

    let source = JsonFileSource::new(file.path());
    assert!(source.fetch_items().await.is_err());

    Ok(())
}
