use crate::error::{Result, SyncError};
use crate::types::{ProductSource, RawItemData, RawProduct};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Source that reads pre-extracted product items from a JSON file.
///
/// The file holds an array of objects; each object carries the raw product
/// fields plus the `affiliateLink` the extractor captured for it.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl ProductSource for JsonFileSource {
    fn source_name(&self) -> &'static str {
        "json_file"
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_items(&self) -> Result<Vec<RawItemData>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let data: Value = serde_json::from_str(&content)?;
        let items = data
            .as_array()
            .ok_or_else(|| SyncError::MissingField("top-level item array not found".into()))?
            .clone();

        info!("Loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    fn get_product(&self, raw: &RawItemData) -> Result<RawProduct> {
        let product: RawProduct = serde_json::from_value(raw.clone())?;
        Ok(product)
    }

    fn get_affiliate_link(&self, raw: &RawItemData) -> Result<String> {
        raw["affiliateLink"]
            .as_str()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .ok_or_else(|| SyncError::MissingField("affiliateLink not found".into()))
    }
}
