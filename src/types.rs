use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Raw item data as returned from external extractors
pub type RawItemData = serde_json::Value;

/// Product fields as delivered by the upstream extractor, prior to
/// normalization. Optional upstream fields stay optional here; defaults are
/// applied during normalization, not at the parse boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub title: String,
    pub description: Option<String>,
    pub current_price: f64,
    pub original_price: Option<f64>,
    pub rating: Option<f64>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub in_stock: Option<bool>,
}

/// Canonical catalog categories. The upstream taxonomy is open-ended; this
/// set is closed and fixed by the catalog schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Casa,
    Autocuidado,
    Familia,
    Saude,
    Tecnologia,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Casa => "casa",
            Category::Autocuidado => "autocuidado",
            Category::Familia => "familia",
            Category::Saude => "saude",
            Category::Tecnologia => "tecnologia",
        }
    }
}

/// Normalized product record matching the catalog sync schema. Serialized
/// with camelCase keys; absent optionals are left out of the JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalProduct {
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub current_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    pub rating: String,
    pub affiliate_link: String,
    pub featured: bool,
    pub in_stock: bool,
}

/// Core trait that all product sources must implement
#[async_trait::async_trait]
pub trait ProductSource: Send + Sync {
    /// Unique identifier for this source
    fn source_name(&self) -> &'static str;

    /// Fetch all items from this source
    async fn fetch_items(&self) -> Result<Vec<RawItemData>>;

    /// Extract the product fields from one raw item
    fn get_product(&self, raw: &RawItemData) -> Result<RawProduct>;

    /// Extract the affiliate link captured for one raw item
    fn get_affiliate_link(&self, raw: &RawItemData) -> Result<String>;
}
