//! Pure mapping from raw extractor output to the canonical catalog record.

use crate::constants::{DESCRIPTION_MAX_CHARS, FEATURED_RATING_MIN, TITLE_MAX_CHARS};
use crate::types::{CanonicalProduct, Category, RawProduct};

/// Map an upstream taxonomy label to a canonical category.
///
/// Lookup is exact: no case folding, no trimming. Labels the table does not
/// know (including the empty string) land on `Casa`, the default shelf.
pub fn map_category(label: &str) -> Category {
    match label {
        "Home & Kitchen" | "Kitchen & Dining" => Category::Casa,
        "Beauty & Personal Care" | "Health & Personal Care" => Category::Autocuidado,
        "Baby" | "Toys & Games" | "Sports & Outdoors" => Category::Familia,
        "Health & Household" | "Vitamins & Dietary Supplements" => Category::Saude,
        "Electronics" | "Computers & Accessories" | "Cell Phones & Accessories" => {
            Category::Tecnologia
        }
        _ => Category::Casa,
    }
}

/// Integer discount percentage, or `None` when there is nothing to report:
/// original price missing, zero, or not actually higher than the current one.
///
/// Rounds half away from zero (`f64::round`); prices are non-negative, so in
/// practice that is round-half-up.
pub fn discount_percent(current: f64, original: Option<f64>) -> Option<u32> {
    let original = original?;
    if original <= 0.0 || original <= current {
        return None;
    }
    Some((((original - current) / original) * 100.0).round() as u32)
}

/// Keep the first `max` characters of `s`.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Transform one raw product plus its affiliate link into the canonical sync
/// record. Pure and stateless; identical input yields identical output.
pub fn normalize(raw: &RawProduct, affiliate_link: &str) -> CanonicalProduct {
    let description = raw.description.as_deref().unwrap_or("");

    CanonicalProduct {
        title: truncate_chars(&raw.title, TITLE_MAX_CHARS),
        description: truncate_chars(description, DESCRIPTION_MAX_CHARS),
        category: map_category(raw.category.as_deref().unwrap_or("")),
        image_url: raw.image_url.clone(),
        current_price: raw.current_price.to_string(),
        original_price: raw
            .original_price
            .filter(|p| *p > 0.0)
            .map(|p| p.to_string()),
        discount: discount_percent(raw.current_price, raw.original_price),
        rating: raw.rating.map(|r| r.to_string()).unwrap_or_default(),
        affiliate_link: affiliate_link.to_string(),
        featured: raw.rating.unwrap_or(0.0) >= FEATURED_RATING_MIN,
        in_stock: raw.in_stock.unwrap_or(true),
    }
}
