//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as served by the product backend.
///
/// Every field falls back to an empty/zero default when missing, so partial
/// snapshots (e.g. an old persisted cart) deserialize into a full product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Long description.
    pub description: String,
    /// Unit price. Negative prices from the backend read as zero.
    #[serde(deserialize_with = "crate::money::deserialize_non_negative")]
    pub price: Money,
    /// Category slug (e.g. "laptops").
    pub category: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Gallery image URLs.
    pub images: Vec<String>,
    /// Average rating, 0 to 5.
    pub rating: f64,
    /// Units in stock.
    pub stock: u32,
    /// Brand name.
    pub brand: String,
    /// Advertised discount, 0 to 100.
    pub discount_percentage: f64,
}

impl Product {
    /// Check whether any stock is available.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Price before the advertised discount was applied.
    ///
    /// The backend reports `price` as the selling price and
    /// `discountPercentage` as the markdown from the list price.
    pub fn list_price(&self) -> Money {
        let pct = self.discount_percentage.clamp(0.0, 99.99);
        if pct == 0.0 {
            return self.price;
        }
        self.price.multiply_rate(100.0 / (100.0 - pct))
    }

    /// Rating rendered as filled/empty stars, e.g. "★★★★☆".
    pub fn star_rating(&self) -> String {
        let filled = self.rating.clamp(0.0, 5.0).round() as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

/// Listing envelope returned by the backend's list, category and search endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductsResponse {
    /// Products in this page of results.
    pub products: Vec<Product>,
    /// Total number of matching products on the server.
    pub total: u64,
    /// Offset of this page.
    pub skip: u64,
    /// Page size requested.
    pub limit: u64,
}
