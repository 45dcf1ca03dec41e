//! Product backend API.

use crate::{FetchClient, FetchError};
use async_trait::async_trait;
use turbo_commerce::catalog::{derive_categories, Product, ProductsResponse};
use turbo_commerce::ProductId;

/// Read-only access to the product catalog.
///
/// Effects call this port; tests substitute an in-memory implementation.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Full product listing.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Unique categories of the product listing.
    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError>;

    /// A single product.
    async fn fetch_product(&self, id: ProductId) -> Result<Product, FetchError>;

    /// Products in one category, filtered server-side.
    async fn fetch_products_by_category(&self, category: &str) -> Result<Vec<Product>, FetchError>;

    /// Products matching a free-text query, searched server-side.
    async fn search_products(&self, query: &str) -> Result<Vec<Product>, FetchError>;
}

/// [`ProductApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: FetchClient,
    listing_limit: Option<u32>,
}

impl HttpProductApi {
    /// Create an API bound to a client.
    pub fn new(client: FetchClient) -> Self {
        Self {
            client,
            listing_limit: None,
        }
    }

    /// Ask the backend for at most `limit` products per listing
    /// (`0` asks the backend for everything).
    pub fn with_listing_limit(mut self, limit: u32) -> Self {
        self.listing_limit = Some(limit);
        self
    }

    async fn listing(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Vec<Product>, FetchError> {
        let limit = self.listing_limit.map(|l| l.to_string());
        let mut params: Vec<(&str, &str)> = query.to_vec();
        if let Some(limit) = limit.as_deref() {
            params.push(("limit", limit));
        }

        let response: ProductsResponse = self.client.get_json(segments, &params).await?;
        tracing::debug!(
            count = response.products.len(),
            total = response.total,
            "product listing received"
        );
        Ok(response.products)
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.listing(&["products"], &[]).await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        let products = self.fetch_products().await?;
        Ok(derive_categories(&products))
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, FetchError> {
        let id = id.to_string();
        self.client.get_json(&["products", &id], &[]).await
    }

    async fn fetch_products_by_category(&self, category: &str) -> Result<Vec<Product>, FetchError> {
        self.listing(&["products", "category", category], &[]).await
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, FetchError> {
        self.listing(&["products", "search"], &[("q", query)]).await
    }
}
