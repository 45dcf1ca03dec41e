//! Test fixtures shared by the unit tests.

use crate::effects::{Notification, Notifier};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use turbo_commerce::catalog::{derive_categories, Product};
use turbo_commerce::search::matches_query;
use turbo_commerce::{Money, ProductId};
use turbo_data::{FetchError, ProductApi};

pub fn product(id: u64, title: &str, price: f64) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price: Money::from_decimal(price),
        stock: 10,
        ..Default::default()
    }
}

pub fn product_in(id: u64, title: &str, price: f64, category: &str, rating: f64) -> Product {
    Product {
        category: category.to_string(),
        rating,
        ..product(id, title, price)
    }
}

/// In-memory [`ProductApi`] with optional per-call latency.
#[derive(Default)]
pub struct FakeApi {
    products: Vec<Product>,
    failing: bool,
    delays: HashMap<&'static str, Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// Delay calls to `method` (`"products"`, `"categories"`, `"search"`, ...).
    pub fn with_delay(mut self, method: &'static str, delay: Duration) -> Self {
        self.delays.insert(method, delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, method: &'static str, arg: &str) -> Result<(), FetchError> {
        self.calls.lock().unwrap().push(format!("{method}:{arg}"));
        if let Some(delay) = self.delays.get(method) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing {
            return Err(FetchError::HttpError {
                status: 503,
                url: format!("fake://{method}"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ProductApi for FakeApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.enter("products", "").await?;
        Ok(self.products.clone())
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        self.enter("categories", "").await?;
        Ok(derive_categories(&self.products))
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.enter("product", &id.to_string()).await?;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| FetchError::HttpError {
                status: 404,
                url: format!("fake://products/{id}"),
            })
    }

    async fn fetch_products_by_category(&self, category: &str) -> Result<Vec<Product>, FetchError> {
        self.enter("category", category).await?;
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, FetchError> {
        self.enter("search", query).await?;
        Ok(self
            .products
            .iter()
            .filter(|p| matches_query(p, query))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|n| n.message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}
