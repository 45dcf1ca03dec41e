//! Cart line types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One product in the cart with its quantity.
///
/// A quantity of zero is representable: decrementing never removes a line,
/// only an explicit removal does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product snapshot taken when the line was created.
    pub product: Product,
    /// Units of the product.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line for a product.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Product id of this line.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}

/// Flattened line as stored in a cart snapshot.
///
/// `product` holds whatever product data was persisted. It may be partial or
/// absent; missing fields are back-filled when the line is rebuilt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedLine {
    /// Product id.
    pub id: ProductId,
    /// Product title.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Units of the product.
    pub quantity: u32,
    /// Raw persisted product data, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Value>,
}

impl PersistedLine {
    /// Flatten a cart line, keeping the full product snapshot.
    pub fn from_line(line: &CartLine) -> Result<Self, CommerceError> {
        Ok(Self {
            id: line.product.id,
            name: line.product.title.clone(),
            price: line.product.price,
            quantity: line.quantity,
            product: Some(serde_json::to_value(&line.product)?),
        })
    }

    /// Rebuild a cart line.
    ///
    /// The persisted product data is laid over `{id, title: name, price}`;
    /// null or missing fields fall back to empty/zero defaults.
    pub fn into_line(self) -> Result<CartLine, CommerceError> {
        let mut fields = Map::new();
        fields.insert("id".to_string(), serde_json::to_value(self.id)?);
        fields.insert("title".to_string(), Value::String(self.name));
        fields.insert("price".to_string(), serde_json::to_value(self.price)?);

        if let Some(Value::Object(overlay)) = self.product {
            for (key, value) in overlay {
                if !value.is_null() {
                    fields.insert(key, value);
                }
            }
        }

        let product: Product = serde_json::from_value(Value::Object(fields))?;
        Ok(CartLine::new(product, self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn laptop() -> Product {
        Product {
            id: ProductId::new(7),
            title: "Laptop Stand".to_string(),
            price: Money::new(2599),
            category: "laptops".to_string(),
            stock: 12,
            ..Default::default()
        }
    }

    #[test]
    fn test_line_total() {
        let line = CartLine::new(laptop(), 3);
        assert_eq!(line.line_total(), Money::new(7797));
    }

    #[test]
    fn test_round_trip_keeps_identity_fields() {
        let line = CartLine::new(laptop(), 2);
        let rebuilt = PersistedLine::from_line(&line).unwrap().into_line().unwrap();
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn test_backfills_missing_product() {
        let persisted = PersistedLine {
            id: ProductId::new(3),
            name: "Mouse".to_string(),
            price: Money::new(1500),
            quantity: 1,
            product: None,
        };
        let line = persisted.into_line().unwrap();
        assert_eq!(line.product.id, ProductId::new(3));
        assert_eq!(line.product.title, "Mouse");
        assert_eq!(line.product.price, Money::new(1500));
        assert_eq!(line.product.description, "");
        assert_eq!(line.product.stock, 0);
        assert!(line.product.images.is_empty());
    }

    #[test]
    fn test_backfills_partial_product() {
        let persisted = PersistedLine {
            id: ProductId::new(3),
            name: "Mouse".to_string(),
            price: Money::new(1500),
            quantity: 4,
            product: Some(json!({"category": "accessories", "brand": null})),
        };
        let line = persisted.into_line().unwrap();
        assert_eq!(line.product.category, "accessories");
        assert_eq!(line.product.brand, "");
        assert_eq!(line.quantity, 4);
    }
}
