//! Order confirmation types.

use crate::cart::CartLine;
use crate::checkout::CheckoutForm;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A line on a confirmed order, frozen at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub title: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id,
            title: line.product.title.clone(),
            unit_price: line.product.price,
            quantity: line.quantity,
            line_total: line.line_total(),
        }
    }
}

/// Receipt shown on the confirmation page once an order is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub customer_name: String,
    pub email: String,
    pub items: Vec<OrderLine>,
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
    pub promo_code: Option<String>,
    pub card_last_four: String,
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Freeze the cart into a confirmation.
    ///
    /// Zero-quantity lines are left off the receipt. The total is floored at
    /// zero the same way the cart total is.
    pub fn new<'a>(
        form: &CheckoutForm,
        lines: impl IntoIterator<Item = &'a CartLine>,
        promo_code: Option<String>,
        discount: Money,
    ) -> Self {
        let items: Vec<OrderLine> = lines
            .into_iter()
            .filter(|line| line.quantity > 0)
            .map(OrderLine::from)
            .collect();
        let subtotal: Money = items.iter().map(|item| item.line_total).sum();

        Self {
            order_id: OrderId::generate(),
            customer_name: form.full_name(),
            email: form.email.trim().to_string(),
            items,
            subtotal,
            discount,
            total: subtotal.saturating_sub_floor(&discount),
            promo_code,
            card_last_four: form.card_last_four(),
            placed_at: Utc::now(),
        }
    }

    /// Total units ordered.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
