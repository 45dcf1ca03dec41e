use crate::state::CartState;
use serde::Serialize;
use turbo_commerce::{Money, ProductId};

/// Flattened cart line for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
}

/// Cart lines in insertion order.
pub fn select_cart_items(state: &CartState) -> Vec<CartItemView> {
    state
        .items
        .values()
        .map(|line| CartItemView {
            id: line.id(),
            name: line.product.title.clone(),
            price: line.product.price,
            quantity: line.quantity,
        })
        .collect()
}

pub fn select_total_quantity(state: &CartState) -> u32 {
    state
        .items
        .values()
        .fold(0u32, |sum, line| sum.saturating_add(line.quantity))
}

pub fn select_subtotal(state: &CartState) -> Money {
    state.items.values().map(|line| line.line_total()).sum()
}

pub fn select_discount(state: &CartState) -> Money {
    state.discount
}

pub fn select_applied_promo_code(state: &CartState) -> Option<&str> {
    state.applied_promo_code.as_deref()
}

/// Subtotal minus discount, never negative.
pub fn select_cart_total(state: &CartState) -> Money {
    select_subtotal(state).saturating_sub_floor(&state.discount)
}

/// True when no line has a positive quantity.
pub fn select_is_empty(state: &CartState) -> bool {
    select_total_quantity(state) == 0
}
