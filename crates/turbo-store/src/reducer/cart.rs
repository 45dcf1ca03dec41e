use crate::action::Action;
use crate::state::CartState;
use indexmap::IndexMap;
use turbo_commerce::cart::CartLine;
use turbo_commerce::Money;

/// Cart reducer.
///
/// Quantities never go below zero and a line at zero stays in the cart until
/// it is removed explicitly.
pub fn cart_reducer(mut state: CartState, action: &Action) -> CartState {
    match action {
        Action::AddItem(product) => {
            state
                .items
                .entry(product.id)
                .and_modify(|line| line.quantity = line.quantity.saturating_add(1))
                .or_insert_with(|| CartLine::new(product.clone(), 1));
        }

        Action::RemoveItem(id) => {
            state.items.shift_remove(id);
        }

        Action::IncrementQuantity(id) => {
            if let Some(line) = state.items.get_mut(id) {
                line.quantity = line.quantity.saturating_add(1);
            }
        }

        Action::DecrementQuantity(id) => {
            if let Some(line) = state.items.get_mut(id) {
                line.quantity = line.quantity.saturating_sub(1);
            }
        }

        Action::ClearCart => return CartState::default(),

        Action::ApplyPromoCode(code) => {
            state.applied_promo_code = Some(code.to_uppercase());
        }

        Action::RemovePromoCode => {
            state.applied_promo_code = None;
            state.discount = Money::zero();
        }

        Action::UpdateDiscount(amount) => {
            state.discount = (*amount).max(Money::zero());
        }

        Action::LoadCart(lines) => {
            let mut items = IndexMap::with_capacity(lines.len());
            for persisted in lines {
                let id = persisted.id;
                match persisted.clone().into_line() {
                    Ok(line) => {
                        items.insert(line.id(), line);
                    }
                    Err(e) => tracing::warn!(product_id = %id, error = %e, "skipping unreadable cart line"),
                }
            }
            state.items = items;
        }

        _ => {}
    }
    state
}
