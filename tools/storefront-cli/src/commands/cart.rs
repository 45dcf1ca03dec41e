//! Cart and promo code commands.

use anyhow::Result;
use dialoguer::Confirm;
use turbo_commerce::ProductId;
use turbo_store::selectors::cart::{
    select_applied_promo_code, select_cart_items, select_cart_total, select_discount,
    select_is_empty, select_subtotal, select_total_quantity,
};
use turbo_store::{Action, CartState, Store};

use super::{fetch_product, CartArgs, CartCommand, PromoArgs, PromoCommand};
use crate::context::Context;
use crate::output::price;

const WIDTHS: [usize; 4] = [5, 36, 10, 4];

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {}
        CartCommand::Add { id, quantity } => {
            let product = fetch_product(&mut store, ctx, id).await?;
            if !product.is_in_stock() {
                ctx.output
                    .warn(&format!("{} is out of stock, adding anyway", product.title));
            }
            for _ in 0..quantity {
                store.dispatch(Action::AddItem(product.clone())).await;
            }
        }
        CartCommand::Remove { id } => {
            if require_line(&store, ctx, id) {
                store.dispatch(Action::RemoveItem(id)).await;
            }
        }
        CartCommand::Inc { id } => {
            if require_line(&store, ctx, id) {
                store.dispatch(Action::IncrementQuantity(id)).await;
            }
        }
        CartCommand::Dec { id } => {
            if require_line(&store, ctx, id) {
                store.dispatch(Action::DecrementQuantity(id)).await;
            }
        }
        CartCommand::Clear { yes } => {
            if !yes && !ctx.output.is_json() {
                let confirmed = Confirm::new()
                    .with_prompt("Remove everything from the cart?")
                    .default(false)
                    .interact()?;
                if !confirmed {
                    ctx.output.warn("Cart left as it was");
                    return Ok(());
                }
            }
            store.dispatch(Action::ClearCart).await;
            ctx.output.success("Cart cleared");
        }
    }

    print_cart(ctx, &store.state().cart);
    Ok(())
}

/// Run the promo command.
pub async fn promo(args: PromoArgs, ctx: &Context) -> Result<()> {
    match args.command {
        PromoCommand::List => {
            let table = ctx.config.promo_table();
            let codes: Vec<&str> = table.codes().collect();
            if ctx.output.is_json() {
                ctx.output.json(&codes);
            } else {
                ctx.output.header("Promo codes");
                for code in codes {
                    ctx.output.list_item(code);
                }
            }
            return Ok(());
        }
        PromoCommand::Apply { code } => {
            let mut store = ctx.open_store()?;
            let quote = store.apply_promo(&code).await?;
            ctx.output.success(&format!(
                "{} applied: {:.0}% off, you save {}",
                quote.code,
                quote.rate * 100.0,
                quote.discount
            ));
            print_cart(ctx, &store.state().cart);
        }
        PromoCommand::Remove => {
            let mut store = ctx.open_store()?;
            if select_applied_promo_code(&store.state().cart).is_none() {
                ctx.output.info("No promo code applied");
            } else {
                store.dispatch(Action::RemovePromoCode).await;
                ctx.output.success("Promo code removed");
            }
            print_cart(ctx, &store.state().cart);
        }
    }
    Ok(())
}

fn require_line(store: &Store, ctx: &Context, id: ProductId) -> bool {
    let present = store.state().cart.items.contains_key(&id);
    if !present {
        ctx.output.warn(&format!("Product {id} is not in the cart"));
    }
    present
}

/// Print the cart lines and totals.
pub(crate) fn print_cart(ctx: &Context, cart: &CartState) {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": select_cart_items(cart),
            "totalQuantity": select_total_quantity(cart),
            "subtotal": select_subtotal(cart),
            "discount": select_discount(cart),
            "appliedPromoCode": select_applied_promo_code(cart),
            "total": select_cart_total(cart),
        }));
        return;
    }

    ctx.output.header("Cart");
    if cart.items.is_empty() {
        ctx.output.info("Your cart is empty.");
        return;
    }

    ctx.output.table_row(&["ID", "Item", "Price", "Qty"], &WIDTHS);
    for item in select_cart_items(cart) {
        ctx.output.table_row(
            &[
                &item.id.to_string(),
                &item.name,
                &item.price.display(),
                &item.quantity.to_string(),
            ],
            &WIDTHS,
        );
    }

    ctx.output.kv("items", &select_total_quantity(cart).to_string());
    ctx.output.kv("subtotal", &select_subtotal(cart).display());
    if let Some(code) = select_applied_promo_code(cart) {
        ctx.output.kv(
            &format!("discount ({code})"),
            &format!("-{}", select_discount(cart).display()),
        );
    }
    ctx.output.kv("total", &price(select_cart_total(cart)));
    if select_is_empty(cart) {
        ctx.output.info("Every line is at zero; add units before checking out.");
    }
}
