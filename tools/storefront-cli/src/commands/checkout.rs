//! Checkout command.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input};
use turbo_commerce::checkout::{CheckoutForm, OrderConfirmation};
use turbo_commerce::CommerceError;
use turbo_store::selectors::cart::select_is_empty;
use turbo_store::StoreError;

use super::cart::print_cart;
use super::CheckoutArgs;
use crate::context::Context;
use crate::output::price;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    if select_is_empty(&store.state().cart) {
        bail!("Your cart is empty. Add products with `storefront cart add <id>`.");
    }

    print_cart(ctx, &store.state().cart);
    let interactive = !ctx.output.is_json();
    let form = collect_form(args_fields(&args), interactive)?;

    if interactive && !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Place order?")
            .default(true)
            .interact()?;
        if !confirmed {
            ctx.output.warn("Checkout cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Processing payment");
    let result = store.confirm_order(&form).await;
    spinner.finish_and_clear();

    match result {
        Ok(confirmation) => {
            print_confirmation(ctx, &confirmation);
            Ok(())
        }
        Err(StoreError::Commerce(CommerceError::InvalidCheckout(errors))) => {
            for error in &errors {
                ctx.output.error(&error.to_string());
            }
            bail!("Checkout form has {} invalid field(s)", errors.len())
        }
        Err(e) => Err(e.into()),
    }
}

/// Form fields in prompt order: label and the value given on the command line.
fn args_fields(args: &CheckoutArgs) -> [(&'static str, Option<String>); 11] {
    [
        ("First name", args.first_name.clone()),
        ("Last name", args.last_name.clone()),
        ("Email", args.email.clone()),
        ("Address", args.address.clone()),
        ("City", args.city.clone()),
        ("State", args.state.clone()),
        ("ZIP code", args.zip_code.clone()),
        ("Card number", args.card_number.clone()),
        ("Expiry (MM/YY)", args.expiry_date.clone()),
        ("CVV", args.cvv.clone()),
        ("Name on card", args.name_on_card.clone()),
    ]
}

fn collect_form(
    fields: [(&'static str, Option<String>); 11],
    interactive: bool,
) -> Result<CheckoutForm> {
    let mut values = Vec::with_capacity(fields.len());
    for (label, given) in fields {
        let value = match given {
            Some(value) => value,
            None if interactive => Input::<String>::new()
                .with_prompt(label)
                .allow_empty(true)
                .interact_text()?,
            None => String::new(),
        };
        values.push(value);
    }

    let mut values = values.into_iter();
    let mut next = || values.next().unwrap_or_default();
    Ok(CheckoutForm {
        first_name: next(),
        last_name: next(),
        email: next(),
        address: next(),
        city: next(),
        state: next(),
        zip_code: next(),
        card_number: next(),
        expiry_date: next(),
        cvv: next(),
        name_on_card: next(),
    })
}

fn print_confirmation(ctx: &Context, confirmation: &OrderConfirmation) {
    if ctx.output.is_json() {
        ctx.output.json(confirmation);
        return;
    }

    ctx.output.success(&format!(
        "Thank you, {}! Your order is confirmed.",
        confirmation.customer_name
    ));
    ctx.output.kv("order", confirmation.order_id.as_str());
    ctx.output.kv(
        "placed",
        &confirmation.placed_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    for line in &confirmation.items {
        ctx.output.list_item(&format!(
            "{} x{} {}",
            line.title,
            line.quantity,
            line.line_total.display()
        ));
    }
    ctx.output.kv("subtotal", &confirmation.subtotal.display());
    if let Some(code) = &confirmation.promo_code {
        ctx.output.kv(
            &format!("discount ({code})"),
            &format!("-{}", confirmation.discount.display()),
        );
    }
    ctx.output.kv("total", &price(confirmation.total));
    ctx.output.kv(
        "paid with",
        &format!("card ending {}", confirmation.card_last_four),
    );
    ctx.output
        .info(&format!("A receipt was sent to {}", confirmation.email));
}
