//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod products;
pub mod search;

use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand};
use turbo_commerce::search::{SortBy, SortOrder};
use turbo_commerce::ProductId;
use turbo_store::{Action, AppState, Store};

use crate::context::Context;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show products of this category (filtered by the backend).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort key: featured, price, rating or title.
    #[arg(short, long, value_parser = parse_sort_by)]
    pub sort: Option<SortBy>,

    /// Sort direction: asc or desc.
    #[arg(short, long, value_parser = parse_sort_order)]
    pub order: Option<SortOrder>,

    /// Page to show, starting at 1.
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Products per page (default from config).
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: ProductId,

    /// How many related products to list.
    #[arg(long, default_value_t = 4)]
    pub related: usize,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text. Omit with --watch to type queries interactively.
    pub query: Option<String>,

    /// Keep only these categories (repeatable).
    #[arg(short, long)]
    pub category: Vec<String>,

    /// Minimum price.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Minimum rating.
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Read queries from stdin as they are typed, one per line.
    #[arg(short, long)]
    pub watch: bool,

    /// Maximum results to print.
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a product.
    Add {
        /// Product id.
        id: ProductId,
        /// Units to add.
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product regardless of quantity.
    Remove {
        /// Product id.
        id: ProductId,
    },
    /// Add one unit of a product already in the cart.
    Inc {
        /// Product id.
        id: ProductId,
    },
    /// Take one unit of a product away. The line stays at zero.
    Dec {
        /// Product id.
        id: ProductId,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the promo command.
#[derive(Args)]
pub struct PromoArgs {
    #[command(subcommand)]
    pub command: PromoCommand,
}

#[derive(Subcommand)]
pub enum PromoCommand {
    /// Apply a promo code to the current subtotal.
    Apply {
        /// Promo code.
        code: String,
    },
    /// Remove the applied promo code and its discount.
    Remove,
    /// List known promo codes.
    List,
}

/// Arguments for the checkout command. Missing fields are prompted for.
#[derive(Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub zip_code: Option<String>,
    #[arg(long)]
    pub card_number: Option<String>,
    #[arg(long)]
    pub expiry_date: Option<String>,
    #[arg(long)]
    pub cvv: Option<String>,
    #[arg(long)]
    pub name_on_card: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default storefront.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print where configuration and the cart are read from.
    Path,
}

fn parse_sort_by(s: &str) -> Result<SortBy, String> {
    SortBy::parse(s).ok_or_else(|| format!("unknown sort key '{s}' (featured, price, rating, title)"))
}

fn parse_sort_order(s: &str) -> Result<SortOrder, String> {
    SortOrder::parse(s).ok_or_else(|| format!("unknown sort order '{s}' (asc, desc)"))
}

/// Dispatch a request action behind a spinner and fail with the product
/// slice error if the request failed.
pub(crate) async fn load<'s>(
    store: &'s mut Store,
    ctx: &Context,
    action: Action,
    msg: &str,
) -> Result<&'s AppState> {
    let spinner = ctx.output.spinner(msg);
    let state = store.dispatch(action).await;
    spinner.finish_and_clear();

    if let Some(error) = &state.product.error {
        bail!("{msg} failed: {error}");
    }
    Ok(state)
}

/// Fetch a single product by id.
pub(crate) async fn fetch_product(
    store: &mut Store,
    ctx: &Context,
    id: ProductId,
) -> Result<turbo_commerce::catalog::Product> {
    let state = load(store, ctx, Action::LoadProduct(id), "Loading product").await?;
    state
        .product
        .selected_product
        .clone()
        .ok_or_else(|| anyhow!("Product {id} not found"))
}
