//! Storefront CLI - browse the catalog, manage a cart and check out from
//! the terminal.
//!
//! Commands:
//! - `storefront products` - List products, sorted and paginated
//! - `storefront categories` - List product categories
//! - `storefront product <id>` - Show one product and related products
//! - `storefront search` - Search products, once or as you type
//! - `storefront cart` - Show and change the cart
//! - `storefront promo` - Apply or remove a promo code
//! - `storefront checkout` - Place an order for the cart
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use turbo_observability::{init_logging, LogFormat};

use commands::{
    CartArgs, CheckoutArgs, ConfigArgs, ProductArgs, ProductsArgs, PromoArgs, SearchArgs,
};

/// Storefront - shop the TurboCommerce catalog from the terminal
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// More output; repeat for more log detail
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// List product categories
    Categories,

    /// Show a product
    Product(ProductArgs),

    /// Search products
    Search(SearchArgs),

    /// Show or change the cart
    Cart(CartArgs),

    /// Manage promo codes
    Promo(PromoArgs),

    /// Place an order
    Checkout(CheckoutArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose > 0, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let mut logging = ctx.config.logging.clone();
    logging.level = logging.level.raised_by(cli.verbose);
    if cli.json {
        logging.format = LogFormat::Json;
    }
    if let Err(e) = init_logging(&logging) {
        ctx.output.warn(&format!("Logging disabled: {e}"));
    }

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Categories => commands::products::categories(&ctx).await,
        Commands::Product(args) => commands::products::show(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Promo(args) => commands::cart::promo(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
