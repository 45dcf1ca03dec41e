//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Path => show_paths(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let config = &ctx.config;
    ctx.output.header("Current Configuration");

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &config.api.base_url);
    ctx.output.kv(
        "timeout_secs",
        &config
            .api
            .timeout_secs
            .map_or_else(|| "none".to_string(), |secs| secs.to_string()),
    );
    if let Some(limit) = config.api.listing_limit {
        ctx.output.kv("listing_limit", &limit.to_string());
    }

    ctx.output.info("[storage]");
    ctx.output
        .kv("path", &ctx.storage_path().display().to_string());
    ctx.output.kv("cart_key", &config.storage.cart_key);

    ctx.output.info("[catalog]");
    ctx.output
        .kv("page_size", &config.catalog.page_size.to_string());

    ctx.output.info("[search]");
    ctx.output
        .kv("debounce_ms", &config.search.debounce_ms.to_string());

    ctx.output.info("[checkout]");
    ctx.output
        .kv("delay_ms", &config.checkout.delay_ms.to_string());

    ctx.output.info("[promo_codes]");
    let table = config.promo_table();
    ctx.output
        .kv("codes", &table.codes().collect::<Vec<_>>().join(", "));

    ctx.output.info("[logging]");
    ctx.output.kv("level", config.logging.level.as_str());
    ctx.output
        .kv("format", &format!("{:?}", config.logging.format).to_lowercase());
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join("storefront.toml");
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::write(&path, generate_default_config())?;
    ctx.output
        .success(&format!("Wrote {}", path.display()));
    Ok(())
}

fn show_paths(ctx: &Context) -> Result<()> {
    let config_path = ctx
        .config_path
        .as_ref()
        .map(|p| p.display().to_string());
    let storage_path = ctx.storage_path().display().to_string();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "config": config_path,
            "storage": storage_path,
        }));
        return Ok(());
    }

    ctx.output.kv(
        "config",
        config_path.as_deref().unwrap_or("(defaults, no file found)"),
    );
    ctx.output.kv("storage", &storage_path);
    Ok(())
}
