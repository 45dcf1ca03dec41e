//! Catalog browsing commands.

use anyhow::{bail, Result};
use turbo_commerce::catalog::Product;
use turbo_commerce::search::PaginationPatch;
use turbo_store::selectors::product::{
    select_featured_product, select_page_count, select_products_by_category,
    select_total_products,
};
use turbo_store::Action;

use super::{fetch_product, load, ProductArgs, ProductsArgs};
use crate::context::Context;
use crate::output::{price, rating};

const WIDTHS: [usize; 5] = [5, 36, 10, 14, 6];

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    if args.page == 0 {
        bail!("Pages start at 1");
    }

    let mut store = ctx.open_store()?;
    let request = match &args.category {
        Some(category) => Action::LoadProductsByCategory(category.clone()),
        None => Action::LoadProducts,
    };
    load(&mut store, ctx, request, "Loading products").await?;

    let patch = PaginationPatch {
        page: Some(args.page - 1),
        page_size: Some(args.page_size.unwrap_or(ctx.config.catalog.page_size)),
        sort_by: args.sort,
        sort_order: args.order,
    };
    store.dispatch(Action::SetPagination(patch)).await;

    let page = store.current_page();
    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    let product_state = &store.state().product;
    let title = match &args.category {
        Some(category) => format!("Products in {category}"),
        None => "Products".to_string(),
    };
    ctx.output.header(&title);

    if args.page == 1 && args.category.is_none() {
        if let Some(featured) = select_featured_product(product_state) {
            ctx.output
                .kv("Featured", &format!("{} ({})", featured.title, rating(&featured)));
        }
    }

    if page.is_empty() {
        ctx.output.info("No products on this page.");
    } else {
        print_table(ctx, &page);
    }

    let pagination = product_state.pagination;
    ctx.output.info(&format!(
        "Page {} of {} · {} products · sorted by {} ({})",
        pagination.page + 1,
        select_page_count(product_state),
        select_total_products(product_state),
        pagination.sort_by.display_name(),
        pagination.sort_order,
    ));
    Ok(())
}

/// Run the categories command.
pub async fn categories(ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let state = load(&mut store, ctx, Action::LoadCategories, "Loading categories").await?;

    if ctx.output.is_json() {
        ctx.output.json(&state.product.categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &state.product.categories {
        ctx.output.list_item(category);
    }
    Ok(())
}

/// Run the product command.
pub async fn show(args: ProductArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let product = fetch_product(&mut store, ctx, args.id).await?;

    let related: Vec<Product> = if product.category.is_empty() || args.related == 0 {
        Vec::new()
    } else {
        let request = Action::LoadProductsByCategory(product.category.clone());
        let state = load(&mut store, ctx, request, "Loading related products").await?;
        select_products_by_category(&state.product, &product.category, Some(product.id))
            .into_iter()
            .take(args.related)
            .cloned()
            .collect()
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product,
            "related": related,
        }));
        return Ok(());
    }

    ctx.output.header(&product.title);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("price", &price(product.price));
    if product.discount_percentage > 0.0 {
        ctx.output.kv(
            "was",
            &format!(
                "{} ({:.0}% off)",
                product.list_price().display(),
                product.discount_percentage
            ),
        );
    }
    ctx.output.kv("rating", &rating(&product));
    if !product.brand.is_empty() {
        ctx.output.kv("brand", &product.brand);
    }
    ctx.output.kv("category", &product.category);
    ctx.output.kv(
        "stock",
        &if product.is_in_stock() {
            format!("{} available", product.stock)
        } else {
            "out of stock".to_string()
        },
    );
    if !product.description.is_empty() {
        ctx.output.info(&product.description);
    }

    if !related.is_empty() {
        ctx.output.header("You may also like");
        print_table(ctx, &related);
    }
    Ok(())
}

pub(crate) fn print_table(ctx: &Context, products: &[Product]) {
    ctx.output
        .table_row(&["ID", "Title", "Price", "Rating", "Stock"], &WIDTHS);
    for product in products {
        ctx.output.table_row(
            &[
                &product.id.to_string(),
                &product.title,
                &product.price.display(),
                &format!("{} {:.1}", product.star_rating(), product.rating),
                &product.stock.to_string(),
            ],
            &WIDTHS,
        );
    }
}
