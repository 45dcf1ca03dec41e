//! Product search commands.

use anyhow::{bail, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep_until, Instant};
use turbo_commerce::Money;
use turbo_store::search_session::{SearchPhase, SearchSession};
use turbo_store::selectors::search::select_faceted_results;
use turbo_store::{Action, Store};

use super::products::print_table;
use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    store.dispatch_all(facet_actions(&args)).await;

    if args.watch {
        return watch(&args, ctx, &mut store).await;
    }

    let Some(query) = args.query.clone() else {
        bail!("Give a search query, or use --watch to type queries");
    };

    let spinner = ctx.output.spinner(&format!("Searching for \"{query}\""));
    let state = store.dispatch(Action::SetQuery(query.clone())).await;
    spinner.finish_and_clear();

    if let Some(error) = &state.search.error {
        bail!("Search failed: {error}");
    }

    let mut results = select_faceted_results(state);
    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output
        .header(&format!("{} results for \"{query}\"", results.len()));
    if results.is_empty() {
        ctx.output.info("No products match. Try a shorter query or fewer filters.");
        return Ok(());
    }
    results.truncate(args.limit);
    print_table(ctx, &results);
    Ok(())
}

fn facet_actions(args: &SearchArgs) -> Vec<Action> {
    let mut actions: Vec<Action> = args
        .category
        .iter()
        .map(|category| Action::SetCategoryFilter(category.clone()))
        .collect();

    actions.push(Action::SetPriceRange {
        min: args.min_price.map(Money::from_decimal).unwrap_or_default(),
        max: args
            .max_price
            .map(Money::from_decimal)
            .unwrap_or(Money::new(i64::MAX)),
    });
    if args.min_rating.is_some() {
        actions.push(Action::SetRatingFilter(args.min_rating));
    }
    actions
}

/// Search as the user types, one query per line on stdin.
async fn watch(args: &SearchArgs, ctx: &Context, store: &mut Store) -> Result<()> {
    let mut session = SearchSession::new(store.config().debounce_window);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut open = true;

    if let Some(query) = &args.query {
        session.input(query, Instant::now());
    }
    ctx.output
        .info("Type to search, one query per line. Ctrl-D to stop.");

    while open || session.deadline().is_some() {
        let deadline = session.deadline();
        tokio::select! {
            line = lines.next_line(), if open => match line? {
                Some(text) => session.input(&text, Instant::now()),
                None => open = false,
            },
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                if let Some(action) = session.poll(Instant::now()) {
                    store.dispatch(action).await;
                    session.observe(&store.state().search);
                    report(ctx, session.phase(), store, args.limit);
                }
            }
        }
    }
    Ok(())
}

fn report(ctx: &Context, phase: &SearchPhase, store: &Store, limit: usize) {
    match phase {
        SearchPhase::Results { query, count } => {
            let mut results = select_faceted_results(store.state());
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "query": query, "results": results }));
                return;
            }
            ctx.output
                .header(&format!("{count} results for \"{query}\""));
            results.truncate(limit);
            print_table(ctx, &results);
        }
        SearchPhase::Empty { query } => {
            ctx.output.info(&format!("No products match \"{query}\""));
        }
        SearchPhase::Error { query, message } => {
            ctx.output
                .warn(&format!("Search for \"{query}\" failed: {message}"));
        }
        SearchPhase::Idle | SearchPhase::Typing { .. } | SearchPhase::Searching { .. } => {}
    }
}
