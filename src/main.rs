use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use spicerack::{CachedSearcher, CatalogStore, SearchOutcome, SearchSession};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = CatalogStore::open(&cli.data, &cli.lang)
        .with_context(|| format!("loading catalog from {}", cli.data.display()))?;
    let (language, searcher) = store.snapshot();

    match cli.command {
        Commands::Search {
            query,
            tuning,
            explain,
        } => {
            let results = searcher.search_with(&query, &tuning.overrides());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }
            display::print_results(&query, &results);
            if explain && !results.is_empty() {
                display::section_top("EXPLAIN");
                for result in &results {
                    if let Some(hits) = searcher.explain(&query, result.kind, &result.id) {
                        display::print_explain(result, &hits);
                    }
                }
                display::section_bot();
            }
        }

        Commands::Suggest { query, tuning } => {
            let names: Vec<String> = searcher
                .search_with(&query, &tuning.overrides())
                .into_iter()
                .map(|r| r.name)
                .collect();
            if cli.json {
                println!("{}", serde_json::to_string(&names)?);
            } else {
                display::print_suggestions(&names);
            }
        }

        Commands::Go { query } => {
            let session = SearchSession::new(CachedSearcher::new((*searcher).clone()), |_: &str| {});
            let outcome = session.handle_search(&query);
            if cli.json {
                let value = match &outcome {
                    SearchOutcome::Navigated { target } => json!({ "target": target }),
                    SearchOutcome::NoResults => json!({ "target": null, "reason": "no results" }),
                    SearchOutcome::Skipped => json!({ "target": null, "reason": "query too short" }),
                    SearchOutcome::Failed { message } => json!({ "target": null, "reason": message }),
                };
                println!("{}", value);
                return Ok(());
            }
            match outcome {
                SearchOutcome::Navigated { target } => println!("{}", target),
                SearchOutcome::NoResults => {
                    eprintln!("no results for \"{}\"", query);
                    std::process::exit(1);
                }
                SearchOutcome::Skipped => {
                    eprintln!(
                        "query too short (minimum {} characters)",
                        spicerack::Searcher::config(&*searcher).min_query_length
                    );
                    std::process::exit(2);
                }
                SearchOutcome::Failed { message } => anyhow::bail!("search failed: {}", message),
            }
        }

        Commands::Inspect { expand } => {
            let terms = expand.as_deref().map(|q| searcher.expanded_terms(q));
            if cli.json {
                let config = spicerack::Searcher::config(&*searcher);
                let aliases: Vec<_> = searcher
                    .aliases()
                    .entries()
                    .iter()
                    .map(|e| json!({ "key": e.key, "terms": e.terms }))
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "language": language,
                        "products": searcher.product_count(),
                        "services": searcher.service_count(),
                        "searchConfig": config,
                        "aliases": aliases,
                        "quickRedirects": searcher.redirects().sorted(),
                        "expansion": terms,
                    }))?
                );
                return Ok(());
            }
            let expansion = expand.as_deref().zip(terms.as_deref());
            display::print_catalog(&language, &searcher, expansion);
        }
    }

    Ok(())
}

/// Logs go to stderr so `--json` output stays machine-readable.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "spicerack=warn",
        1 => "spicerack=info",
        _ => "spicerack=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
