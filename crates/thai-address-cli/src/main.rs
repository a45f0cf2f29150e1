//! thai-address — Command-line interface for thai-address-core
//!
//! Usage examples
//! --------------
//!
//! - Show dataset stats
//!   $ thai-address stats
//!
//! - Route a query exactly like the search box (postal code, then
//!   province/district/autocomplete merge, then single-letter fallback)
//!   $ thai-address search 10330
//!   $ thai-address search บางรัก
//!   $ thai-address --locale en --json search "chiang mai"
//!
//! - Call one lookup directly
//!   $ thai-address postal 50200
//!   $ thai-address province ภูเก็ต
//!   $ thai-address --limit 5 autocomplete lat
//!
//! - Prompt loop (`:q` quits)
//!   $ thai-address interactive
//!
//! - Write a binary cache for faster loads of a large dataset
//!   $ thai-address --input thai.json.gz build thai.comp.bin
//!
//! Set `RUST_LOG=thai_address_core=debug` to see routing decisions.
mod args;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use thai_address_core::session::NO_RESULTS_MESSAGE;
use thai_address_core::{
    AddressDb, AddressHit, AddressProvider, HitField, Locale, RouterConfig, SearchSession, SearchView,
    ThaiAddressProvider,
};
use tracing_subscriber::EnvFilter;

use crate::args::{CliArgs, Commands};

const EXAMPLE_QUERIES: [&str; 5] = ["กรุงเทพ", "10330", "บางรัก", "เชียงใหม่", "ลาดพร้าว"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    let locale: Locale = args.locale.parse().map_err(anyhow::Error::msg)?;

    let db = match &args.input {
        Some(path) if args.cache => AddressDb::load_via_cache(path),
        Some(path) => AddressDb::load_from_path(path),
        None => AddressDb::load(),
    }
    .with_context(|| match &args.input {
        Some(path) => format!("failed to load dataset {}", path.display()),
        None => "failed to load the embedded dataset".to_string(),
    })?;

    let provider = ThaiAddressProvider::from_db(db, locale);
    let json = args.json;

    match args.command {
        Commands::Stats => {
            let Some(stats) = provider.stats() else {
                anyhow::bail!("dataset is not loaded");
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Dataset statistics:");
                println!("  Provinces: {}", stats.provinces);
                println!("  Districts: {}", stats.districts);
                println!("  Sub-districts: {}", stats.sub_districts);
                println!("  Postal codes: {}", stats.postal_codes);
            }
        }

        Commands::Postal { code } => print_hits(&provider.lookup_by_postal_code(&code).await?, json)?,
        Commands::Province { text } => print_hits(&provider.lookup_by_province(&text).await?, json)?,
        Commands::District { text } => print_hits(&provider.lookup_by_district(&text).await?, json)?,
        Commands::Autocomplete { query } => {
            print_hits(&provider.autocomplete(&query, args.limit).await?, json)?
        }

        Commands::Search { query } => {
            let session = session(provider, args.limit);
            let view = session.submit(&query).await;
            print_view(&view, json)?;
        }

        Commands::Interactive => {
            let session = session(provider, args.limit);
            println!("ตัวอย่าง: {}", EXAMPLE_QUERIES.join(", "));
            println!("Type a query, or :q to quit.");

            let stdin = io::stdin();
            let mut lines = stdin.lock().lines();
            loop {
                print!("> ");
                io::stdout().flush()?;
                let Some(line) = lines.next().transpose()? else {
                    break;
                };
                if line.trim() == ":q" {
                    break;
                }
                let view = session.submit(&line).await;
                print_view(&view, json)?;
            }
        }

        Commands::Build { output } => {
            let db = provider.database().context("dataset is not loaded")?;
            db.save_as(&output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Wrote binary cache: {}", output.display());
        }
    }

    Ok(())
}

fn session(provider: ThaiAddressProvider, limit: usize) -> SearchSession<ThaiAddressProvider> {
    SearchSession::with_config(
        provider,
        RouterConfig::default().with_autocomplete_limit(limit),
    )
}

fn print_view(view: &SearchView, json: bool) -> anyhow::Result<()> {
    match view.status.message() {
        Some(message) if json => {
            eprintln!("{message}");
            print_hits(&view.hits, json)
        }
        Some(message) => {
            println!("{message}");
            Ok(())
        }
        None => print_hits(&view.hits, json),
    }
}

fn print_hits(hits: &[AddressHit], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(hits)?);
        return Ok(());
    }
    if hits.is_empty() {
        println!("{NO_RESULTS_MESSAGE}");
    }
    for (i, hit) in hits.iter().enumerate() {
        let fields: Vec<&str> = HitField::ALL
            .iter()
            .map(|f| hit.field_or_placeholder(*f))
            .collect();
        println!("{:>3}. {}", i + 1, fields.join(" | "));
    }
    Ok(())
}
