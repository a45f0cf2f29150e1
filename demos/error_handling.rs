//! Error handling example for thai-address-rs
//!
//! This example demonstrates how loader, provider and search errors surface

use thai_address_rs::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Thai Address Error Handling Example ===\n");

    // Example 1: Missing dataset file
    println!("--- Example 1: Loading a missing dataset ---");
    match AddressDb::load_from_path("does/not/exist.json") {
        Ok(db) => println!("  Unexpectedly loaded {} provinces", db.stats().provinces),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: Malformed JSON
    println!("--- Example 2: Malformed JSON ---");
    match AddressDb::from_json_str(r#"[{"name_th": "#) {
        Ok(_) => println!("  Unexpectedly parsed"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 3: Querying before initialize
    println!("--- Example 3: Provider used before initialize ---");
    let provider = ThaiAddressProvider::embedded();
    match provider.lookup_by_postal_code("10330").await {
        Ok(hits) => println!("  {} hits", hits.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 4: What a search box shows
    println!("--- Example 4: Session status lines ---");
    let session = SearchSession::new(provider);
    let early = session.submit("10330").await;
    println!("  before init: {:?}", early.status.message());

    session.initialize().await;
    for query in ["", "   ", "zzzz", "10330"] {
        let view = session.submit(query).await;
        match view.status {
            SearchStatus::Found(n) => println!("  {query:?}: {n} hits"),
            ref status => println!("  {query:?}: {}", status.message().unwrap_or("-")),
        }
    }
    println!();

    // Example 5: A dataset that fails to load is reported once and kept
    println!("--- Example 5: Failed initialization ---");
    let broken = ThaiAddressProvider::new(
        ProviderConfig::builder().data_path("does/not/exist.json").build(),
    );
    let session = SearchSession::new(broken);
    if !session.initialize().await {
        let view = session.submit("บางรัก").await;
        println!("  {}", view.status.message().unwrap_or("-"));
    }

    Ok(())
}
