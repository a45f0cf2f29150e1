//! Basic usage example for thai-address-rs
//!
//! This example demonstrates how to:
//! - Load the embedded Thai address dataset
//! - Look up postal codes, provinces and districts
//! - Route free-text queries the way the search box does

use std::sync::Arc;

use thai_address_rs::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Thai Address Basic Usage Example ===\n");

    println!("Loading address database...");
    let provider = ThaiAddressProvider::embedded();
    provider.initialize().await?;
    if let Some(stats) = provider.stats() {
        println!(
            "✓ Loaded {} provinces, {} districts, {} sub-districts\n",
            stats.provinces, stats.districts, stats.sub_districts
        );
    }

    // Example 1: Postal code
    println!("--- Example 1: Lookup by postal code ---");
    for hit in provider.lookup_by_postal_code("10330").await? {
        println!("- {}", hit.display_line());
    }
    println!();

    // Example 2: Province
    println!("--- Example 2: Sub-districts of a province ---");
    let phuket = provider.lookup_by_province("ภูเก็ต").await?;
    println!("ภูเก็ต: {} sub-districts", phuket.len());
    for hit in phuket.iter().take(3) {
        println!("- {}", hit.display_line());
    }
    println!();

    // Example 3: Autocomplete
    println!("--- Example 3: Autocomplete 'chiang' (top 5) ---");
    for hit in provider.autocomplete("chiang", 5).await? {
        println!("- {}", hit.display_line());
    }
    println!();

    // Example 4: Routed queries
    println!("--- Example 4: Routed queries ---");
    let router = QueryRouter::new(Arc::new(provider));
    for query in ["กรุงเทพ", "10330", "บางรัก", "เชียงใหม่", "ลาดพร้าว"] {
        let kind = QueryKind::classify(query).map(|k| k.as_str()).unwrap_or("empty");
        match router.route(query, true).await {
            Ok(hits) => println!("{query} [{kind}]: {} hits", hits.len()),
            Err(e) => println!("{query} [{kind}]: {}", e.user_message()),
        }
    }

    Ok(())
}
