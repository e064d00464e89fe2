//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `carnet_core` wiring: open a
//!   seeded in-memory store and print collection counts.

use carnet_core::{open_store_in_memory, ContentService};
use std::error::Error;

fn main() {
    if let Err(err) = run() {
        eprintln!("carnet_cli error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let store = open_store_in_memory()?;
    let snapshot = ContentService::new(&store).snapshot()?;

    println!("carnet_core version={}", carnet_core::core_version());
    println!(
        "articles={} tags={} associations={}",
        snapshot.articles.len(),
        snapshot.tags.len(),
        snapshot.associations.len()
    );
    Ok(())
}
