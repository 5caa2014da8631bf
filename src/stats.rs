//! Catalog overview (`sathi catalog`).
//!
//! Prints where the catalog came from and how many entries each collection
//! holds. Loading already validated the data, so reaching this output means
//! the catalog is usable.

use anyhow::Result;
use healthsathi_core::Catalog;
use serde_json::{json, Map, Value};

use crate::config::Config;
use crate::search::print_json;

pub fn run_stats(config: &Config, catalog: &Catalog, json: bool) -> Result<()> {
    let source = match &config.catalog.path {
        Some(path) => path.display().to_string(),
        None => "built-in sample".to_string(),
    };

    if json {
        let counts: Map<String, Value> = catalog
            .counts()
            .iter()
            .map(|(collection, count)| (collection.to_string(), Value::from(*count)))
            .collect();
        return print_json(&json!({ "source": source, "counts": counts }));
    }

    println!("HealthSathi catalog");
    println!("===================");
    println!();
    println!("  Source:      {}", source);
    println!();
    for (collection, count) in catalog.counts() {
        println!("  {:<12} {}", format!("{}:", capitalize(collection)), count);
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
