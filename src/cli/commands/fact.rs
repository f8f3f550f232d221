//! Fetch a single fact from the fact provider.

use crate::cli::Output;
use crate::config::Settings;
use crate::facts::{FactCategory, FactProvider};
use anyhow::anyhow;

/// Run the fact command: resolve, fetch, and print one fact.
pub async fn run_fact(category: &str, settings: Settings) -> anyhow::Result<()> {
    let category: FactCategory = category.parse().map_err(|e: String| anyhow!(e))?;

    let provider = FactProvider::new(&settings.facts);
    let fact = provider.get_fact(category).await;

    println!("{}", fact.text);
    println!();
    Output::kv("Category", &fact.animal.to_string());
    Output::kv("Source", fact.source_label());

    Ok(())
}
