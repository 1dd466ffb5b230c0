//! Custom assertions over the CLI's JSON output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that a gallery dump has `expected` cards with contiguous indices.
pub fn assert_card_count(json: &Value, expected: usize) -> Result<()> {
    let cards = json["cards"]
        .as_array()
        .context("Expected 'cards' array in JSON")?;

    if cards.len() != expected {
        anyhow::bail!("Expected {} cards, got {}", expected, cards.len());
    }

    for (position, card) in cards.iter().enumerate() {
        let index = card["index"]
            .as_u64()
            .context("Expected numeric 'index' on every card")?;
        if index as usize != position {
            anyhow::bail!("Card at position {} carries index {}", position, index);
        }
    }

    Ok(())
}

/// Assert that every card name contains `needle` (case-insensitive).
pub fn assert_cards_match(json: &Value, needle: &str) -> Result<()> {
    let cards = json["cards"]
        .as_array()
        .context("Expected 'cards' array in JSON")?;
    let needle = needle.to_lowercase();

    for card in cards {
        let name = card["name"].as_str().context("Expected 'name' on card")?;
        if !name.to_lowercase().contains(&needle) {
            anyhow::bail!("Card '{}' does not match '{}'", name, needle);
        }
    }

    Ok(())
}

/// Assert the gallery dump is the no-results placeholder.
pub fn assert_no_results(json: &Value) -> Result<()> {
    match json["kind"].as_str() {
        Some("no_results") => Ok(()),
        other => anyhow::bail!("Expected no_results gallery, got {:?}", other),
    }
}
