//! Synthetic Placeholder Characters
//!
//! Locally generated fake records appended to fetched pages so the displayed
//! list stays padded. Shape is deterministic (ids, names, image path); only
//! the race and ki values vary between runs.

use serde_json::Map;

use super::types::{Character, CharacterId};

/// How many placeholders are appended to every fetched page
pub const PLACEHOLDER_COUNT: usize = 10;

/// Placeholder ids continue from this offset: "1001", "1002", ...
const PLACEHOLDER_ID_OFFSET: u64 = 1000;

/// Generic avatar used for every placeholder
const PLACEHOLDER_IMAGE: &str = "/user.png";

const RACES: [&str; 6] = [
    "Saiyan",
    "Namekian",
    "Human",
    "Android",
    "Majin",
    "Frieza Race",
];

/// Generate the fixed set of placeholder characters
pub fn placeholder_characters() -> Vec<Character> {
    (1..=PLACEHOLDER_COUNT as u64)
        .map(|n| {
            let id = PLACEHOLDER_ID_OFFSET + n;
            Character {
                id: CharacterId::from(id),
                name: Some(format!("Fake Character {id}")),
                race: Some(RACES[(rand_simple() * RACES.len() as f64) as usize % RACES.len()].to_string()),
                gender: None,
                ki: Some(format!("{}", 1_000 + (rand_simple() * 99_000.0) as u64)),
                max_ki: None,
                affiliation: None,
                description: Some("Synthetic placeholder character".to_string()),
                image: Some(PLACEHOLDER_IMAGE.to_string()),
                extra: Map::new(),
            }
        })
        .collect()
}

/// Simple random number generator (0.0 to 1.0)
fn rand_simple() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    (nanos % 1000) as f64 / 1000.0
}
