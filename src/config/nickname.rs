//! Random nickname for first runs without a config file.
//!
//! Produces nicknames in the format `AdjectiveNounNN` (e.g. `FluffyShibe42`).

use rand::RngExt;

const ADJECTIVES: &[&str] = &[
    "Such", "Very", "Much", "Fluffy", "Happy", "Sleepy", "Lunar", "Solar", "Golden", "Fuzzy",
    "Turbo", "Cosmic", "Rapid", "Nova", "Zippy", "Bouncy", "Sunny", "Crispy", "Noble", "Swift",
];

const NOUNS: &[&str] = &[
    "Shibe", "Doge", "Pup", "Bark", "Woof", "Paw", "Tail", "Snoot", "Bone", "Treat", "Moon",
    "Rocket", "Coin", "Biscuit", "Floof", "Howl",
];

/// Generate a random nickname like `FluffyShibe42`.
pub fn generate_nickname() -> String {
    let mut rng = rand::rng();
    let adj = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let num: u8 = rng.random_range(0..100);
    format!("{}{}{}", adj, noun, num)
}
