//! Shared constants
//!

/// Hosted endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://image.pollinations.ai";

/// Name used for downloaded file names and the user agent.
pub const DEFAULT_APP_NAME: &str = "promptpix";

/// Where the key-value store keeps its files by default.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Key the history is persisted under.
pub const HISTORY_KEY: &str = "promptHistory";

/// Maximum number of history entries kept.
pub const HISTORY_LIMIT: usize = 10;

/// Random seeds are drawn from `0..SEED_UPPER_BOUND`.
pub const SEED_UPPER_BOUND: u32 = 1_000_000;

/// Format of the `time` field on history entries, eg `10/19/2026, 3:04:05 PM`.
pub const HISTORY_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Prompts offered by `--random-prompt`.
pub const SAMPLE_PROMPTS: [&str; 5] = [
    "A futuristic cityscape at sunset, neon lights, high detail, photorealistic.",
    "A serene forest with a glowing mushroom village, fantasy style.",
    "An astronaut floating in space, surrounded by vibrant nebulae, digital art.",
    "A majestic dragon perched on a snow-capped mountain, cinematic lighting.",
    "A steampunk-style owl wearing a monocle and a top hat, intricate details.",
];

#[cfg(test)]
/// Endpoint used in tests
pub const TEST_ENDPOINT: &str = "https://images.example.org";
