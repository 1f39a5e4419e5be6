/// Simulation ticks per second used by the game runtime.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;

/// Maximum drift, in seconds, between an authored duration and its tick count.
pub const DEFAULT_TIME_TOLERANCE: f64 = 1e-6;

/// Slot capacity multiplier: one full craft of buffer beyond a single craft.
pub const SLOT_HEADROOM: u32 = 2;

/// File names inside the data directory
pub const ITEMS_FILE: &str = "items.toml";
pub const RECIPES_FILE: &str = "recipes.toml";
