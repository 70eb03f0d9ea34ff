/// Macros longer than this many characters are flagged as complex.
pub const MACRO_COMPLEXITY_LIMIT: usize = 50;

/// Layouts with more keys than this count as full-size-plus builds.
pub const FULL_SIZE_KEY_THRESHOLD: usize = 104;

/// Configurations with more layers than this add a difficulty point.
pub const LAYER_COMPLEXITY_THRESHOLD: usize = 3;

/// Configurations with more macro mappings than this add a difficulty point.
pub const MACRO_COUNT_THRESHOLD: usize = 10;

pub const MIN_DIFFICULTY_LEVEL: u8 = 1;
pub const MAX_DIFFICULTY_LEVEL: u8 = 5;

/// Free time (hours) below which recommendations are capped at level 2.
pub const LIMITED_TIME_HOURS: f64 = 5.0;

pub const CONFIGURATION_VERSION: &str = "1.0.0";
pub const DEFAULT_CONFIGURATION_NAME: &str = "New Configuration";
pub const DEFAULT_LAYER_ID: &str = "default";
pub const DEFAULT_LAYER_NAME: &str = "Default";

/// Keycap profiles every generated key is compatible with.
pub const STANDARD_PROFILES: [&str; 5] = ["cherry", "oem", "sa", "dsa", "xda"];
