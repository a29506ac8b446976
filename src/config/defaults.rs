//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default random source
pub const DEFAULT_SOURCE: &str = "pseudo";

/// Default upper bound on coordinates per generate request
pub const DEFAULT_MAX_COUNT: usize = 10_000;

/// Default output format
pub const DEFAULT_FORMAT: &str = "json";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5080;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "coordinates-service";
