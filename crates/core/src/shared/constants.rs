/// Environment variable naming the engine's classifier data directory.
pub const CLASSIFIER_DATA_ENV: &str = "EMOSCAN_CLASSIFIER_DATA";

/// Analysis framerate used when none is given.
pub const DEFAULT_FRAMERATE: u32 = 30;

/// Number of faces the engine tracks per frame by default.
pub const DEFAULT_MAX_FACES: u32 = 1;

/// Consumer back-off in milliseconds while the buffer is empty.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2;
