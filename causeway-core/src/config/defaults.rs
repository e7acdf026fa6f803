//! Default configuration values shared by the config structs.

/// Record oracle failures as inconclusive outcomes rather than aborting.
pub const DEFAULT_STRICT: bool = false;

/// Evaluate independence tests sequentially unless parallelism is requested.
pub const DEFAULT_PARALLEL: bool = false;
