/// newsrec version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Numerator of the share of a recommendation set drawn from the most similar items.
pub const NEAR_SHARE_NUMERATOR: usize = 4;

/// Denominator of the near share. The far side receives the remainder.
pub const NEAR_SHARE_DENOMINATOR: usize = 5;

/// Environment variable read for the tracing filter.
pub const LOG_ENV_VAR: &str = "NEWSREC_LOG";
