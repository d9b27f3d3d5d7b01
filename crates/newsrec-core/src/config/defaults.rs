// Single source of truth for all default values.

// --- Vectorizer ---
/// Two-letter-or-longer words, or four-digit years.
pub const DEFAULT_TOKEN_PATTERN: &str = r"\b[a-zA-Z][a-zA-Z]\w*\b|\b\d{4}\b";
pub const DEFAULT_LOWERCASE: bool = true;
pub const DEFAULT_MIN_DF: usize = 2;
pub const DEFAULT_MAX_DF: f64 = 0.3;

// --- Selection ---
pub const DEFAULT_EXCLUDE_REFERENCE_TITLE: bool = true;

// --- Session ---
pub const DEFAULT_RECOMMENDATION_COUNT: usize = 101;

// --- Corpus ---
pub const DEFAULT_TITLE_FALLBACK_CHARS: usize = 30;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
