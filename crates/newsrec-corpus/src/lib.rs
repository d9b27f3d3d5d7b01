//! # newsrec-corpus
//!
//! Loads article corpora from CSV (header row) or JSON (array of objects),
//! drops exact-duplicate texts, fills missing titles from the text, and
//! optionally keeps a seeded random sample.

pub mod dedup;
pub mod loader;
pub mod record;

pub use dedup::{fingerprint, TextDeduplicator};
pub use loader::{load_csv_from_reader, load_json_from_str, CorpusLoader};
pub use record::RawArticle;
