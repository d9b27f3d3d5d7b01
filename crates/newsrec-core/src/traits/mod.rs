mod ranker;
mod selector;
mod vectorizer;

pub use ranker::IRanker;
pub use selector::ISelector;
pub use vectorizer::IVectorizer;
