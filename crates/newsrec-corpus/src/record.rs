//! Raw corpus records as they appear on disk.

use serde::Deserialize;

use newsrec_core::errors::{CorpusError, NewsrecResult};
use newsrec_core::Article;

/// One record before validation. Unknown columns are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl RawArticle {
    /// Validate into an [`Article`]. `record` is the zero-based record number
    /// used in errors.
    pub fn into_article(self, record: usize, fallback_chars: usize) -> NewsrecResult<Article> {
        let text = self.text.ok_or(CorpusError::MissingText { record })?;
        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => fallback_title(&text, fallback_chars),
        };
        Ok(Article { title, text })
    }
}

/// First `chars` characters of `text`.
pub fn fallback_title(text: &str, chars: usize) -> String {
    text.chars().take(chars).collect()
}
