//! Regex tokenizer with an explicit case policy.

use regex::Regex;

use newsrec_core::config::VectorizerConfig;
use newsrec_core::errors::{NewsrecResult, VectorizeError};

/// Splits text into vocabulary candidates.
///
/// With `lowercase` set, the whole text is lowercased before matching, so
/// `Wereboar` and `wereboar` are the same token. Otherwise matching is
/// case-sensitive.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    lowercase: bool,
}

impl Tokenizer {
    /// # Errors
    /// Returns `InvalidTokenPattern` if `pattern` does not compile.
    pub fn new(pattern: &str, lowercase: bool) -> NewsrecResult<Self> {
        let pattern = Regex::new(pattern).map_err(|e| VectorizeError::InvalidTokenPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { pattern, lowercase })
    }

    pub fn from_config(config: &VectorizerConfig) -> NewsrecResult<Self> {
        Self::new(&config.token_pattern, config.lowercase)
    }

    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// All tokens of `text`, in order of appearance.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if self.lowercase {
            let lowered = text.to_lowercase();
            self.collect(&lowered)
        } else {
            self.collect(text)
        }
    }

    fn collect(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case_sensitive() -> Tokenizer {
        Tokenizer::new(&VectorizerConfig::default().token_pattern, false).unwrap()
    }

    #[test]
    fn keeps_words_of_two_letters_or_more() {
        let tokens = case_sensitive().tokenize("I am a Wereboar");
        assert_eq!(tokens, vec!["am", "Wereboar"]);
    }

    #[test]
    fn keeps_four_digit_years_only() {
        let tokens = case_sensitive().tokenize("In 2019 sales rose 15 percent to 12345 units");
        assert_eq!(tokens, vec!["In", "2019", "sales", "rose", "percent", "to", "units"]);
    }

    #[test]
    fn word_must_start_with_two_letters() {
        let tokens = case_sensitive().tokenize("a1b x2 ab3 _ab");
        assert_eq!(tokens, vec!["ab3"]);
    }

    #[test]
    fn lowercase_policy_folds_case() {
        let tokenizer = Tokenizer::from_config(&VectorizerConfig::default()).unwrap();
        assert!(tokenizer.lowercase());
        assert_eq!(tokenizer.tokenize("Magic TAVERN"), vec!["magic", "tavern"]);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = Tokenizer::new("([a-z", true).unwrap_err();
        assert!(err.to_string().contains("invalid token pattern"));
    }
}
