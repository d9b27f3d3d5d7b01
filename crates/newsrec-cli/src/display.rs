//! Terminal rendering of recommendation rounds and articles.

use std::io::{self, Write};

use newsrec_core::{Article, Corpus, RecommendationSet};

const RULE: &str = "=========================================";

/// Numbered titles, 1-based. The far section gets its own header.
pub fn display_recommendations<W: Write>(
    out: &mut W,
    set: &RecommendationSet,
    corpus: &Corpus,
) -> io::Result<()> {
    writeln!(out, "\n\n\nHere are some new recommendations for you:\n")?;
    for (position, index) in set.iter().enumerate() {
        if position == set.near().len() && !set.far().is_empty() {
            writeln!(out, "\nAnd some other news:\n")?;
        }
        writeln!(out, "{}. {}", position + 1, corpus.title(index).unwrap_or_default())?;
    }
    Ok(())
}

/// Full article view.
pub fn display_article<W: Write>(out: &mut W, index: usize, article: &Article) -> io::Result<()> {
    writeln!(out, "\n\n\narticle {index}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{}\n", article.title)?;
    writeln!(out, "{}", article.text)?;
    writeln!(out, "{RULE}\n\n")
}
