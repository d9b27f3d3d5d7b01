//! Index and title bookkeeping shared by both selection walks.

use std::collections::HashSet;

/// Tracks consumed indices and titles for one selection round.
#[derive(Debug, Default)]
pub struct TitleGuard<'a> {
    indices: HashSet<usize>,
    titles: HashSet<&'a str>,
    rejected: usize,
}

impl<'a> TitleGuard<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block an index without claiming its title.
    pub fn block_index(&mut self, index: usize) {
        self.indices.insert(index);
    }

    /// Block a title without claiming an index.
    pub fn block_title(&mut self, title: &'a str) {
        self.titles.insert(title);
    }

    /// Claim `index` and `title` if neither is taken. Returns whether it was admitted.
    pub fn admit(&mut self, index: usize, title: &'a str) -> bool {
        if self.indices.contains(&index) || self.titles.contains(title) {
            self.rejected += 1;
            return false;
        }
        self.indices.insert(index);
        self.titles.insert(title);
        true
    }

    /// Candidates turned away so far, including the reference itself.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}
