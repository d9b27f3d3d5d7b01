//! One round of recommendations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which end of the ranking a pick came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSide {
    /// Most similar items, walked from the head of the ranking.
    Near,
    /// Least similar items, walked from the tail of the ranking.
    Far,
}

impl fmt::Display for SelectionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionSide::Near => f.write_str("near"),
            SelectionSide::Far => f.write_str("far"),
        }
    }
}

/// Near-side picks followed by far-side picks, unique by index and by title.
///
/// A set is never mutated after construction. The next round replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    near: Vec<usize>,
    far: Vec<usize>,
}

impl RecommendationSet {
    pub fn new(near: Vec<usize>, far: Vec<usize>) -> Self {
        Self { near, far }
    }

    /// A set with no near/far partition, such as the initial random round.
    pub fn unpartitioned(indices: Vec<usize>) -> Self {
        Self {
            near: indices,
            far: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn near(&self) -> &[usize] {
        &self.near
    }

    pub fn far(&self) -> &[usize] {
        &self.far
    }

    /// All indices in display order: near picks, then far picks.
    pub fn indices(&self) -> Vec<usize> {
        self.near.iter().chain(self.far.iter()).copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.near.iter().chain(self.far.iter()).copied()
    }

    pub fn len(&self) -> usize {
        self.near.len() + self.far.len()
    }

    pub fn is_empty(&self) -> bool {
        self.near.is_empty() && self.far.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.near.contains(&index) || self.far.contains(&index)
    }

    /// Article index at a zero-based display position.
    /// `None` means the choice is out of range, which ends a session.
    pub fn pick(&self, position: usize) -> Option<usize> {
        if position < self.near.len() {
            Some(self.near[position])
        } else {
            self.far.get(position - self.near.len()).copied()
        }
    }

    /// Side a display position belongs to.
    pub fn side_of(&self, position: usize) -> Option<SelectionSide> {
        if position < self.near.len() {
            Some(SelectionSide::Near)
        } else if position < self.len() {
            Some(SelectionSide::Far)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_walks_near_then_far() {
        let set = RecommendationSet::new(vec![4, 7], vec![1]);
        assert_eq!(set.indices(), vec![4, 7, 1]);
        assert_eq!(set.pick(0), Some(4));
        assert_eq!(set.pick(2), Some(1));
        assert_eq!(set.pick(3), None);
        assert_eq!(set.side_of(1), Some(SelectionSide::Near));
        assert_eq!(set.side_of(2), Some(SelectionSide::Far));
        assert_eq!(set.side_of(3), None);
    }

    #[test]
    fn empty_set_picks_nothing() {
        let set = RecommendationSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.pick(0), None);
    }
}
