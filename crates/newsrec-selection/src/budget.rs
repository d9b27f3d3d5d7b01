//! Near/far split of a recommendation count.

use newsrec_core::constants::{NEAR_SHARE_DENOMINATOR, NEAR_SHARE_NUMERATOR};

/// Slots per side. `near + far` always equals the requested count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionBudget {
    pub near: usize,
    pub far: usize,
}

impl SelectionBudget {
    /// `near = floor(4 * count / 5)`; the far side takes the remainder.
    pub fn split(count: usize) -> Self {
        let near = count / NEAR_SHARE_DENOMINATOR * NEAR_SHARE_NUMERATOR
            + count % NEAR_SHARE_DENOMINATOR * NEAR_SHARE_NUMERATOR / NEAR_SHARE_DENOMINATOR;
        Self {
            near,
            far: count - near,
        }
    }

    pub fn total(&self) -> usize {
        self.near + self.far
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_101_into_80_and_21() {
        assert_eq!(SelectionBudget::split(101), SelectionBudget { near: 80, far: 21 });
    }

    #[test]
    fn splits_small_counts() {
        assert_eq!(SelectionBudget::split(0), SelectionBudget { near: 0, far: 0 });
        assert_eq!(SelectionBudget::split(1), SelectionBudget { near: 0, far: 1 });
        assert_eq!(SelectionBudget::split(5), SelectionBudget { near: 4, far: 1 });
        assert_eq!(SelectionBudget::split(100), SelectionBudget { near: 80, far: 20 });
    }

    #[test]
    fn splits_counts_near_usize_max() {
        let budget = SelectionBudget::split(usize::MAX);
        assert_eq!(budget.total(), usize::MAX);
        assert_eq!(budget.near, usize::MAX / 5 * 4 + usize::MAX % 5 * 4 / 5);
    }
}
