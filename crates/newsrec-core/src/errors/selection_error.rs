use crate::models::SelectionSide;

/// Diversified selection errors.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("ranking exhausted on the {side} side: selected {selected} of {requested}")]
    InsufficientCandidates {
        side: SelectionSide,
        requested: usize,
        selected: usize,
    },

    #[error("ranking covers {ranking} articles but corpus holds {corpus}")]
    RankingMismatch { ranking: usize, corpus: usize },
}
