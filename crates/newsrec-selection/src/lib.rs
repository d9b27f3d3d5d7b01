//! # newsrec-selection
//!
//! Turns a similarity ranking into a recommendation set: four fifths of the
//! slots go to the most similar articles (walked from the head of the
//! ranking), the rest to the least similar (walked from the tail). No two
//! picks share a title.

pub mod budget;
pub mod guard;
pub mod selector;

pub use budget::SelectionBudget;
pub use guard::TitleGuard;
pub use selector::DiversifiedSelector;
