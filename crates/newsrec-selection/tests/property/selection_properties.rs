use std::collections::HashSet;

use newsrec_core::models::{RankedArticle, Ranking};
use newsrec_core::{Article, Corpus};
use newsrec_selection::{DiversifiedSelector, SelectionBudget};
use proptest::prelude::*;

fn build(items: &[(u8, f64)]) -> (Corpus, Ranking) {
    let corpus = Corpus::new(
        items
            .iter()
            .enumerate()
            .map(|(i, (title, _))| Article::new(format!("t{title}"), format!("text {i}")))
            .collect(),
    )
    .unwrap();
    let ranking = Ranking::from_scores(
        items
            .iter()
            .enumerate()
            .map(|(index, (_, score))| RankedArticle {
                index,
                score: *score,
            })
            .collect(),
    );
    (corpus, ranking)
}

proptest! {
    #[test]
    fn budget_always_sums_to_count(count in 0usize..10_000) {
        let budget = SelectionBudget::split(count);
        prop_assert_eq!(budget.total(), count);
        prop_assert!(budget.near <= count);
        prop_assert_eq!(budget.near, 4 * count / 5);
    }

    #[test]
    fn selection_is_unique_and_sized(
        items in proptest::collection::vec((0u8..8, 0.0f64..1.0), 1..40),
        reference in any::<prop::sample::Index>(),
        count in 0usize..30,
    ) {
        let (corpus, ranking) = build(&items);
        let reference = reference.index(items.len());
        let reference_title = corpus.title(reference).unwrap().to_string();
        let available = items
            .iter()
            .map(|(t, _)| format!("t{t}"))
            .filter(|t| *t != reference_title)
            .collect::<HashSet<_>>()
            .len();

        let result = DiversifiedSelector::default().select(&ranking, &corpus, reference, count);
        prop_assert_eq!(result.is_ok(), count <= available);

        if let Ok(set) = result {
            prop_assert_eq!(set.len(), count);
            prop_assert_eq!(set.near().len(), SelectionBudget::split(count).near);
            prop_assert!(!set.contains(reference));
            let indices: HashSet<usize> = set.iter().collect();
            prop_assert_eq!(indices.len(), count);
            let titles: HashSet<&str> = set.iter().map(|i| corpus.title(i).unwrap()).collect();
            prop_assert_eq!(titles.len(), count);
            prop_assert!(!titles.contains(reference_title.as_str()));
        }
    }
}
