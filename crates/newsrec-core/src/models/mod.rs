pub mod ranking;
pub mod recommendation_set;
pub mod sparse_vector;
pub mod vector_matrix;

pub use ranking::{RankedArticle, Ranking};
pub use recommendation_set::{RecommendationSet, SelectionSide};
pub use sparse_vector::SparseVector;
pub use vector_matrix::VectorMatrix;
