//! Vector similarity measures over sparse count vectors.

use newsrec_core::models::SparseVector;

/// Cosine similarity between two count vectors.
/// Returns 0.0 when either vector is zero.
///
/// The denominator is `sqrt(‖a‖²·‖b‖²)` over exact integer sums, so a vector
/// compared with itself scores exactly 1.0.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let denom = (a.norm_squared() * b.norm_squared()).sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (a.dot(b) / denom).clamp(0.0, 1.0)
    }
}

/// Euclidean distance between two count vectors.
pub fn euclidean_distance(a: &SparseVector, b: &SparseVector) -> f64 {
    a.squared_distance(b).sqrt()
}

/// Distance mapped into (0, 1] so that closer vectors score higher.
pub fn euclidean_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    1.0 / (1.0 + euclidean_distance(a, b))
}
