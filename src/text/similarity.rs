//! Token-overlap similarity used for insight deduplication

use super::tokenizer::token_set;

/// Jaccard similarity of the two texts' filtered token sets.
///
/// Returns `0.0` when either side has no tokens longer than two characters.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let tokens_a = token_set(a);
    let tokens_b = token_set(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).count();
    let union = tokens_a.len() + tokens_b.len() - intersection;
    intersection as f64 / union as f64
}
