/// Default near-duplicate threshold; a ratio strictly above this marks a
/// candidate as a duplicate.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Case-insensitive normalized edit-distance ratio in `[0, 1]`. Lowercasing
/// is the only normalization; whitespace and punctuation still count.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// True if `candidate` is a near-duplicate of any already-seen string.
///
/// This is the greedy, order-dependent form: callers compare each new
/// abstract only against the abstracts they have already kept, so which
/// representative survives depends on input order (first wins).
pub fn is_duplicate(candidate: &str, seen: &[String], threshold: f64) -> bool {
    seen.iter().any(|s| similarity_ratio(candidate, s) > threshold)
}
