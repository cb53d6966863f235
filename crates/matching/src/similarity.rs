//! Per-pair TF-IDF cosine similarity.
//!
//! The model is scoped to exactly the two labels being compared rather than a
//! corpus-wide vocabulary. That keeps the match decision independent of
//! catalog size and ordering, at the cost of weaker down-weighting of common
//! words. Switching to a shared IDF changes match outcomes and is not a
//! compatible optimization.

/// Similarity threshold used when callers don't supply their own.
pub const DEFAULT_THRESHOLD: f64 = 0.25;

/// Normalize a listing label for comparison: lowercase, replace every
/// character that is not ASCII alphanumeric, `_`, or whitespace with a space,
/// collapse whitespace runs, trim.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for c in lowered.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            // Whitespace and punctuation both become (at most) one separator.
            pending_space = true;
        }
    }
    out
}

/// Normalized, whitespace-split tokens of a label.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Similarity score in [0, 1] between two freeform labels.
///
/// Returns 0.0 when either label normalizes to nothing. Never panics and
/// never mutates its inputs.
pub fn similarity(a: &str, b: &str) -> f64 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    // Vocabulary: union of tokens across the two documents, first-seen order.
    let mut vocab: Vec<&str> = Vec::new();
    for token in tokens_a.iter().chain(tokens_b.iter()) {
        if !vocab.contains(&token.as_str()) {
            vocab.push(token);
        }
    }

    let vec_a = tfidf_vector(&tokens_a, &tokens_b, &vocab);
    let vec_b = tfidf_vector(&tokens_b, &tokens_a, &vocab);
    cosine(&vec_a, &vec_b)
}

/// Whether two labels refer to the same item at the given threshold.
pub fn is_similar(a: &str, b: &str, threshold: f64) -> bool {
    similarity(a, b) >= threshold
}

/// TF-IDF weights for `doc` over `vocab`, with document frequency computed
/// against exactly the two documents of this pair.
///
/// `idf = ln(2 / df) + 1`; the `+1` smoothing keeps idf positive for terms
/// present in both documents.
fn tfidf_vector(doc: &[String], other: &[String], vocab: &[&str]) -> Vec<f64> {
    let len = doc.len() as f64;
    vocab
        .iter()
        .map(|&term| {
            let count = doc.iter().filter(|t| t.as_str() == term).count() as f64;
            let in_other = other.iter().any(|t| t.as_str() == term);
            let df = f64::from(u8::from(count > 0.0) + u8::from(in_other));
            let idf = (2.0 / df).ln() + 1.0;
            (count / len) * idf
        })
        .collect()
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
