//! Lowercase word segmentation.

/// Segment a text into lowercase word tokens.
///
/// A token is a maximal run of alphanumeric characters; everything else
/// (punctuation, whitespace, symbols) is a separator and never appears in
/// the output. Tokens with digits survive segmentation and are filtered by
/// the alphabetic-only check in the normalizer.
///
/// Some uppercase letters have no lowercase mapping (the mathematical
/// alphanumeric block, for one); those are dropped outright so the
/// lowercase guarantee holds for every emitted token.
pub fn word_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                if !lower.is_uppercase() {
                    current.push(lower);
                }
            }
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
