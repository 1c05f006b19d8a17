//! Split text into lowercase word tokens.
//!
//! A token is a maximal run of word characters (Unicode alphanumerics or
//! `_`) at least two characters long. Single characters are discarded and no
//! stop words are removed, so short cuisine names such as "Bò" survive.

/// Minimum token length in characters.
pub const MIN_TOKEN_CHARS: usize = 2;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenize `text` into lowercase word tokens, in order, keeping duplicates.
///
/// # Examples
/// ```
/// use forkcast_scorer::tokenize;
///
/// assert_eq!(tokenize("Bún chả, Hà Nội!"), ["bún", "chả", "hà", "nội"]);
/// assert_eq!(tokenize("A la carte"), ["la", "carte"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_owned)
        .collect()
}
