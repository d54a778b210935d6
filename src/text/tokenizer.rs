//! Word tokenization shared by similarity, density and titles

use std::collections::HashSet;

/// Function words removed before density is measured.
pub const STOPWORDS: &[&str] = &[
    "og", "i", "på", "som", "for", "med", "til", "det", "den", "de", "er", "en", "et", "å",
    "jeg", "du", "vi", "dere", "han", "hun", "oss", "av", "fra", "men", "om", "så",
];

/// Tokens must be longer than this many characters to carry meaning.
const MIN_TOKEN_CHARS: usize = 2;

/// Minimum length of a sentence fragment kept by [`split_sentences`].
const MIN_SENTENCE_CHARS: usize = 15;

/// Lowercase `text` and split it on runs of non-word characters.
///
/// Word characters are ASCII letters, digits and `_`. Letters such as `æ`,
/// `ø` and `å` separate words, so `går` yields the fragments `g` and `r`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_long_enough(token: &str) -> bool {
    token.chars().count() > MIN_TOKEN_CHARS
}

/// Drop short tokens and stop words.
pub fn filter_stopwords(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| is_long_enough(t) && !STOPWORDS.contains(&t.as_str()))
        .collect()
}

/// Deduplicated token set used for similarity. Only short tokens are
/// dropped here; stop words stay.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| is_long_enough(t))
        .collect()
}

/// Build an insight title from the first `max_words` whitespace-separated
/// words, appending an ellipsis when the text was longer.
pub fn title_from_text(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let short = words
        .iter()
        .take(max_words)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > max_words {
        format!("{short} …")
    } else {
        short
    }
}

/// Split a message into sentence fragments on `.`, `!` and `?`, keeping
/// fragments of at least 15 characters.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(&['.', '!', '?'][..])
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}
