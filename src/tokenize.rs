//! Text to word tokenization: lowercase, strip non-letters, drop short and stop words.

/// Tokens must be strictly longer than this to survive.
pub const MIN_WORD_LEN: usize = 2;

/// Common English words excluded from counting.
pub const STOP_WORDS: [&str; 51] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "this", "that", "these", "those",
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

/// Case-insensitive membership test against [`STOP_WORDS`].
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.iter().any(|s| s.eq_ignore_ascii_case(word))
}

/// Lowercase, turn every non-letter into a space, collapse whitespace and trim.
pub fn normalize(text: &str) -> String {
    let spaced: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether a candidate token is kept: long enough, not a stop word, letters only.
pub fn keep(word: &str) -> bool {
    word.len() > MIN_WORD_LEN
        && !is_stop_word(word)
        && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Split text into countable words, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|w| keep(w))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_collapses_whitespace() {
        assert_eq!(normalize("  Hello,   World!\n\tFoo-bar  "), "hello world foo bar");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!! 123 ... ??"), "");
    }

    #[test]
    fn normalize_treats_digits_underscore_and_non_ascii_as_separators() {
        assert_eq!(normalize("abc123def"), "abc def");
        assert_eq!(normalize("snake_case"), "snake case");
        assert_eq!(normalize("naïve"), "na ve");
    }

    #[test]
    fn stop_words_are_case_insensitive() {
        assert_eq!(STOP_WORDS.len(), 51);
        assert!(is_stop_word("the"));
        assert!(is_stop_word("THE"));
        assert!(is_stop_word("Them"));
        assert!(!is_stop_word("cat"));
        assert!(!is_stop_word("not"));
    }

    #[test]
    fn tokenize_drops_short_and_stop_words() {
        assert_eq!(tokenize("The cat sat on the mat"), vec!["cat", "sat", "mat"]);
        assert_eq!(tokenize("go to it ox"), Vec::<String>::new());
        assert_eq!(tokenize("Those THESE should Remain"), vec!["remain"]);
    }

    #[test]
    fn keep_rejects_non_letters() {
        assert!(keep("word"));
        assert!(!keep("wo"));
        assert!(!keep("wor1d"));
        assert!(!keep("been"));
    }
}
