//! Word frequency analysis: count tokens, rank by frequency, keep the top entries.

use std::collections::HashMap;

use crate::tokenize;

/// Maximum number of entries a ranked list holds.
pub const MAX_ENTRIES: usize = 30;

/// A word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u32,
}

/// Word counts in first-occurrence order.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    entries: Vec<RankedEntry>,
    /// word -> position in `entries`
    slots: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Build from a token sequence in a single pass.
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for token in tokens {
            table.add(token.as_ref());
        }
        table
    }

    fn add(&mut self, word: &str) {
        match self.slots.get(word) {
            Some(&slot) => {
                let entry = &mut self.entries[slot];
                entry.count = entry.count.saturating_add(1);
            }
            None => {
                self.slots.insert(word.to_string(), self.entries.len());
                self.entries.push(RankedEntry {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.slots.get(word).map(|&slot| self.entries[slot].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order each word first appeared.
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Sort by count descending and truncate to [`MAX_ENTRIES`].
    ///
    /// `sort_by` is stable, so equal counts keep first-occurrence order.
    pub fn rank(self) -> Vec<RankedEntry> {
        let mut v = self.entries;
        v.sort_by(|a, b| b.count.cmp(&a.count));
        v.truncate(MAX_ENTRIES);
        v
    }
}

/// Count tokens in first-occurrence order.
pub fn frequency_table<I, S>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    FrequencyTable::build(tokens)
}

/// Rank a frequency table: count descending, stable ties, at most 30 entries.
pub fn rank(table: FrequencyTable) -> Vec<RankedEntry> {
    table.rank()
}

/// Full pipeline: raw text in, ranked list out. Never fails; may be empty.
pub fn analyze(text: &str) -> Vec<RankedEntry> {
    rank(frequency_table(tokenize::tokenize(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &[RankedEntry]) -> Vec<(&str, u32)> {
        list.iter().map(|e| (e.word.as_str(), e.count)).collect()
    }

    /// Fixed, generated word list: "wordaa", "wordab", ...
    fn distinct_words(n: usize) -> Vec<String> {
        (0..n)
            .map(|i| {
                let a = (b'a' + (i / 26) as u8) as char;
                let b = (b'a' + (i % 26) as u8) as char;
                format!("word{a}{b}")
            })
            .collect()
    }

    const SAMPLES: &[&str] = &[
        "",
        "the cat sat on the mat",
        "dog dog dog cat cat bird",
        "Welcome to our amazing word cloud generator! This tool helps you create beautiful \
         visual representations of your text. The more frequently a word appears, the larger \
         it will be displayed.",
        "Rust rust RUST, borrow-checker; lifetimes & traits... traits? rust!",
        "!!! 123 ... ??",
    ];

    #[test]
    fn cat_sat_on_the_mat() {
        assert_eq!(
            pairs(&analyze("the cat sat on the mat")),
            vec![("cat", 1), ("sat", 1), ("mat", 1)]
        );
    }

    #[test]
    fn counts_sorted_descending() {
        assert_eq!(
            pairs(&analyze("dog dog dog cat cat bird")),
            vec![("dog", 3), ("cat", 2), ("bird", 1)]
        );
    }

    #[test]
    fn empty_and_non_alphabetic_inputs_give_empty_list() {
        assert!(analyze("").is_empty());
        assert!(analyze("!!! 123 ... ??").is_empty());
        assert!(analyze("   \n\t  ").is_empty());
        assert!(analyze("the and of it is").is_empty());
    }

    #[test]
    fn forty_distinct_words_truncate_to_first_thirty() {
        let words = distinct_words(40);
        let ranked = analyze(&words.join(" "));
        assert_eq!(ranked.len(), MAX_ENTRIES);
        for (entry, word) in ranked.iter().zip(&words) {
            assert_eq!(&entry.word, word);
            assert_eq!(entry.count, 1);
        }
    }

    #[test]
    fn ties_keep_first_appearance_order() {
        // "mango" reaches 2 last; order still follows first appearance.
        let ranked = analyze("zebra apple mango apple zebra mango kiwi");
        assert_eq!(
            pairs(&ranked),
            vec![("zebra", 2), ("apple", 2), ("mango", 2), ("kiwi", 1)]
        );
    }

    #[test]
    fn truncation_drops_lower_ranks_without_reaggregating() {
        let words = distinct_words(35);
        let mut text = words.join(" ");
        // The last word becomes the most frequent.
        text.push(' ');
        text.push_str(&words[34]);
        let ranked = analyze(&text);
        assert_eq!(ranked.len(), MAX_ENTRIES);
        assert_eq!(pairs(&ranked)[0], (words[34].as_str(), 2));
        assert_eq!(ranked[1].word, words[0]);
        assert_eq!(ranked[29].word, words[28]);
        assert_eq!(ranked.iter().map(|e| e.count).sum::<u32>(), 31);
    }

    #[test]
    fn output_invariants_hold() {
        for text in SAMPLES {
            let ranked = analyze(text);
            assert_eq!(ranked, analyze(text), "non-deterministic for {text:?}");
            assert!(ranked.len() <= MAX_ENTRIES);
            for e in &ranked {
                assert!(e.count >= 1);
                assert!(e.word.len() > 2);
                assert!(!tokenize::is_stop_word(&e.word));
            }
            for w in ranked.windows(2) {
                assert!(w[0].count >= w[1].count);
            }
        }
    }

    #[test]
    fn doubling_text_doubles_counts_and_keeps_order() {
        for text in SAMPLES {
            let once = analyze(text);
            let twice = analyze(&format!("{text} {text}"));
            assert_eq!(once.len(), twice.len());
            for (a, b) in once.iter().zip(&twice) {
                assert_eq!(a.word, b.word);
                assert_eq!(a.count * 2, b.count);
            }
        }
    }

    #[test]
    fn frequency_table_counts_in_first_occurrence_order() {
        let table = frequency_table(["bird", "dog", "bird", "cat"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("bird"), Some(2));
        assert_eq!(table.get("fish"), None);
        assert_eq!(
            pairs(table.entries()),
            vec![("bird", 2), ("dog", 1), ("cat", 1)]
        );
        assert!(frequency_table(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn count_saturates_instead_of_overflowing() {
        let mut table = frequency_table(["cloud", "rain"]);
        table.entries[0].count = u32::MAX;
        table.add("cloud");
        table.add("rain");
        assert_eq!(table.get("cloud"), Some(u32::MAX));
        assert_eq!(table.get("rain"), Some(2));
        assert_eq!(pairs(&table.rank()), vec![("cloud", u32::MAX), ("rain", 2)]);
    }

    #[test]
    fn serializes_as_word_and_count() {
        let json = serde_json::to_string(&analyze("dog dog cat")).unwrap();
        assert_eq!(json, r#"[{"word":"dog","count":2},{"word":"cat","count":1}]"#);
    }
}
