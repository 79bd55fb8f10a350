//! Word replacement driven by a pair of lists.
//!
//! ## Purpose
//!
//! Given a sentence and two parallel lists, every word of the sentence that
//! equals the k-th item of the first list is replaced with the k-th item of
//! the second list (`"hello i am lars"` with `i,am,lars` → `you,are,peter`
//! gives `"hello you are peter"`).
//!
//! ## Design notes
//!
//! * **Words**: The sentence is split on single spaces; runs of spaces are kept.
//! * **Chaining**: Replacement rules are applied in order to the current word,
//!   so `a → b` followed by `b → c` turns `a` into `c`.
//! * **Missing counterpart**: A rule without a replacement item is skipped.
//!
//! ## Non-goals
//!
//! * This module does not match substrings inside words.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

/// Replace words of `sentence` according to the parallel `from`/`to` items.
pub fn replace_words(sentence: &str, from: &[&str], to: &[&str], case_sensitive: bool) -> String {
    let words: Vec<&str> = sentence
        .split(' ')
        .map(|word| {
            from.iter()
                .zip(to.iter())
                .fold(word, |current, (&pattern, &replacement)| {
                    if word_matches(current, pattern, case_sensitive) {
                        replacement
                    } else {
                        current
                    }
                })
        })
        .collect();

    words.join(" ")
}

// Compare a word against a pattern.
#[inline]
fn word_matches(word: &str, pattern: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        word == pattern
    } else {
        word.to_lowercase() == pattern.to_lowercase()
    }
}
