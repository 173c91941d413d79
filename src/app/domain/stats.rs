//! Text statistics shown in the side pane.
//!
//! Everything is recomputed from scratch over the whole buffer on each edit;
//! [`TextStats`] is a pure function of the text.

use std::sync::LazyLock;

use regex_lite::Regex;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Unicode whitespace, spelled out since `regex-lite`'s `\s` is ASCII-only.
/// Includes the `\x1C`-`\x1F` separators that count as space in text.
const WHITESPACE: &str = r"[\t\n\x{0B}\x{0C}\r\x{1C}-\x{1F} \x{85}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}]";

/// Terminal punctuation followed by whitespace ends a sentence.
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[.!?]{}", WHITESPACE)).expect("sentence pattern is valid")
});

/// Two newlines with only whitespace between them separate paragraphs.
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\n{}*\n", WHITESPACE)).expect("paragraph pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub reading_minutes: usize,
}

impl TextStats {
    pub fn compute(text: &str) -> Self {
        let words = count_words(text);
        Self {
            words,
            characters: text.chars().count(),
            sentences: SENTENCE_END.find_iter(text).count() + 1,
            paragraphs: PARAGRAPH_BREAK.find_iter(text).count() + 1,
            reading_minutes: words / WORDS_PER_MINUTE,
        }
    }

    /// Label/value pairs in the order the pane shows them.
    pub fn rows(&self) -> [(&'static str, String); 5] {
        [
            ("Words", self.words.to_string()),
            ("Characters", self.characters.to_string()),
            ("Sentences", self.sentences.to_string()),
            ("Paragraphs", self.paragraphs.to_string()),
            ("Reading time", format!("{} min", self.reading_minutes)),
        ]
    }
}

/// Count maximal runs of word characters.
///
/// Equivalent to counting `\b\w+\b` matches with Unicode-aware `\w`, which
/// `regex-lite` does not offer.
fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for c in text.chars() {
        let word_char = is_word_char(c);
        if word_char && !in_word {
            count += 1;
        }
        in_word = word_char;
    }
    count
}

/// Letters (L*), numbers (N*) and `_`. Combining marks are not word
/// characters, even the ones Unicode lists as alphabetic.
fn is_word_char(c: char) -> bool {
    c == '_'
        || matches!(
            c.general_category_group(),
            GeneralCategoryGroup::Letter | GeneralCategoryGroup::Number
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let stats = TextStats::compute("");
        assert_eq!(
            stats,
            TextStats {
                words: 0,
                characters: 0,
                sentences: 1,
                paragraphs: 1,
                reading_minutes: 0,
            }
        );
    }

    #[test]
    fn test_simple_sentence_pair() {
        let stats = TextStats::compute("Hello, world! This is Writher.");
        assert_eq!(stats.words, 5);
        assert_eq!(stats.characters, 30);
        // "! " counts, the final "." has nothing after it
        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.paragraphs, 1);
    }

    #[test]
    fn test_words_split_on_apostrophes_and_hyphens() {
        assert_eq!(count_words("don't"), 2);
        assert_eq!(count_words("well-known fact"), 3);
    }

    #[test]
    fn test_words_keep_underscores_and_digits() {
        assert_eq!(count_words("snake_case 42 v2"), 3);
    }

    #[test]
    fn test_words_unicode() {
        assert_eq!(count_words("café naïve"), 2);
        assert_eq!(count_words("日本語 テキスト"), 2);
    }

    #[test]
    fn test_words_split_on_combining_marks() {
        // vowel signs and the virama are marks, not letters
        assert_eq!(count_words("हिन्दी"), 3);
        assert_eq!(count_words("e\u{301}te"), 2);
        assert_eq!(count_words("Ⅻ ½ ٣"), 3);
    }

    #[test]
    fn test_words_ignore_punctuation_only() {
        assert_eq!(count_words("... -- !!"), 0);
        assert_eq!(count_words("   \n\t "), 0);
    }

    #[test]
    fn test_characters_are_chars_not_bytes() {
        let stats = TextStats::compute("héllo");
        assert_eq!(stats.characters, 5);
        let stats = TextStats::compute("a\nb");
        assert_eq!(stats.characters, 3);
    }

    #[test]
    fn test_sentences() {
        assert_eq!(TextStats::compute("One. Two? Three! Four").sentences, 4);
        assert_eq!(TextStats::compute("End.\nNext").sentences, 2);
        assert_eq!(TextStats::compute("Wait...").sentences, 1);
        assert_eq!(TextStats::compute("Wait... what").sentences, 2);
        assert_eq!(TextStats::compute("e.g. this").sentences, 2);
    }

    #[test]
    fn test_sentences_after_unicode_whitespace() {
        assert_eq!(TextStats::compute("Hi.\u{a0}There").sentences, 2);
        assert_eq!(TextStats::compute("Done.\u{2028}Next").sentences, 2);
        assert_eq!(TextStats::compute("One!\u{3000}Two?\u{2003}Three").sentences, 3);
        assert_eq!(TextStats::compute("End.\u{1f}x").sentences, 2);
        // zero-width space is not whitespace
        assert_eq!(TextStats::compute("Tight.\u{200b}Next").sentences, 1);
    }

    #[test]
    fn test_paragraphs_across_unicode_whitespace() {
        assert_eq!(TextStats::compute("a\n\u{a0}\nb").paragraphs, 2);
        assert_eq!(TextStats::compute("a\n\u{2003}\u{202f} \nb").paragraphs, 2);
        assert_eq!(TextStats::compute("a\n\u{200b}\nb").paragraphs, 1);
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(TextStats::compute("a\nb").paragraphs, 1);
        assert_eq!(TextStats::compute("a\n\nb").paragraphs, 2);
        assert_eq!(TextStats::compute("a\n \t\nb").paragraphs, 2);
        assert_eq!(TextStats::compute("a\n\n\nb").paragraphs, 2);
        assert_eq!(TextStats::compute("a\n\n\n\nb").paragraphs, 2);
        assert_eq!(TextStats::compute("a\n\nb\n\nc").paragraphs, 3);
    }

    #[test]
    fn test_reading_time_truncates() {
        assert_eq!(TextStats::compute(&"word ".repeat(199)).reading_minutes, 0);
        assert_eq!(TextStats::compute(&"word ".repeat(200)).reading_minutes, 1);
        assert_eq!(TextStats::compute(&"word ".repeat(599)).reading_minutes, 2);
    }

    #[test]
    fn test_rows_order_and_format() {
        let stats = TextStats {
            words: 400,
            characters: 2000,
            sentences: 20,
            paragraphs: 4,
            reading_minutes: 2,
        };
        let rows = stats.rows();
        let labels: Vec<&str> = rows.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["Words", "Characters", "Sentences", "Paragraphs", "Reading time"]);
        assert_eq!(rows[0].1, "400");
        assert_eq!(rows[4].1, "2 min");
    }
}
