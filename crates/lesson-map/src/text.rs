//! Title canonicalization, keyword extraction and part-number detection.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use lesson_model::Script;
use regex::Regex;

/// Hyphen, non-breaking hyphen, figure dash, en dash, em dash, horizontal bar, minus.
const DASHES: [char; 7] = [
    '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}',
];

/// Articles, prepositions and conjunctions that carry no matching signal.
const STOPWORDS: [&str; 12] = [
    "the", "a", "an", "in", "on", "at", "to", "for", "of", "and", "or", "etc",
];

/// Markers of a second or later part. Substring checks, so "part 21" counts.
const LATER_PART_MARKERS: [&str; 4] = ["part 2", "part2", "part 3", "part3"];

static DEVANAGARI_WORD: LazyLock<Regex> = LazyLock::new(|| word_pattern(Script::Devanagari));
static GUJARATI_WORD: LazyLock<Regex> = LazyLock::new(|| word_pattern(Script::Gujarati));

fn word_pattern(script: Script) -> Regex {
    let (first, last) = script.letter_range();
    Regex::new(&format!(
        r"\b[a-zA-Z\x{{{:04X}}}-\x{{{:04X}}}]+\b",
        u32::from(first),
        u32::from(last)
    ))
    .expect("Invalid keyword regex")
}

fn word_regex(script: Script) -> &'static Regex {
    match script {
        Script::Devanagari => &DEVANAGARI_WORD,
        Script::Gujarati => &GUJARATI_WORD,
    }
}

/// Canonical form of a title used for every textual comparison.
///
/// Dash variants become `-`, whitespace runs collapse to one space, the
/// result is trimmed and lower-cased. Native-script characters are kept.
pub fn normalize(title: &str) -> String {
    let unified: String = title
        .chars()
        .map(|ch| if DASHES.contains(&ch) { '-' } else { ch })
        .collect();
    unified
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Significant words of a title.
///
/// Tokens are runs of Latin letters or letters of `script` that sit on word
/// boundaries; stopwords and single-character tokens are dropped.
pub fn keywords(title: &str, script: Script) -> BTreeSet<String> {
    let lowered = title.to_lowercase();
    word_regex(script)
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| token.chars().count() > 1 && !is_stopword(token))
        .map(str::to_string)
        .collect()
}

/// True when the title refers to "Part 2" / "Part 3" in spaced or unspaced form.
pub fn is_part_two_or_higher(title: &str) -> bool {
    let lowered = title.to_lowercase();
    LATER_PART_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn normalize_unifies_dashes_and_whitespace() {
        assert_eq!(
            normalize("  Simple Past Tense in Marathi \u{2013}  Part 1 "),
            "simple past tense in marathi - part 1"
        );
        assert_eq!(normalize("A\u{2014}B\tC\n"), "a-b c");
    }

    #[test]
    fn normalize_keeps_native_script() {
        assert_eq!(
            normalize("Combining consonants in Marathi मराठी जोडाक्षरे"),
            "combining consonants in marathi मराठी जोडाक्षरे"
        );
    }

    #[test]
    fn keywords_drop_stopwords_and_single_letters() {
        assert_eq!(
            keywords("Pronouns and Articles in Marathi", Script::Devanagari),
            set(&["articles", "marathi", "pronouns"])
        );
        assert_eq!(keywords("I a to", Script::Devanagari), BTreeSet::new());
    }

    #[test]
    fn keywords_include_native_script_tokens() {
        let words = keywords("Pronunciation of Anusvar अनुस्वार", Script::Devanagari);
        assert!(words.contains("अनुस्वार"));
        assert!(words.contains("anusvar"));

        let gujarati = keywords("Pronunciation of Anusvar અનુસ્વાર", Script::Gujarati);
        assert!(gujarati.contains("અનુસ્વાર"));
    }

    #[test]
    fn keywords_ignore_other_script_blocks() {
        let words = keywords("Anusvar અનુસ્વાર", Script::Devanagari);
        assert_eq!(words, set(&["anusvar"]));
    }

    #[test]
    fn keywords_skip_tokens_glued_to_digits() {
        let words = keywords("Idioms Part2", Script::Devanagari);
        assert_eq!(words, set(&["idioms"]));
    }

    #[test]
    fn detects_later_parts() {
        assert!(is_part_two_or_higher("Verbs in Marathi – Part 2"));
        assert!(is_part_two_or_higher("Idioms ... Part2"));
        assert!(is_part_two_or_higher("Conjunctions PART 3 After"));
        assert!(!is_part_two_or_higher("Numbers in Marathi – Part 1"));
        assert!(!is_part_two_or_higher("Conjunctions in Marathi Part-4"));
    }

    proptest! {
        #[test]
        fn proptest_normalize_is_idempotent(
            title in "[ a-zA-Z0-9\t\u{0900}-\u{097F}\u{0A80}-\u{0AFF}\u{2013}\u{2014}().,:/-]{0,48}"
        ) {
            let once = normalize(&title);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn proptest_normalize_has_no_edge_or_double_spaces(title in "[ a-zA-Z\t\n-]{0,32}") {
            let normalized = normalize(&title);
            prop_assert!(!normalized.starts_with(' '));
            prop_assert!(!normalized.ends_with(' '));
            prop_assert!(!normalized.contains("  "));
        }
    }
}
