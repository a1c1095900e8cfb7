//! Text to tag tokenization: split on whitespace, lowercase, strip non-letters.

/// Split text into candidate tags: by whitespace, lowercased, with every
/// character outside `a`-`z` removed. Fragments that strip to nothing are
/// dropped. Lazy; call again on the same text to restart from the beginning.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().filter_map(|fragment| {
        let tag: String = fragment
            .to_lowercase()
            .chars()
            .filter(char::is_ascii_lowercase)
            .collect();
        (!tag.is_empty()).then_some(tag)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        let tokens: Vec<String> = tokenize("The Cat sat on the MAT.").collect();
        assert_eq!(tokens, ["the", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn output_is_lowercase_alphabetic_only() {
        let text = "Rust 2021! has;separators\tand\nnumbers 42 mixed-IN";
        for token in tokenize(text) {
            assert!(!token.is_empty());
            assert!(token.chars().all(|c| c.is_ascii_lowercase()), "{token}");
        }
    }

    #[test]
    fn fully_stripped_fragments_are_dropped() {
        let tokens: Vec<String> = tokenize("123 !!! -- a1b2").collect();
        assert_eq!(tokens, ["ab"]);
    }

    #[test]
    fn empty_and_whitespace_text_yield_nothing() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("  \n\t  ").count(), 0);
    }

    #[test]
    fn restarts_from_the_beginning() {
        let text = "one two three";
        let first: Vec<String> = tokenize(text).collect();
        let second: Vec<String> = tokenize(text).collect();
        assert_eq!(first, second);
    }
}
