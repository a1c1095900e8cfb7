//! Tag counting: token stream minus stop words -> frequency map.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::TagError;
use crate::stopwords::StopWordSet;
use crate::tokenize;

/// Tag frequency map: normalized word -> occurrence count.
pub type TagMap = HashMap<String, u32>;

/// Count tokens, skipping anything in `stop_words`. Every surviving token
/// lands in the map with a count of at least 1.
pub fn count_tags(tokens: impl Iterator<Item = String>, stop_words: &StopWordSet) -> TagMap {
    let mut tags = TagMap::new();
    for token in tokens {
        if stop_words.contains(&token) {
            continue;
        }
        *tags.entry(token).or_insert(0) += 1;
    }
    tags
}

/// Read a document and count its tags in one pass.
pub fn extract_from_file(path: &Path, stop_words: &StopWordSet) -> Result<TagMap, TagError> {
    let text = fs::read_to_string(path).map_err(|source| TagError::file_access(path, source))?;
    Ok(count_tags(tokenize::tokenize(&text), stop_words))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(text: &str, stop_words: &StopWordSet) -> TagMap {
        count_tags(tokenize::tokenize(text), stop_words)
    }

    #[test]
    fn counts_repeated_tokens() {
        let tags = count("a a a b b c", &StopWordSet::default());
        assert_eq!(tags.len(), 3);
        assert_eq!(tags["a"], 3);
        assert_eq!(tags["b"], 2);
        assert_eq!(tags["c"], 1);
    }

    #[test]
    fn stop_words_never_appear_in_the_map() {
        let stop_words = StopWordSet::from_lines(["the", "on"]);
        let tags = count("The Cat sat on the MAT.", &stop_words);
        assert_eq!(tags.len(), 3);
        for tag in tags.keys() {
            assert!(!stop_words.contains(tag));
        }
        assert_eq!(tags["cat"], 1);
        assert_eq!(tags["sat"], 1);
        assert_eq!(tags["mat"], 1);
    }

    #[test]
    fn recounting_yields_an_identical_map() {
        let stop_words = StopWordSet::from_lines(["and"]);
        let text = "red and blue and red";
        assert_eq!(count(text, &stop_words), count(text, &stop_words));
    }

    #[test]
    fn empty_document_yields_empty_map() {
        assert!(count("", &StopWordSet::default()).is_empty());
    }

    #[test]
    fn missing_document_is_a_file_access_error() {
        let err =
            extract_from_file(Path::new("/nonexistent/doc.txt"), &StopWordSet::default())
                .unwrap_err();
        assert!(matches!(err, TagError::FileAccess { .. }));
    }
}
