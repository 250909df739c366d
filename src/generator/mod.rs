pub mod fetch;
pub mod word_api;

use word_api::FetchError;

/// Sentence used in place of real words whenever fetching fails.
pub const FETCH_ERROR_SENTENCE: &str = "Error fetching words";

/// Something that can hand out a sentence of random words.
pub trait WordSource: Send + Sync {
    fn fetch_words(&self) -> Result<Vec<String>, FetchError>;
}

/// Fetch a sentence, degrading to [`FETCH_ERROR_SENTENCE`] on any failure.
pub fn fetch_sentence(source: &dyn WordSource) -> String {
    let words = source.fetch_words().and_then(|words| {
        let sentence = words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        // A blank sentence could never be completed
        if sentence.is_empty() {
            Err(FetchError::Empty)
        } else {
            Ok(sentence)
        }
    });
    match words {
        Ok(sentence) => sentence,
        Err(err) => {
            tracing::warn!("Failed to fetch random words: {err}");
            FETCH_ERROR_SENTENCE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<&'static str>);

    impl WordSource for Fixed {
        fn fetch_words(&self) -> Result<Vec<String>, FetchError> {
            Ok(self.0.iter().map(|w| w.to_string()).collect())
        }
    }

    struct Broken;

    impl WordSource for Broken {
        fn fetch_words(&self) -> Result<Vec<String>, FetchError> {
            Err(FetchError::Status(503))
        }
    }

    #[test]
    fn test_words_joined_with_single_spaces() {
        let source = Fixed(vec!["alpha", "beta", "gamma"]);
        assert_eq!(fetch_sentence(&source), "alpha beta gamma");
    }

    #[test]
    fn test_blank_words_yield_sentinel() {
        assert_eq!(fetch_sentence(&Fixed(vec![""])), FETCH_ERROR_SENTENCE);
        assert_eq!(fetch_sentence(&Fixed(vec![" ", ""])), FETCH_ERROR_SENTENCE);
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        assert_eq!(fetch_sentence(&Fixed(vec!["one", "", "two"])), "one two");
    }

    #[test]
    fn test_failure_yields_sentinel() {
        assert_eq!(fetch_sentence(&Broken), "Error fetching words");
    }
}
