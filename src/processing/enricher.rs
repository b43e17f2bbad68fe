//! Optional linguistic enrichment: extra candidate phrases for skill lookup

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Produces additional candidate phrases (chunks, bigrams) that the skill
/// extractor checks against the lexicon by exact lookup.
///
/// Implementations may be backed by an external model that is not always
/// available, so failures are reported rather than assumed away.
pub trait LinguisticEnricher: Send + Sync {
    fn name(&self) -> &str;

    fn candidate_phrases(&self, text: &str) -> anyhow::Result<Vec<String>>;
}

enum Token<'a> {
    Word(&'a str),
    Space,
    Break,
}

fn tokens(text: &str) -> impl Iterator<Item = Token<'_>> {
    text.split_word_bounds().map(|segment| {
        if segment.chars().any(char::is_alphanumeric) {
            Token::Word(segment)
        } else if segment.chars().all(char::is_whitespace) {
            Token::Space
        } else {
            Token::Break
        }
    })
}

/// Built-in enricher: stop-word delimited phrase chunks plus word bigrams,
/// both computed over Unicode word boundaries.
pub struct ChunkEnricher {
    stop_words: HashSet<&'static str>,
    max_chunk_words: usize,
}

impl Default for ChunkEnricher {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkEnricher {
    pub fn new() -> Self {
        Self {
            stop_words: Self::create_stop_words(),
            max_chunk_words: 4,
        }
    }

    /// Runs of consecutive non-stop words. Punctuation and stop words end a run.
    pub fn chunks(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for token in tokens(text) {
            match token {
                Token::Word(word) if !self.stop_words.contains(word) => current.push(word),
                Token::Word(_) | Token::Break => self.flush_chunk(&mut current, &mut chunks),
                Token::Space => {}
            }
        }
        self.flush_chunk(&mut current, &mut chunks);

        chunks
    }

    /// Adjacent word pairs. Whitespace and line breaks join a pair,
    /// punctuation between two words does not.
    pub fn bigrams(&self, text: &str) -> Vec<String> {
        let mut bigrams = Vec::new();
        let mut previous: Option<&str> = None;

        for token in tokens(text) {
            match token {
                Token::Word(word) => {
                    if let Some(prev) = previous {
                        bigrams.push(format!("{} {}", prev, word));
                    }
                    previous = Some(word);
                }
                Token::Break => previous = None,
                Token::Space => {}
            }
        }

        bigrams
    }

    fn flush_chunk(&self, current: &mut Vec<&str>, chunks: &mut Vec<String>) {
        if !current.is_empty() && current.len() <= self.max_chunk_words {
            chunks.push(current.join(" "));
        }
        current.clear();
    }

    fn create_stop_words() -> HashSet<&'static str> {
        [
            "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "have", "had",
            "in", "is", "it", "its", "of", "on", "or", "that", "the", "to", "was", "were", "will",
            "with", "this", "these", "those", "i", "we", "you", "our", "my", "your", "their",
            "using", "used", "into", "over", "across", "also", "such", "including", "etc",
        ]
        .into_iter()
        .collect()
    }
}

impl LinguisticEnricher for ChunkEnricher {
    fn name(&self) -> &str {
        "chunk-bigram"
    }

    fn candidate_phrases(&self, text: &str) -> anyhow::Result<Vec<String>> {
        let mut phrases = self.chunks(text);
        phrases.extend(self.bigrams(text));
        Ok(phrases)
    }
}
