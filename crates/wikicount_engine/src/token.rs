use crate::wikitext::WikitextCleaner;

pub trait WordCounter: Send + Sync {
    fn count(&self, text: &str) -> u32;
}

/// Counts whitespace-delimited tokens; no markup awareness.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceWordCounter;

impl WordCounter for WhitespaceWordCounter {
    fn count(&self, text: &str) -> u32 {
        let words = text
            .split_whitespace()
            .filter(|word| !word.trim().is_empty())
            .count();
        u32::try_from(words).unwrap_or(u32::MAX)
    }
}

/// Strips wikitext markup with [`WikitextCleaner`], then counts what remains.
#[derive(Debug, Default, Clone, Copy)]
pub struct WikitextWordCounter {
    cleaner: WikitextCleaner,
}

impl WikitextWordCounter {
    pub fn new(cleaner: WikitextCleaner) -> Self {
        Self { cleaner }
    }
}

impl WordCounter for WikitextWordCounter {
    fn count(&self, text: &str) -> u32 {
        WhitespaceWordCounter.count(&self.cleaner.clean(text))
    }
}
