//! Wikicount engine: MediaWiki fetching, wikitext cleanup and the article run loop.
mod engine;
mod fetch;
mod token;
mod types;
mod wikitext;

pub use engine::{
    run_articles, ChannelProgressSink, EngineConfig, EngineError, EngineHandle, ProgressSink,
};
pub use fetch::{
    article_query_url, FetchSettings, Fetcher, MediaWikiFetcher, DEFAULT_ENDPOINT,
    DEFAULT_USER_AGENT,
};
pub use token::{WhitespaceWordCounter, WikitextWordCounter, WordCounter};
pub use types::{ArticleContent, ArticleIndex, EngineEvent, FailureKind, FetchError};
pub use wikitext::{CleanupRule, WikitextCleaner};

/// Counts the words of raw wikitext after the standard markup cleanup.
pub fn count_words(wikitext: &str) -> u32 {
    WikitextWordCounter::default().count(wikitext)
}
