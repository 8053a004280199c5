use std::fmt;

/// Zero-based position of an article in the run's title list.
pub type ArticleIndex = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ArticleStarted {
        index: ArticleIndex,
        title: String,
    },
    ArticleCompleted {
        index: ArticleIndex,
        title: String,
        result: Result<u32, FetchError>,
    },
    RunFinished {
        processed: usize,
    },
}

/// Raw wikitext of the latest revision of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent {
    pub page_id: String,
    pub wikitext: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The API reported the page as missing (page id `-1`).
    NotFound,
    HttpStatus(u16),
    Timeout,
    /// The response body was not valid JSON.
    Parse,
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::NotFound => write!(f, "not found"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Parse => write!(f, "malformed json"),
            FailureKind::Other => write!(f, "error"),
        }
    }
}
