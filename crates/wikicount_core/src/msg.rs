#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A run over the given titles, in order, is about to begin.
    RunStarted { titles: Vec<String> },
    /// The article was fetched and its words counted.
    ArticleCounted {
        index: crate::ArticleIndex,
        words: u32,
    },
    /// The article could not be fetched.
    ArticleFailed {
        index: crate::ArticleIndex,
        reason: crate::FailureReason,
    },
    /// Every article has been processed.
    RunFinished,
    /// Fallback for placeholder wiring.
    NoOp,
}
