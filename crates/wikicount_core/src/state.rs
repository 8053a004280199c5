use crate::view_model::{ReportRowView, ReportView};
use crate::PrizeTier;

pub type ArticleIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    NotFound,
    HttpStatus(u16),
    Timeout,
    MalformedResponse,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleStatus {
    #[default]
    Pending,
    Counted(u32),
    Failed(FailureReason),
}

impl ArticleStatus {
    pub fn is_final(self) -> bool {
        matches!(self, ArticleStatus::Counted(_) | ArticleStatus::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRow {
    pub title: String,
    pub status: ArticleStatus,
}

/// Running totals over successfully fetched articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunTally {
    pub total_words: u64,
    pub successful_count: usize,
}

impl RunTally {
    pub(crate) fn record(&mut self, words: u32) {
        self.total_words += u64::from(words);
        self.successful_count += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunState {
    phase: RunPhase,
    articles: Vec<ArticleRow>,
    tally: RunTally,
    dirty: bool,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn tally(&self) -> RunTally {
        self.tally
    }

    pub fn articles(&self) -> &[ArticleRow] {
        &self.articles
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn failed_count(&self) -> usize {
        self.articles
            .iter()
            .filter(|row| matches!(row.status, ArticleStatus::Failed(_)))
            .count()
    }

    pub fn view(&self) -> ReportView {
        ReportView {
            tally: self.tally,
            failed_count: self.failed_count(),
            tier: PrizeTier::from_total(self.tally.total_words),
        }
    }

    pub fn row_view(&self, index: ArticleIndex) -> Option<ReportRowView> {
        let row = self.articles.get(index)?;
        let words = match row.status {
            ArticleStatus::Counted(words) => Some(words),
            ArticleStatus::Pending | ArticleStatus::Failed(_) => None,
        };
        Some(ReportRowView {
            position: index + 1,
            title: row.title.clone(),
            words,
        })
    }

    pub(crate) fn start_run(&mut self, titles: Vec<String>) {
        self.articles = titles
            .into_iter()
            .map(|title| ArticleRow {
                title,
                status: ArticleStatus::Pending,
            })
            .collect();
        self.tally = RunTally::default();
        self.phase = RunPhase::Running;
        self.dirty = true;
    }

    /// Sets a row's final status once; later outcomes for the same row are ignored.
    pub(crate) fn finalize(&mut self, index: ArticleIndex, status: ArticleStatus) -> bool {
        let Some(row) = self.articles.get_mut(index) else {
            return false;
        };
        if row.status.is_final() {
            return false;
        }
        row.status = status;
        if let ArticleStatus::Counted(words) = status {
            self.tally.record(words);
        }
        self.dirty = true;
        true
    }

    pub(crate) fn finish_run(&mut self) {
        self.phase = RunPhase::Finished;
        self.dirty = true;
    }
}
