use crate::{PrizeTier, RunTally};

/// Summary figures for the end-of-run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub tally: RunTally,
    pub failed_count: usize,
    pub tier: PrizeTier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRowView {
    /// 1-based position in the article list.
    pub position: usize,
    pub title: String,
    /// `None` renders as an error cell.
    pub words: Option<u32>,
}
