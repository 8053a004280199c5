use std::io::{self, Write};

use chrono::Utc;
use wikicount_core::{update, Effect, FailureReason, Msg, RunState, RunTally};
use wikicount_engine::{EngineEvent, EngineHandle, FailureKind, FetchError};
use wikicount_logging::{wc_info, wc_warn};

use crate::config::AppConfig;
use crate::report;

/// Feeds run messages through the core state machine and prints what it asks for.
pub struct ReportRunner<W: Write> {
    out: W,
    state: RunState,
    report_title: String,
    started_at: String,
}

impl<W: Write> ReportRunner<W> {
    pub fn new(out: W, report_title: impl Into<String>, started_at: impl Into<String>) -> Self {
        Self {
            out,
            state: RunState::new(),
            report_title: report_title.into(),
            started_at: started_at.into(),
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn handle_event(&mut self, event: EngineEvent) -> io::Result<()> {
        let msg = match event {
            EngineEvent::ArticleStarted { index, title } => {
                wc_info!("[{}] fetching {}", index + 1, title);
                return Ok(());
            }
            EngineEvent::ArticleCompleted {
                index,
                result: Ok(words),
                ..
            } => Msg::ArticleCounted { index, words },
            EngineEvent::ArticleCompleted {
                index,
                title,
                result: Err(err),
            } => {
                log_failure(&title, &err);
                Msg::ArticleFailed {
                    index,
                    reason: map_failure(err.kind),
                }
            }
            EngineEvent::RunFinished { processed } => {
                wc_info!("Run finished after {} articles", processed);
                Msg::RunFinished
            }
        };
        self.dispatch(msg)
    }

    pub fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        for effect in effects {
            self.execute(effect)?;
        }
        if self.state.is_dirty() {
            self.out.flush()?;
            self.state.clear_dirty();
        }
        Ok(())
    }

    fn execute(&mut self, effect: Effect) -> io::Result<()> {
        match effect {
            Effect::RenderHeader => writeln!(
                self.out,
                "{}",
                report::render_header(&self.report_title, &self.started_at)
            ),
            Effect::RenderRow { index } => match self.state.row_view(index) {
                Some(row) => writeln!(self.out, "{}", report::render_row(&row)),
                None => Ok(()),
            },
            Effect::RenderSummary => {
                writeln!(self.out, "{}", report::render_summary(&self.state.view()))
            }
        }
    }
}

fn log_failure(title: &str, err: &FetchError) {
    match err.kind {
        FailureKind::NotFound => wc_warn!("Article not found: {}", title),
        FailureKind::HttpStatus(code) => wc_warn!("HTTP {} for {}", code, title),
        FailureKind::Timeout => wc_warn!("Timeout for {}", title),
        FailureKind::Parse => wc_warn!("JSON error for {}: {}", title, err.message),
        FailureKind::Other => wc_warn!("Error for {}: {}", title, err.message),
    }
}

fn map_failure(kind: FailureKind) -> FailureReason {
    match kind {
        FailureKind::NotFound => FailureReason::NotFound,
        FailureKind::HttpStatus(code) => FailureReason::HttpStatus(code),
        FailureKind::Timeout => FailureReason::Timeout,
        FailureKind::Parse => FailureReason::MalformedResponse,
        FailureKind::Other => FailureReason::Other,
    }
}

/// Runs every configured article and prints the report to stdout.
pub fn run(config: &AppConfig) -> anyhow::Result<RunTally> {
    let titles = config.titles();
    let engine = EngineHandle::start(config.engine_config(), titles.clone())?;

    let started_at = Utc::now().to_rfc3339();
    let mut runner = ReportRunner::new(io::stdout().lock(), &config.report_title, started_at);
    runner.dispatch(Msg::RunStarted { titles })?;

    while let Some(event) = engine.recv() {
        runner.handle_event(event)?;
    }

    Ok(runner.state().tally())
}
