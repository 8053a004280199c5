use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use wikicount_logging::{wc_debug, wc_info};

use crate::fetch::{FetchSettings, Fetcher, MediaWikiFetcher};
use crate::token::{WikitextWordCounter, WordCounter};
use crate::{EngineEvent, FetchError};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    /// Pause after every article, successful or not.
    pub delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetch: FetchSettings::default(),
            delay: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Fetches and counts each title in order, one request at a time.
///
/// Failures are reported through the sink and never stop the run.
pub async fn run_articles(
    fetcher: &dyn Fetcher,
    counter: &dyn WordCounter,
    titles: &[String],
    delay: Duration,
    sink: &dyn ProgressSink,
) {
    for (index, title) in titles.iter().enumerate() {
        sink.emit(EngineEvent::ArticleStarted {
            index,
            title: title.clone(),
        });

        let result = fetcher.fetch(title).await.map(|content| {
            let words = counter.count(&content.wikitext);
            wc_debug!(
                "{:?} (page {}) has {} words",
                title,
                content.page_id,
                words
            );
            words
        });

        sink.emit(EngineEvent::ArticleCompleted {
            index,
            title: title.clone(),
            result,
        });

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    sink.emit(EngineEvent::RunFinished {
        processed: titles.len(),
    });
}

/// Runs a whole article list on a background thread and streams its events.
pub struct EngineHandle {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn start(config: EngineConfig, titles: Vec<String>) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let fetcher = {
            let _guard = runtime.enter();
            MediaWikiFetcher::new(config.fetch)?
        };
        let delay = config.delay;
        let (event_tx, event_rx) = mpsc::channel();

        wc_info!(
            "Starting run over {} articles against {}",
            titles.len(),
            fetcher.settings().endpoint
        );

        thread::spawn(move || {
            let sink = ChannelProgressSink::new(event_tx);
            let counter = WikitextWordCounter::default();
            runtime.block_on(run_articles(&fetcher, &counter, &titles, delay, &sink));
        });

        Ok(Self { event_rx })
    }

    /// Blocks until the next event; `None` once the run is over.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}
