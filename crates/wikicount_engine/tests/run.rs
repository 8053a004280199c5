use std::sync::{mpsc, Arc, Mutex};
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use wikicount_engine::{
    run_articles, ChannelProgressSink, EngineConfig, EngineEvent, EngineHandle, FailureKind,
    FetchSettings, MediaWikiFetcher, ProgressSink, WikitextWordCounter,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_PATH: &str = "/w/api.php";

#[derive(Default)]
struct TestSink {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl TestSink {
    fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

async fn mount_title(server: &MockServer, title: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("titles", title))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

async fn mock_wiki() -> MockServer {
    let server = MockServer::start().await;
    mount_title(
        &server,
        "Found",
        ResponseTemplate::new(200).set_body_string(
            r#"{"query":{"pages":{"123":{"revisions":[{"*":"Hello [[World]]!"}]}}}}"#,
        ),
    )
    .await;
    mount_title(
        &server,
        "Missing",
        ResponseTemplate::new(200).set_body_string(r#"{"query":{"pages":{"-1":{"missing":""}}}}"#),
    )
    .await;
    mount_title(&server, "Limited", ResponseTemplate::new(429)).await;
    server
}

fn settings_for(server: &MockServer) -> FetchSettings {
    FetchSettings {
        endpoint: format!("{}{}", server.uri(), API_PATH),
        ..FetchSettings::default()
    }
}

fn titles() -> Vec<String> {
    ["Found", "Missing", "Limited"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn completed_results(events: &[EngineEvent]) -> Vec<Result<u32, FailureKind>> {
    events
        .iter()
        .filter_map(|event| match event {
            EngineEvent::ArticleCompleted { result, .. } => {
                Some(result.clone().map_err(|err| err.kind))
            }
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn run_visits_titles_in_order_and_survives_failures() {
    wikicount_logging::initialize_for_tests();
    let server = mock_wiki().await;
    let fetcher = MediaWikiFetcher::new(settings_for(&server)).expect("client builds");
    let sink = TestSink::default();

    run_articles(
        &fetcher,
        &WikitextWordCounter::default(),
        &titles(),
        Duration::ZERO,
        &sink,
    )
    .await;

    let events = sink.take();
    assert_eq!(events.len(), 2 * 3 + 1);
    assert_eq!(
        events[0],
        EngineEvent::ArticleStarted {
            index: 0,
            title: "Found".to_string(),
        }
    );
    assert_eq!(
        completed_results(&events),
        vec![
            Ok(2),
            Err(FailureKind::NotFound),
            Err(FailureKind::HttpStatus(429)),
        ]
    );
    assert_eq!(
        events.last(),
        Some(&EngineEvent::RunFinished { processed: 3 })
    );
}

#[tokio::test]
async fn run_pauses_after_every_article() {
    let server = mock_wiki().await;
    let fetcher = MediaWikiFetcher::new(settings_for(&server)).expect("client builds");
    let (tx, rx) = mpsc::channel();
    let sink = ChannelProgressSink::new(tx);

    let started = Instant::now();
    run_articles(
        &fetcher,
        &WikitextWordCounter::default(),
        &titles(),
        Duration::from_millis(40),
        &sink,
    )
    .await;

    assert!(started.elapsed() >= Duration::from_millis(120));
    let finished = rx
        .try_iter()
        .filter(|event| matches!(event, EngineEvent::RunFinished { .. }))
        .count();
    assert_eq!(finished, 1);
}

#[test]
fn engine_handle_streams_events_until_run_ends() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(mock_wiki());

    let config = EngineConfig {
        fetch: settings_for(&server),
        delay: Duration::ZERO,
    };
    let handle = EngineHandle::start(config, titles()).expect("engine starts");

    let mut events = Vec::new();
    while let Some(event) = handle.recv() {
        events.push(event);
    }

    assert_eq!(
        completed_results(&events),
        vec![
            Ok(2),
            Err(FailureKind::NotFound),
            Err(FailureKind::HttpStatus(429)),
        ]
    );
    assert!(matches!(
        events.last(),
        Some(EngineEvent::RunFinished { processed: 3 })
    ));
}
