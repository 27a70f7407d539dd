//! End-to-end flows through the page controller with an in-memory backend.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use shortlink_core::{
    ApiStatus, Clipboard, Error, GENERIC_FAILURE, HealthReport, LIST_NETWORK_FAILURE, ListDisplay,
    ListView,
    Notice, NoticeKind, Notifier, PageController, PageView, Result, ShortenRequest,
    SubmissionState, UrlApi, UrlRecord, decode_response,
};

/// Ordered log of everything that happened, shared by the fakes.
type EventLog = Rc<RefCell<Vec<String>>>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("shortlink_core=debug")
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
struct ScriptedApi {
    log: EventLog,
    list_responses: RefCell<VecDeque<Result<Vec<UrlRecord>>>>,
    shorten_responses: RefCell<VecDeque<Result<UrlRecord>>>,
    shorten_requests: RefCell<Vec<ShortenRequest>>,
}

impl ScriptedApi {
    fn new(log: EventLog) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    fn push_list(&self, response: Result<Vec<UrlRecord>>) {
        self.list_responses.borrow_mut().push_back(response);
    }

    fn push_shorten(&self, response: Result<UrlRecord>) {
        self.shorten_responses.borrow_mut().push_back(response);
    }

    fn list_calls(&self) -> usize {
        self.log.borrow().iter().filter(|e| *e == "api:list").count()
    }
}

impl UrlApi for ScriptedApi {
    async fn list_urls(&self) -> Result<Vec<UrlRecord>> {
        self.log.borrow_mut().push("api:list".to_string());
        self.list_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![]))
    }

    async fn shorten(&self, request: &ShortenRequest) -> Result<UrlRecord> {
        self.log.borrow_mut().push("api:shorten".to_string());
        self.shorten_requests.borrow_mut().push(request.clone());
        self.shorten_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Transport("no scripted response".to_string())))
    }

    async fn health(&self) -> Result<HealthReport> {
        self.log.borrow_mut().push("api:health".to_string());
        decode_response(200, "OK", r#"{"status":"ok","message":"URL Shortener API is running"}"#)
    }
}

struct UnusedClipboard;

impl Clipboard for UnusedClipboard {
    fn copy_text(&self, _text: &str) -> Result<()> {
        panic!("clipboard should not be touched in this flow");
    }
}

#[derive(Default)]
struct RecordingView {
    log: EventLog,
    list: RefCell<Option<ListView>>,
    list_failed: RefCell<bool>,
    submissions: RefCell<Vec<SubmissionState>>,
    notices: RefCell<Vec<Notice>>,
    status: RefCell<ApiStatus>,
}

impl RecordingView {
    fn new(log: EventLog) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    fn list_display(&self) -> ListDisplay {
        ListDisplay::select(self.list.borrow().clone(), *self.list_failed.borrow())
    }
}

impl Notifier for RecordingView {
    fn notify(&self, notice: Notice) {
        self.log.borrow_mut().push("view:notify".to_string());
        self.notices.borrow_mut().push(notice);
    }
}

impl PageView for RecordingView {
    fn render_list(&self, view: ListView) {
        self.log.borrow_mut().push("view:list".to_string());
        *self.list.borrow_mut() = Some(view);
        *self.list_failed.borrow_mut() = false;
    }

    fn render_list_failure(&self) {
        self.log.borrow_mut().push("view:list-failed".to_string());
        *self.list_failed.borrow_mut() = true;
    }

    fn render_submission(&self, state: SubmissionState) {
        let tag = match &state {
            SubmissionState::Idle => "view:idle",
            SubmissionState::InFlight => "view:in-flight",
            SubmissionState::Success(_) => "view:success",
            SubmissionState::Failure(_) => "view:failure",
        };
        self.log.borrow_mut().push(tag.to_string());
        self.submissions.borrow_mut().push(state);
    }

    fn render_api_status(&self, status: ApiStatus) {
        *self.status.borrow_mut() = status;
    }
}

fn controller() -> (
    PageController<ScriptedApi, UnusedClipboard, RecordingView>,
    EventLog,
) {
    init_tracing();
    let log = EventLog::default();
    let controller = PageController::new(
        ScriptedApi::new(Rc::clone(&log)),
        UnusedClipboard,
        RecordingView::new(Rc::clone(&log)),
    );
    (controller, log)
}

fn bad_request(message: &str) -> Error {
    Error::Status {
        status: 400,
        status_text: "Bad Request".to_string(),
        message: Some(message.to_string()),
    }
}

#[tokio::test]
async fn empty_collection_renders_placeholder() {
    let (controller, _log) = controller();
    controller.api().push_list(Ok(vec![]));

    assert!(controller.refresh_list().await);

    let list = controller.view().list.borrow().clone().expect("list rendered");
    assert!(list.is_placeholder());
    assert!(list.entries().is_empty());
}

#[tokio::test]
async fn n_records_render_n_entries_with_exact_urls() {
    let (controller, _log) = controller();
    let records = vec![
        UrlRecord::new("https://example.com/one", "https://short.ly/1"),
        UrlRecord::new("https://example.com/two?a=1&b=<2>", "https://short.ly/2"),
        UrlRecord::new("https://example.com/three#frag", "https://short.ly/3"),
    ];
    controller.api().push_list(Ok(records.clone()));

    controller.refresh_list().await;

    let list = controller.view().list.borrow().clone().expect("list rendered");
    assert_eq!(list.len(), 3);
    for (entry, record) in list.entries().iter().zip(&records) {
        assert_eq!(entry.original.text, record.original_url);
        assert_eq!(entry.original.href.as_deref(), Some(record.original_url.as_str()));
        assert_eq!(entry.short.text, record.short_url);
        assert_eq!(entry.short.href.as_deref(), Some(record.short_url.as_str()));
        assert_eq!(entry.copy_text, record.short_url);
    }
}

#[tokio::test]
async fn list_failure_keeps_previous_list_and_notifies() {
    let (controller, _log) = controller();
    controller
        .api()
        .push_list(Ok(vec![UrlRecord::new("https://a.example", "https://s.ly/a")]));
    controller.api().push_list(Err(Error::Status {
        status: 500,
        status_text: "Internal Server Error".to_string(),
        message: Some("storage unavailable".to_string()),
    }));

    assert!(controller.refresh_list().await);
    assert!(!controller.refresh_list().await);

    let list = controller.view().list.borrow().clone().expect("list rendered");
    assert_eq!(list.len(), 1);
    let notices = controller.view().notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert_eq!(notices[0].message, "Error fetching URLs: storage unavailable");
}

#[tokio::test]
async fn list_network_failure_uses_connection_message() {
    let (controller, _log) = controller();
    controller
        .api()
        .push_list(Err(Error::Transport("TypeError: Failed to fetch".to_string())));

    assert!(!controller.refresh_list().await);

    assert!(controller.view().list.borrow().is_none());
    assert_eq!(
        controller.view().notices.borrow()[0].message,
        LIST_NETWORK_FAILURE
    );
}

#[tokio::test]
async fn failed_first_load_shows_list_as_unavailable() {
    let (controller, log) = controller();
    assert_eq!(controller.view().list_display(), ListDisplay::Loading);

    controller
        .api()
        .push_list(Err(Error::Transport("TypeError: Failed to fetch".to_string())));
    assert!(!controller.refresh_list().await);

    assert_eq!(controller.view().list_display(), ListDisplay::Unavailable);
    assert_eq!(
        *log.borrow(),
        vec!["api:list", "view:notify", "view:list-failed"]
    );

    controller.api().push_list(Ok(vec![]));
    assert!(controller.refresh_list().await);
    assert_eq!(
        controller.view().list_display(),
        ListDisplay::Ready(ListView::Placeholder)
    );
}

#[tokio::test]
async fn successful_shorten_renders_result_then_refreshes_once() {
    let (controller, log) = controller();
    controller.api().push_shorten(Ok(UrlRecord::new(
        "https://example.com",
        "https://short.ly/abc",
    )));
    controller.api().push_list(Ok(vec![UrlRecord::new(
        "https://example.com",
        "https://short.ly/abc",
    )]));

    let state = controller.submit_shorten("https://example.com").await;

    let result = state.result().expect("success state");
    assert_eq!(result.original.href.as_deref(), Some("https://example.com"));
    assert_eq!(result.short.href.as_deref(), Some("https://short.ly/abc"));
    assert_eq!(controller.api().list_calls(), 1);
    assert_eq!(
        *controller.api().shorten_requests.borrow(),
        vec![ShortenRequest::new("https://example.com")]
    );
    assert_eq!(
        *log.borrow(),
        vec![
            "view:in-flight",
            "api:shorten",
            "view:success",
            "api:list",
            "view:list",
        ]
    );
}

#[tokio::test]
async fn rejected_shorten_shows_server_error_without_refresh() {
    let (controller, log) = controller();
    controller.api().push_shorten(Err(bad_request("invalid url")));

    let state = controller.submit_shorten("not a url").await;

    let message = state.failure_message().expect("failure state");
    assert!(message.contains("invalid url"));
    assert_eq!(controller.api().list_calls(), 0);
    assert_eq!(
        *log.borrow(),
        vec!["view:in-flight", "api:shorten", "view:failure"]
    );
}

#[tokio::test]
async fn shorten_transport_failure_asks_to_try_again() {
    let (controller, _log) = controller();
    controller
        .api()
        .push_shorten(Err(Error::Transport("connection reset".to_string())));

    let state = controller.submit_shorten("https://example.com").await;

    assert_eq!(state, SubmissionState::Failure(GENERIC_FAILURE.to_string()));
    assert!(GENERIC_FAILURE.contains("try again"));
    assert_eq!(controller.api().list_calls(), 0);
}

#[tokio::test]
async fn input_is_sent_unmodified() {
    let (controller, _log) = controller();
    controller.api().push_shorten(Err(bad_request("No URL provided")));

    let state = controller.submit_shorten("  ").await;

    assert_eq!(controller.api().shorten_requests.borrow()[0].original_url, "  ");
    assert_eq!(state.failure_message(), Some("Error: No URL provided"));
}

#[tokio::test]
async fn every_submission_renders_exactly_one_terminal_state() {
    let (controller, _log) = controller();
    controller.api().push_shorten(Err(bad_request("invalid url")));
    controller
        .api()
        .push_shorten(Ok(UrlRecord::new("https://b.example", "https://s.ly/b")));

    controller.submit_shorten("x").await;
    controller.submit_shorten("https://b.example").await;

    let submissions = controller.view().submissions.borrow();
    let terminal = submissions.iter().filter(|s| s.is_terminal()).count();
    let in_flight = submissions.iter().filter(|s| s.is_in_flight()).count();
    assert_eq!(terminal, 2);
    assert_eq!(in_flight, 2);
}

#[tokio::test]
async fn health_probe_marks_api_online() {
    let (controller, _log) = controller();

    let status = controller.check_health().await;

    assert_eq!(
        status,
        ApiStatus::Online(Some("URL Shortener API is running".to_string()))
    );
    assert_eq!(*controller.view().status.borrow(), status);
}
