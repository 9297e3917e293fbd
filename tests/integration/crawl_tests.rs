//! Integration tests for the crawler
//!
//! These tests use wiremock to serve listing pages and run the full
//! fetch, parse and write cycle end-to-end.

use serde_json::{json, Value};
use std::path::Path;
use tap_reviews::config::{Config, FailurePolicy};
use tap_reviews::crawler::{run_crawl, Coordinator};
use tap_reviews::output::{JsonPageWriter, MemoryOutput};
use tap_reviews::state::{CrawlState, StopReason};
use tap_reviews::TapError;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const APP_ID: u64 = 84458;

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str, out_dir: &Path, max_page: u32) -> Config {
    let mut config = Config::new(APP_ID);
    config.crawler.base_url = base_url.to_string();
    config.crawler.max_page = max_page;
    config.output.directory = out_dir.display().to_string();
    config
}

fn review(id: u64, width: u32, comments: &str) -> String {
    format!(
        r#"<li id="review-{id}">
          <div class="review-item-text">
            <div class="item-text-header">
              <span class="taptap-user"><a class="taptap-user-name">玩家{id}</a></span>
              <a class="text-header-time"><span data-dynamic-time="1514736000">2018/01/01</span></a>
            </div>
            <div class="item-text-score"><i class="colored" style="width:{width}px"></i></div>
            <div class="item-text-body">第{id}条评价</div>
            <div class="item-text-footer">
              <button data-value="funny"><span data-taptap-ajax-vote="count">0</span></button>
              <button data-value="up"><span data-taptap-ajax-vote="count">{id}</span></button>
              <button data-value="down"><span data-taptap-ajax-vote="count"></span></button>
            </div>
            {comments}
          </div>
        </li>"#
    )
}

fn broken_review(id: u64) -> String {
    format!(
        r#"<li id="review-{id}"><div class="review-item-text">
            <div class="item-text-body">no score here</div>
        </div></li>"#
    )
}

fn page(items: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><body><ul id="reviewsList">{}</ul></body></html>"#,
        items.concat()
    )
}

async fn mount_page(server: &MockServer, number: u32, html: String) {
    Mock::given(method("GET"))
        .and(path(format!("/app/{}/review", APP_ID)))
        .and(query_param("page", number.to_string()))
        .and(query_param("order", "default"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(html.into_bytes())
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_unrequested_page(server: &MockServer, number: u32) {
    Mock::given(method("GET"))
        .and(path(format!("/app/{}/review", APP_ID)))
        .and(query_param("page", number.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(&[])))
        .expect(0)
        .mount(server)
        .await;
}

fn read_page(dir: &Path, number: u32) -> Value {
    let text = std::fs::read_to_string(dir.join(format!("page-{}.json", number)))
        .expect("page file should exist");
    serde_json::from_str(&text).expect("page file should be valid JSON")
}

#[tokio::test]
async fn test_three_reviews_then_empty_page() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("out");

    mount_page(
        &server,
        1,
        page(&[review(1, 70, ""), review(2, 42, ""), review(3, 14, "")]),
    )
    .await;
    mount_page(&server, 2, page(&[])).await;
    mount_unrequested_page(&server, 3).await;

    let config = create_test_config(&server.uri(), &out_dir, 10);
    let summary = run_crawl(config).await.expect("crawl should succeed");

    assert_eq!(summary.pages_written, 1);
    assert_eq!(summary.records_written, 3);
    assert_eq!(summary.last_page, 2);
    assert_eq!(summary.stop_reason, Some(StopReason::EmptyPage { page: 2 }));

    let written = read_page(&out_dir, 1);
    let records = written.as_array().unwrap();
    assert_eq!(records.len(), 3);
    for record in records {
        assert_eq!(record["comments"], json!([]));
        assert_eq!(record["device"], Value::Null);
    }
    assert_eq!(records[0]["score"], json!(1.0));
    assert_eq!(records[1]["score"], json!(42.0 / 70.0));
    assert_eq!(records[2]["user"], "玩家3");
    assert_eq!(records[2]["vote"], json!({"funny": 0, "up": 3, "down": 0}));

    assert!(!out_dir.join("page-2.json").exists());

    let raw = std::fs::read_to_string(out_dir.join("page-1.json")).unwrap();
    assert!(raw.contains("第1条评价"));
    assert!(raw.starts_with("[\n    {\n        \"id\": 1,"));
}

#[tokio::test]
async fn test_review_with_full_and_placeholder_comments() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    let comments = r#"<div class="taptap-comments"><ul>
        <li id="comment-501">
          <div class="comment-item-text">
            <div class="item-text-header">
              <span class="taptap-user"><a class="taptap-user-name">路人</a></span>
            </div>
            <div class="item-text-body">说得对</div>
            <div class="item-text-footer">
              <span data-dynamic-time="1514736100">2018/01/01 00:01</span>
              <button data-value="up"><span data-taptap-ajax-vote="count">4</span></button>
              <button data-value="down"><span data-taptap-ajax-vote="count">1</span></button>
            </div>
          </div>
        </li>
        <li id="comment-502"></li>
    </ul></div>"#;

    mount_page(&server, 1, page(&[review(9, 70, comments)])).await;
    mount_page(&server, 2, page(&[])).await;

    let config = create_test_config(&server.uri(), temp.path(), 10);
    run_crawl(config).await.expect("crawl should succeed");

    let written = read_page(temp.path(), 1);
    let comments = written[0]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(
        comments[0],
        json!({
            "id": 501,
            "user": "路人",
            "time": "2018/01/01 00:01",
            "content": "说得对",
            "vote": {"up": 4, "down": 1}
        })
    );
    assert_eq!(comments[1], json!({"id": 502}));
}

#[tokio::test]
async fn test_empty_first_page_writes_nothing() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("out");

    mount_page(&server, 1, page(&[])).await;
    mount_unrequested_page(&server, 2).await;

    let config = create_test_config(&server.uri(), &out_dir, 10);
    let mut coordinator =
        Coordinator::new(config, JsonPageWriter::new(&out_dir)).expect("valid config");
    let summary = coordinator.run().await.expect("crawl should succeed");

    assert_eq!(
        coordinator.state(),
        CrawlState::Stopped(StopReason::EmptyPage { page: 1 })
    );
    assert_eq!(summary.pages_written, 0);
    assert!(!out_dir.exists());
}

#[tokio::test]
async fn test_collapsed_and_invalid_entries() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    let collapsed = r#"<li id="review-42">
        <button class="review-item-collapsed" data-taptap-dispute="dispute-42">该评价因违规已被折叠</button>
    </li>"#
        .to_string();
    let unknown = r#"<li><div class="promotion">ad</div></li>"#.to_string();

    mount_page(&server, 1, page(&[review(1, 70, ""), collapsed, unknown])).await;
    mount_page(&server, 2, page(&[])).await;

    let config = create_test_config(&server.uri(), temp.path(), 10);
    let summary = run_crawl(config).await.expect("crawl should succeed");
    assert_eq!(summary.placeholders_written, 2);

    let written = read_page(temp.path(), 1);
    assert_eq!(written[1], json!({"id": 42, "error": "该评价因违规已被折叠"}));
    assert_eq!(written[2], json!({"id": 0, "error": "invalid format"}));
}

#[tokio::test]
async fn test_collapsed_dispute_id_with_trailing_text() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    let collapsed = r#"<li>
        <button class="review-item-collapsed" data-taptap-dispute="dispute42abc">folded</button>
    </li>"#
        .to_string();

    mount_page(&server, 1, page(&[collapsed])).await;
    mount_page(&server, 2, page(&[])).await;

    let config = create_test_config(&server.uri(), temp.path(), 10);
    run_crawl(config).await.expect("crawl should succeed");

    assert_eq!(read_page(temp.path(), 1), json!([{"id": 42, "error": "folded"}]));
}

#[tokio::test]
async fn test_page_ceiling_stops_crawl() {
    let server = MockServer::start().await;

    mount_page(&server, 1, page(&[review(1, 70, "")])).await;
    mount_page(&server, 2, page(&[review(2, 70, "")])).await;
    mount_unrequested_page(&server, 3).await;

    let temp = TempDir::new().unwrap();
    let config = create_test_config(&server.uri(), temp.path(), 2);
    let mut coordinator = Coordinator::new(config, MemoryOutput::new()).expect("valid config");
    let summary = coordinator.run().await.expect("crawl should succeed");

    assert_eq!(summary.stop_reason, Some(StopReason::PageCeiling { max_page: 2 }));
    assert_eq!(summary.pages_written, 2);

    let output = coordinator.into_output();
    let pages: Vec<u32> = output.pages().iter().map(|(number, _)| *number).collect();
    assert_eq!(pages, vec![1, 2]);
}

#[tokio::test]
async fn test_fatal_page_stops_by_default() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    mount_page(&server, 1, page(&[review(1, 70, "")])).await;
    mount_page(&server, 2, page(&[review(2, 70, ""), broken_review(3)])).await;
    mount_unrequested_page(&server, 3).await;

    let config = create_test_config(&server.uri(), temp.path(), 10);
    let summary = run_crawl(config).await.expect("crawl should succeed");

    assert_eq!(summary.stop_reason, Some(StopReason::PageFailure { page: 2 }));
    assert!(temp.path().join("page-1.json").exists());
    assert!(!temp.path().join("page-2.json").exists());
}

#[tokio::test]
async fn test_non_numeric_vote_count_drops_the_page() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    let abbreviated = review(2, 70, "").replace(
        r#"<span data-taptap-ajax-vote="count">0</span>"#,
        r#"<span data-taptap-ajax-vote="count">1.2k</span>"#,
    );
    mount_page(&server, 1, page(&[review(1, 70, "")])).await;
    mount_page(&server, 2, page(&[abbreviated])).await;
    mount_unrequested_page(&server, 3).await;

    let config = create_test_config(&server.uri(), temp.path(), 10);
    let summary = run_crawl(config).await.expect("crawl should succeed");

    assert_eq!(summary.stop_reason, Some(StopReason::PageFailure { page: 2 }));
    assert_eq!(summary.pages_written, 1);
    assert!(!temp.path().join("page-2.json").exists());
}

#[tokio::test]
async fn test_fatal_page_is_skipped_with_skip_policy() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    mount_page(&server, 1, page(&[review(1, 70, "")])).await;
    mount_page(&server, 2, page(&[broken_review(2)])).await;
    mount_page(&server, 3, page(&[review(3, 70, "")])).await;
    mount_page(&server, 4, page(&[])).await;

    let mut config = create_test_config(&server.uri(), temp.path(), 10);
    config.crawler.on_page_failure = FailurePolicy::Skip;
    let summary = run_crawl(config).await.expect("crawl should succeed");

    assert_eq!(summary.pages_skipped, vec![2]);
    assert_eq!(summary.pages_written, 2);
    assert_eq!(summary.stop_reason, Some(StopReason::EmptyPage { page: 4 }));
    assert!(!temp.path().join("page-2.json").exists());
    assert_eq!(read_page(temp.path(), 3)[0]["id"], 3);
}

#[tokio::test]
async fn test_fatal_page_aborts_with_abort_policy() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    mount_page(&server, 1, page(&[broken_review(1)])).await;
    mount_unrequested_page(&server, 2).await;

    let mut config = create_test_config(&server.uri(), temp.path(), 10);
    config.crawler.on_page_failure = FailurePolicy::Abort;
    let result = run_crawl(config).await;

    assert!(matches!(result, Err(TapError::PageFailed { page: 1, .. })));
}

#[tokio::test]
async fn test_http_error_is_a_page_failure() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/app/{}/review", APP_ID)))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    mount_unrequested_page(&server, 2).await;

    let config = create_test_config(&server.uri(), temp.path(), 10);
    let summary = run_crawl(config).await.expect("crawl should succeed");

    assert_eq!(summary.stop_reason, Some(StopReason::PageFailure { page: 1 }));
    assert_eq!(summary.pages_written, 0);
}

#[tokio::test]
async fn test_recrawl_produces_identical_files() {
    let server = MockServer::start().await;
    let html = page(&[review(1, 21, ""), review(2, 70, "")]);

    Mock::given(method("GET"))
        .and(path(format!("/app/{}/review", APP_ID)))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/app/{}/review", APP_ID)))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page(&[])))
        .mount(&server)
        .await;

    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    run_crawl(create_test_config(&server.uri(), first.path(), 10))
        .await
        .unwrap();
    run_crawl(create_test_config(&server.uri(), second.path(), 10))
        .await
        .unwrap();

    let a = std::fs::read(first.path().join("page-1.json")).unwrap();
    let b = std::fs::read(second.path().join("page-1.json")).unwrap();
    assert_eq!(a, b);
}
