//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end over real HTTP.

use std::path::Path;
use tempfile::TempDir;
use url::Url;
use web_crawler::config::{CrawlOptions, Settings};
use web_crawler::crawler::{run_crawl, Coordinator, HttpFetcher};
use web_crawler::locale::LocaleSet;
use web_crawler::output::{open_sink, FileSink, MemorySink, Reporter};
use web_crawler::{CrawlError, CrawlPhase, OutputError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates settings whose locale list lives in `dir`
fn create_test_settings(dir: &Path, codes: &[&str]) -> Settings {
    std::fs::write(dir.join("locales.txt"), codes.join("\n")).expect("Failed to write locales");

    let mut settings = Settings::default();
    settings.locales.data_dir = dir.to_path_buf();
    settings.locales.files = vec!["locales.txt".to_string()];
    settings.fetch.timeout_secs = 5;
    settings
}

fn create_test_options(base_url: &str) -> CrawlOptions {
    CrawlOptions::new(Url::parse(base_url).expect("Failed to parse base URL"))
}

fn memory_reporter() -> (MemorySink, Reporter) {
    let sink = MemorySink::new();
    let reporter = Reporter::new(Box::new(sink.clone()));
    (sink, reporter)
}

async fn mount_page(server: &MockServer, page: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

/// Mounts a page that must never be requested
async fn mount_untouched(server: &MockServer, page: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(ResponseTemplate::new(200).set_body_string("unreachable"))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_single_host() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let data_dir = TempDir::new().unwrap();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><link href="/css/site.css" rel="stylesheet"></head><body>
        <a href="/page1">Page 1</a>
        <a href="/page2">Page 2</a>
        <img src="/img/logo.png">
        </body></html>"#,
    )
    .await;
    mount_page(
        &mock_server,
        "/page1",
        r#"<html><body><a href="/">Home</a><a href="/page2">Page 2</a></body></html>"#,
    )
    .await;
    mount_page(
        &mock_server,
        "/page2",
        r#"<html><body><img src="/img/logo.png"></body></html>"#,
    )
    .await;

    // Only the origin of the given URL is used as the crawl root
    let options = create_test_options(&format!("{}/page1", base_url));
    let settings = create_test_settings(data_dir.path(), &["en"]);
    let (sink, reporter) = memory_reporter();

    let summary = run_crawl(options, &settings, reporter)
        .await
        .expect("Crawl failed");

    assert_eq!(summary.visited, vec!["/", "/page1", "/page2"]);
    assert_eq!(summary.pages_fetched, 3);
    assert!(summary.dead_links.is_empty());
    assert!(summary.unvisited.is_empty());
    assert_eq!(summary.assets_seen, 2);
    assert_eq!(summary.phase, CrawlPhase::Done);

    let lines = sink.lines();
    assert_eq!(lines[0], format!("Crawling root URL: {}/page1", base_url));
    assert!(lines.contains(&format!("Crawling:\t1\t\t{}/", base_url)));
    assert!(lines.contains(&format!("Crawling:\t3\t\t{}/page2", base_url)));
    assert!(lines.contains(&"Dead links found:\t0".to_string()));
    assert_eq!(sink.progress_updates(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_dead_link_recorded_in_lenient_mode() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let data_dir = TempDir::new().unwrap();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/missing">Gone</a><a href="/after">After</a>"#,
    )
    .await;
    mount_page(&mock_server, "/after", "<p>still crawled</p>").await;

    let mut options = create_test_options(&base_url);
    options.verbose = true;
    let settings = create_test_settings(data_dir.path(), &["en"]);
    let (sink, reporter) = memory_reporter();

    let summary = run_crawl(options, &settings, reporter)
        .await
        .expect("Crawl failed");

    let missing = format!("{}/missing", base_url);
    assert_eq!(summary.dead_links, vec![missing.clone()]);
    assert_eq!(summary.visited, vec!["/", "/missing", "/after"]);

    let contents = sink.contents();
    assert!(contents.contains(&format!("[ERROR]\tCould not get content for {}", missing)));
    assert!(contents.contains("Response:\tHTTP 404"));
    assert!(contents.contains("Dead links found:\t1"));
    assert!(sink.lines().contains(&missing));
}

#[tokio::test]
async fn test_strict_mode_aborts_on_first_failure() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let data_dir = TempDir::new().unwrap();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/broken">Broken</a><a href="/after">After</a>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_untouched(&mock_server, "/after").await;

    let mut options = create_test_options(&base_url);
    options.strict = true;
    let settings = create_test_settings(data_dir.path(), &["en"]);
    let (sink, reporter) = memory_reporter();

    let result = run_crawl(options, &settings, reporter).await;

    match result {
        Err(CrawlError::FetchStatus { url, status }) => {
            assert_eq!(url, format!("{}/broken", base_url));
            assert_eq!(status, 500);
        }
        other => panic!("Expected FetchStatus error, got {:?}", other),
    }

    let contents = sink.contents();
    assert!(contents.contains("Response:\tHTTP 500"));
    assert!(contents.contains("[ERROR] web-crawler: Could not get content for"));
    assert!(!contents.contains("Dead links found"));
}

#[tokio::test]
async fn test_page_limit_stops_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let data_dir = TempDir::new().unwrap();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/a">A</a><a href="/b">B</a><a href="/c">C</a>"#,
    )
    .await;
    mount_page(&mock_server, "/a", "<p>a</p>").await;
    mount_untouched(&mock_server, "/b").await;
    mount_untouched(&mock_server, "/c").await;

    let mut options = create_test_options(&base_url);
    options.page_limit = Some(2);
    let settings = create_test_settings(data_dir.path(), &["en"]);
    let (_sink, reporter) = memory_reporter();

    let summary = run_crawl(options, &settings, reporter)
        .await
        .expect("Crawl failed");

    assert_eq!(summary.visited, vec!["/", "/a"]);
    assert_eq!(summary.unvisited, vec!["/b", "/c"]);
    assert!(summary.hit_page_limit());
}

#[tokio::test]
async fn test_localized_links_never_fetched() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let data_dir = TempDir::new().unwrap();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/about">About</a>
        <a href="/en/about">About (en)</a>
        <a href="/pt-BR/about">About (pt-BR)</a>
        <a href="/fr/">French home</a>"#,
    )
    .await;
    mount_page(&mock_server, "/about", "<p>about</p>").await;
    mount_untouched(&mock_server, "/en/about").await;
    mount_untouched(&mock_server, "/pt-BR/about").await;
    mount_untouched(&mock_server, "/fr/").await;

    let options = create_test_options(&base_url);
    let settings = create_test_settings(data_dir.path(), &["en", "fr", "pt-br"]);
    let (sink, reporter) = memory_reporter();

    let summary = run_crawl(options, &settings, reporter)
        .await
        .expect("Crawl failed");

    assert_eq!(summary.visited, vec!["/", "/about"]);
    assert!(sink.lines().contains(&"\tLinks found:\t\t4".to_string()));
    assert!(sink.lines().contains(&"\tNew links:\t\t1/4".to_string()));
}

#[tokio::test]
async fn test_report_written_to_out_file() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let data_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("report.txt");

    // Stale content must not survive the run
    std::fs::write(&out_path, "old report line\n".repeat(50)).unwrap();

    mount_page(&mock_server, "/", r#"<a href="/next">Next</a>"#).await;
    mount_page(&mock_server, "/next", "<p>done</p>").await;

    let mut options = create_test_options(&base_url);
    options.out = Some(out_path.clone());
    options.quiet = true;
    let settings = create_test_settings(data_dir.path(), &["en"]);

    let sink = open_sink(&options).expect("Failed to open out file");
    run_crawl(options, &settings, Reporter::new(sink))
        .await
        .expect("Crawl failed");

    let report = std::fs::read_to_string(&out_path).unwrap();
    assert!(report.starts_with(&format!("Crawling root URL: {}/", base_url)));
    assert!(report.contains(&format!("Crawling:\t2\t\t{}/next", base_url)));
    assert!(report.contains("Dead links found:\t0"));
    assert!(!report.contains("old report line"));
    assert!(!report.contains('\x1b'));
}

#[test]
fn test_locked_out_file_rejected() {
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("report.txt");

    let _held = FileSink::open(&out_path, true).expect("Failed to lock out file");

    let mut options = create_test_options("http://localhost/");
    options.out = Some(out_path);
    options.quiet = true;

    assert!(matches!(open_sink(&options), Err(OutputError::Locked(_))));
}

#[tokio::test]
async fn test_transport_failure_is_fatal() {
    // Reserve a port then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let data_dir = TempDir::new().unwrap();
    let options = create_test_options(&format!("http://127.0.0.1:{}/", port));
    let settings = create_test_settings(data_dir.path(), &["en"]);
    let (sink, reporter) = memory_reporter();

    let result = run_crawl(options, &settings, reporter).await;

    assert!(matches!(result, Err(CrawlError::Transport { .. })));
    assert!(sink.contents().contains("[ERROR] web-crawler: Request to"));
}

#[tokio::test]
async fn test_missing_locale_file_fails_before_fetching() {
    let mock_server = MockServer::start().await;
    mount_untouched(&mock_server, "/").await;

    let data_dir = TempDir::new().unwrap();
    let mut settings = Settings::default();
    settings.locales.data_dir = data_dir.path().to_path_buf();

    let (sink, reporter) = memory_reporter();
    let result = run_crawl(create_test_options(&mock_server.uri()), &settings, reporter).await;

    let err = result.expect_err("Crawl should fail without locale files");
    assert!(err.is_startup_error());
    assert!(sink.contents().starts_with("[ERROR] web-crawler:"));
}

#[tokio::test]
async fn test_concurrent_crawl_visits_same_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let data_dir = TempDir::new().unwrap();

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/a">A</a><a href="/b">B</a><a href="/c">C</a><a href="/en/a">A (en)</a>"#,
    )
    .await;
    mount_page(&mock_server, "/a", r#"<a href="/d">D</a>"#).await;
    mount_page(&mock_server, "/b", r#"<a href="/d">D</a><a href="/a">A</a>"#).await;
    mount_page(&mock_server, "/c", "<p>c</p>").await;
    mount_page(&mock_server, "/d", r#"<a href="/">Home</a>"#).await;

    let mut settings = create_test_settings(data_dir.path(), &["en"]);
    settings.fetch.concurrency = 4;
    let (_sink, reporter) = memory_reporter();

    let summary = run_crawl(create_test_options(&base_url), &settings, reporter)
        .await
        .expect("Crawl failed");

    let mut visited = summary.visited.clone();
    visited.sort();
    assert_eq!(visited, vec!["/", "/a", "/b", "/c", "/d"]);
    assert_eq!(summary.pages_fetched, 5);
}

#[tokio::test]
async fn test_coordinator_with_http_fetcher() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", r#"<a href="/de/start">Start</a>"#).await;
    mount_page(&mock_server, "/de/start", "<p>not localized here</p>").await;

    let fetcher = HttpFetcher::from_settings(&Settings::default().fetch).unwrap();
    let (_sink, reporter) = memory_reporter();
    let mut coordinator = Coordinator::new(
        create_test_options(&base_url),
        LocaleSet::from_codes(["fr"]),
        fetcher,
        reporter,
    );

    let summary = coordinator.run().await.expect("Crawl failed");

    assert_eq!(summary.visited, vec!["/", "/de/start"]);
    assert!(coordinator.session().is_consistent());
    assert_eq!(coordinator.session().phase(), CrawlPhase::Done);
}
