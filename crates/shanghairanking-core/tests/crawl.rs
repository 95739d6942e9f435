//! Integration tests for the crawl cycle
//!
//! These tests use wiremock to stand in for the ranking site and drive the
//! fetch-retry loop and the full pagination crawl end-to-end.

use shanghairanking_core::{
    ClientConfig, RankingClient, RankingScraper, ScrapeError, ScraperConfig,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE_ONE: &str = r#"<html><body>
<div class="pagination">
    <a class="page-link">1</a>
    <a class="page-link">2</a>
    <a class="page-link">next</a>
</div>
<table class="rk-table">
    <thead><tr><th>排名</th><th>学校名称</th><th>省份</th><th>总分</th></tr></thead>
    <tbody>
        <tr><td>1</td><td>A大学</td><td>北京</td><td>100.0</td></tr>
        <tr><td>2</td><td>B大学</td></tr>
        <tr><td>3</td><td>C大学</td><td>上海</td><td>98.2</td></tr>
    </tbody>
</table>
</body></html>"#;

const PAGE_TWO: &str = r#"<html><body>
<table class="rk-table">
    <tbody>
        <tr><td>4</td><td>D大学</td><td>江苏</td><td>97.1</td></tr>
        <tr><td>5</td><td>E大学</td><td>广东</td><td>96.8</td></tr>
    </tbody>
</table>
</body></html>"#;

fn fast_client_config() -> ClientConfig {
    ClientConfig {
        delay_min_ms: 0,
        delay_max_ms: 0,
        timeout_secs: 5,
        max_attempts: 3,
    }
}

fn scraper_for(server: &MockServer) -> RankingScraper {
    RankingScraper::with_config(ScraperConfig {
        base_url: format!("{}/rankings", server.uri()),
        client: fast_client_config(),
    })
    .expect("scraper should build")
}

#[tokio::test]
async fn crawl_two_pages_in_order_dropping_short_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rankings"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PAGE_ONE, "text/html; charset=utf-8"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rankings"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PAGE_TWO, "text/html; charset=utf-8"))
        .mount(&server)
        .await;
    // Page-count discovery hits the bare URL, no page parameter
    Mock::given(method("GET"))
        .and(path("/rankings"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PAGE_ONE, "text/html; charset=utf-8"))
        .mount(&server)
        .await;

    let entries = scraper_for(&server).crawl().await;

    // Page 1 loses its two-cell row; page 2 contributes both rows
    assert_eq!(entries.len(), 4);
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["A大学", "C大学", "D大学", "E大学"]);
    let ranks: Vec<&str> = entries.iter().map(|e| e.rank.as_str()).collect();
    assert_eq!(ranks, vec!["1", "3", "4", "5"]);
    assert_eq!(entries[0].province, "北京");
    assert_eq!(entries[3].score, "96.8");
}

#[tokio::test]
async fn crawl_skips_page_without_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rankings"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>maintenance</p></body></html>"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rankings"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PAGE_ONE, "text/html; charset=utf-8"))
        .mount(&server)
        .await;

    let entries = scraper_for(&server).crawl().await;

    // Only page 1 contributes; page 2 parses to nothing but the crawl finishes
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].name, "C大学");
}

#[tokio::test]
async fn crawl_completes_empty_when_every_fetch_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // Discovery fails, the assumed single page fails too; no abort either way
    let entries = scraper_for(&server).crawl().await;
    assert!(entries.is_empty());
}

#[tokio::test]
async fn fetch_retries_until_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let client = RankingClient::with_config(fast_client_config()).expect("client should build");
    let body = client
        .fetch(&format!("{}/flaky", server.uri()))
        .await
        .expect("third attempt should succeed");
    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn fetch_gives_up_after_all_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let client = RankingClient::with_config(fast_client_config()).expect("client should build");
    let err = client
        .fetch(&format!("{}/down", server.uri()))
        .await
        .expect_err("all attempts should fail");

    match err {
        ScrapeError::RetriesExhausted { attempts, .. } => assert_eq!(attempts, 3),
        other => panic!("expected RetriesExhausted, got {}", other),
    }
    // The mock's expect(3) is verified when the server drops
}

#[tokio::test]
async fn fetch_decodes_server_declared_charset() {
    let server = MockServer::start().await;

    // "大学" encoded as GBK
    let body: Vec<u8> = b"<html><body><p>\xb4\xf3\xd1\xa7</p></body></html>".to_vec();
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=gbk"))
        .mount(&server)
        .await;

    let client = RankingClient::with_config(fast_client_config()).expect("client should build");
    let html = client.fetch(&server.uri()).await.expect("fetch should succeed");
    assert!(html.contains("大学"));
}
