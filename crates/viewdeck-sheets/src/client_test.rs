use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn test_client(base_url: &str) -> SheetsClient {
    SheetsClient::with_base_url(None, 30, 0, 0, base_url)
        .expect("client construction should not fail")
}

fn keyed_client(base_url: &str) -> SheetsClient {
    SheetsClient::with_base_url(Some("test-key"), 30, 0, 0, base_url)
        .expect("client construction should not fail")
}

#[test]
fn spreadsheet_url_includes_fields_filter() {
    let client = test_client("https://sheets.googleapis.com/v4");
    let url = client.spreadsheet_url("abc123");
    assert_eq!(
        url.as_str(),
        "https://sheets.googleapis.com/v4/spreadsheets/abc123?fields=sheets.properties"
    );
}

#[test]
fn spreadsheet_url_appends_api_key() {
    let client = keyed_client("https://sheets.googleapis.com/v4/");
    let url = client.spreadsheet_url("abc123");
    assert_eq!(
        url.as_str(),
        "https://sheets.googleapis.com/v4/spreadsheets/abc123?fields=sheets.properties&key=test-key"
    );
}

#[test]
fn values_url_encodes_tab_title() {
    let client = test_client("https://sheets.googleapis.com/v4");
    let url = client.values_url("abc123", "2024-01-01 final");
    assert_eq!(
        url.as_str(),
        "https://sheets.googleapis.com/v4/spreadsheets/abc123/values/2024-01-01%20final"
    );
}

#[test]
fn with_base_url_rejects_unparseable_url() {
    let result = SheetsClient::with_base_url(None, 30, 0, 0, "not a url");
    assert!(matches!(result, Err(SheetsError::InvalidBaseUrl { .. })));
}

#[tokio::test]
async fn list_sheets_parses_tab_properties() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/spreadsheets/sheet-1"))
        .and(query_param("fields", "sheets.properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sheets": [
                { "properties": { "title": "Summary", "sheetId": 0 } },
                { "properties": { "title": "2024-01-01", "sheetId": 1714 } }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let sheets = client.list_sheets("sheet-1").await.unwrap();
    assert_eq!(
        sheets,
        vec![
            SheetInfo {
                title: "Summary".to_owned(),
                gid: 0
            },
            SheetInfo {
                title: "2024-01-01".to_owned(),
                gid: 1714
            },
        ]
    );
}

#[tokio::test]
async fn fetch_values_returns_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/spreadsheets/sheet-1/values/2024-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "range": "'2024-01-01'!A1:D3",
            "values": [
                ["social_network", "channel_url", "total_videos", "total_views"],
                ["INSTAGRAM", "https://instagram.com/a", "3", "1200"]
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let rows = client.fetch_values("sheet-1", "2024-01-01").await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "INSTAGRAM");
}

#[tokio::test]
async fn fetch_values_empty_tab_yields_no_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/spreadsheets/sheet-1/values/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "range": "'notes'!A1:Z1000"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let rows = client.fetch_values("sheet-1", "notes").await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn missing_spreadsheet_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/spreadsheets/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.list_sheets("gone").await.unwrap_err();
    assert!(matches!(err, SheetsError::NotFound { .. }), "got: {err:?}");
}

#[tokio::test]
async fn rate_limited_surfaces_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/spreadsheets/busy"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.list_sheets("busy").await.unwrap_err();
    assert!(
        matches!(err, SheetsError::RateLimited { retry_after_secs: 7 }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn server_error_is_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/spreadsheets/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.list_sheets("broken").await.unwrap_err();
    assert!(
        matches!(err, SheetsError::UnexpectedStatus { status: 500, .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/spreadsheets/odd"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"sheets\": \"nope\"}"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.list_sheets("odd").await.unwrap_err();
    assert!(matches!(err, SheetsError::Deserialize { .. }), "got: {err:?}");
}
