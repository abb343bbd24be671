//! End-to-end exercise of the metrics pipeline against a mock
//! spreadsheet API: list tabs, filter date labels, fetch values,
//! normalize rows, aggregate, and compute deltas.

use viewdeck_core::{Platform, ProjectSeries};
use viewdeck_sheets::{parse_channels, partition_date_tabs, SheetsClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn values_body(rows: &[[&str; 4]]) -> serde_json::Value {
    let values: Vec<Vec<&str>> = rows.iter().map(|r| r.to_vec()).collect();
    serde_json::json!({ "values": values })
}

#[tokio::test]
async fn collects_two_day_series_with_deltas() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spreadsheets/sheet-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sheets": [
                { "properties": { "title": "Summary", "sheetId": 0 } },
                { "properties": { "title": "2024-01-02", "sheetId": 2 } },
                { "properties": { "title": "notes", "sheetId": 3 } },
                { "properties": { "title": "2024-01-01", "sheetId": 1 } }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/spreadsheets/sheet-1/values/2024-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(values_body(&[
            ["social_network", "channel_url", "total_videos", "total_views"],
            ["INSTAGRAM", "https://instagram.com/a", "2", "100"],
            ["TIKTOK", "https://tiktok.com/@b", "1", "50"],
            ["FACEBOOK", "https://facebook.com/c", "4", "9999"],
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/spreadsheets/sheet-1/values/2024-01-02"))
        .respond_with(ResponseTemplate::new(200).set_body_json(values_body(&[
            ["social_network", "channel_url", "total_videos", "total_views"],
            ["INSTAGRAM", "https://instagram.com/a", "3", "1 234,50"],
            ["TIKTOK", "https://tiktok.com/@b", "1", "40"],
        ])))
        .mount(&server)
        .await;

    let client = SheetsClient::with_base_url(None, 30, 0, 0, &server.uri()).unwrap();

    let sheets = client.list_sheets("sheet-1").await.unwrap();
    let (dated, other) = partition_date_tabs(sheets);
    assert_eq!(dated.len(), 2);
    assert_eq!(other.len(), 2);

    let mut snapshots = Vec::new();
    for tab in &dated {
        let rows = client.fetch_values("sheet-1", &tab.title).await.unwrap();
        let channels = parse_channels(&rows);
        snapshots.push(viewdeck_core::DailySnapshot::from_records(
            tab.title.as_str(),
            &channels,
        ));
    }

    let series = ProjectSeries::from_snapshots(snapshots).unwrap();
    let snaps = series.snapshots();
    assert_eq!(snaps.len(), 2);

    // Day 1: FACEBOOK row filtered out entirely.
    assert_eq!(snaps[0].label, "2024-01-01");
    assert_eq!(snaps[0].channel_count, 2);
    assert_eq!(snaps[0].total_views, 150);
    assert_eq!(snaps[0].delta, 150);

    // Day 2: locale-formatted counter parsed, tiktok regression clamped.
    assert_eq!(snaps[1].total_views, 1274);
    assert_eq!(snaps[1].delta, 1124);
    assert_eq!(snaps[1].delta_by_platform[&Platform::Instagram], 1134);
    assert_eq!(snaps[1].delta_by_platform[&Platform::Tiktok], 0);
    assert_eq!(snaps[1].delta_by_platform[&Platform::Youtube], 0);
}
