use super::*;

fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|&s| s.to_owned()).collect()
}

fn standard_header() -> Vec<String> {
    strings(&["social_network", "channel_url", "total_videos", "total_views"])
}

// -----------------------------------------------------------------------
// parse_metric
// -----------------------------------------------------------------------

#[test]
fn parse_metric_plain_integer() {
    assert_eq!(parse_metric("1200"), 1200);
}

#[test]
fn parse_metric_locale_formatted() {
    assert_eq!(parse_metric("1 234,50"), 1234);
}

#[test]
fn parse_metric_non_breaking_spaces() {
    assert_eq!(parse_metric("12\u{a0}345"), 12_345);
}

#[test]
fn parse_metric_garbage_defaults_to_zero() {
    assert_eq!(parse_metric("n/a"), 0);
    assert_eq!(parse_metric(""), 0);
    assert_eq!(parse_metric("—"), 0);
}

#[test]
fn parse_metric_thousands_grouping_defaults_to_zero() {
    // "1,234,567" becomes "1.234.567", which is not a number; the
    // default-to-zero policy applies rather than a partial parse.
    assert_eq!(parse_metric("1,234,567"), 0);
}

#[test]
fn parse_metric_negative_clamps_to_zero() {
    assert_eq!(parse_metric("-42"), 0);
}

#[test]
fn parse_metric_decimal_truncates() {
    assert_eq!(parse_metric("99.99"), 99);
}

// -----------------------------------------------------------------------
// normalize_row
// -----------------------------------------------------------------------

#[test]
fn normalize_row_builds_record() {
    let record = normalize_row(
        &standard_header(),
        &strings(&["INSTAGRAM", " https://instagram.com/a ", "3", "1200"]),
    )
    .unwrap();
    assert_eq!(record.platform, Platform::Instagram);
    assert_eq!(record.channel_url, "https://instagram.com/a");
    assert_eq!(record.total_videos, 3);
    assert_eq!(record.total_views, 1200);
}

#[test]
fn normalize_row_platform_is_case_insensitive() {
    let record = normalize_row(
        &standard_header(),
        &strings(&[" tiktok ", "https://tiktok.com/@a", "1", "10"]),
    )
    .unwrap();
    assert_eq!(record.platform, Platform::Tiktok);
}

#[test]
fn normalize_row_unrecognized_platform_is_skipped() {
    let row = strings(&["FACEBOOK", "https://facebook.com/a", "5", "900"]);
    assert!(normalize_row(&standard_header(), &row).is_none());
}

#[test]
fn normalize_row_header_row_is_skipped() {
    let header = standard_header();
    assert!(normalize_row(&header, &header).is_none());
}

#[test]
fn normalize_row_missing_trailing_cells_read_empty() {
    let record = normalize_row(&standard_header(), &strings(&["YOUTUBE"])).unwrap();
    assert_eq!(record.channel_url, "");
    assert_eq!(record.total_videos, 0);
    assert_eq!(record.total_views, 0);
}

#[test]
fn normalize_row_header_names_trimmed_and_lowercased() {
    let header = strings(&[" Social_Network ", "CHANNEL_URL", "Total_Videos", "Total_Views"]);
    let record = normalize_row(
        &header,
        &strings(&["YOUTUBE", "https://youtube.com/@a", "2", "50"]),
    )
    .unwrap();
    assert_eq!(record.platform, Platform::Youtube);
    assert_eq!(record.total_views, 50);
}

#[test]
fn normalize_row_malformed_counters_default_to_zero() {
    let record = normalize_row(
        &standard_header(),
        &strings(&["INSTAGRAM", "https://instagram.com/a", "n/a", "oops"]),
    )
    .unwrap();
    assert_eq!(record.total_videos, 0);
    assert_eq!(record.total_views, 0);
}

// -----------------------------------------------------------------------
// parse_channels
// -----------------------------------------------------------------------

#[test]
fn parse_channels_empty_input() {
    assert!(parse_channels(&[]).is_empty());
}

#[test]
fn parse_channels_header_only() {
    assert!(parse_channels(&[standard_header()]).is_empty());
}

#[test]
fn parse_channels_filters_and_counts() {
    let rows = vec![
        standard_header(),
        strings(&["INSTAGRAM", "https://instagram.com/a", "3", "1200"]),
        vec![],
        strings(&["FACEBOOK", "https://facebook.com/b", "9", "9999"]),
        strings(&["TIKTOK", "https://tiktok.com/@c", "7", "1 234,50"]),
    ];
    let channels = parse_channels(&rows);
    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0].platform, Platform::Instagram);
    assert_eq!(channels[1].platform, Platform::Tiktok);
    assert_eq!(channels[1].total_views, 1234);
}
