use super::*;

#[test]
fn market_table_has_five_rows() {
    assert_eq!(MARKET_DATA.len(), 5);
}

#[test]
fn first_row_is_wheat_trending_up() {
    let first = &MARKET_DATA[0];
    assert_eq!(first.crop, "Wheat");
    assert_eq!(first.trend, Trend::Up);
}

#[test]
fn trend_labels_match_markers() {
    assert_eq!(trend_label(Trend::Up), "▲ Up");
    assert_eq!(trend_label(Trend::Down), "▼ Down");
    assert_eq!(trend_label(Trend::Stable), "● Stable");
}

#[test]
fn trend_classes_follow_direction() {
    assert_eq!(trend_class(Trend::Up), "trend trend--up");
    assert_eq!(trend_class(Trend::Down), "trend trend--down");
    assert_eq!(trend_class(Trend::Stable), "trend trend--stable");
}
