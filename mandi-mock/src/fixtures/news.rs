use chrono::DateTime;
use mandi_core::{NewsItem, NewsQuery, Published};

const HEADLINES: &[(&str, &str, Option<&str>, &str)] = &[
    (
        "Gold climbs as investors seek safety amid Middle East tensions",
        "https://news.example/gold-safety",
        Some("Tue, 09 Jan 2024 06:30:00 GMT"),
        "Bullion gains as conflict fears boost demand <a href=\"https://news.example\">Wire</a>",
    ),
    (
        "OPEC signals steady output, oil markets calm",
        "https://news.example/opec-output",
        Some("Mon, 08 Jan 2024 14:05:00 GMT"),
        "Delegates welcome a stable outlook for supply",
    ),
    (
        "Rupee weakens against dollar as Fed holds rates",
        "https://news.example/rupee-fed",
        Some("Mon, 08 Jan 2024 09:45:00 GMT"),
        "",
    ),
    (
        "Trade war worries return as new sanctions announced",
        "https://news.example/trade-war",
        None,
        "Markets slump on escalation risk",
    ),
    (
        "Peace talks between Russia and Ukraine bring cautious hope",
        "https://news.example/peace-talks",
        Some("Fri, 05 Jan 2024 18:20:00 GMT"),
        "Negotiators report progress <b>Reuters</b>",
    ),
];

pub fn items(query: &NewsQuery) -> Vec<NewsItem> {
    HEADLINES
        .iter()
        .take(query.limit)
        .map(|(title, link, published, summary)| NewsItem {
            title: (*title).to_string(),
            link: (*link).to_string(),
            published: published
                .and_then(|p| DateTime::parse_from_rfc2822(p).ok())
                .map_or(Published::Unknown, Published::At),
            summary: (*summary).to_string(),
        })
        .collect()
}
