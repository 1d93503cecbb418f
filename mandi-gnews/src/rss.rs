//! Minimal RSS 2.0 model: only the fields the dashboard reads.

use chrono::DateTime;
use mandi_core::{MandiError, NewsItem, Published};
use serde::Deserialize;

use crate::CONNECTOR_NAME;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(rename = "pubDate", default)]
    pub_date: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl From<Item> for NewsItem {
    fn from(item: Item) -> Self {
        Self {
            title: item.title.trim().to_string(),
            link: item.link.trim().to_string(),
            published: parse_published(item.pub_date.as_deref()),
            summary: item.description.unwrap_or_default(),
        }
    }
}

fn parse_published(raw: Option<&str>) -> Published {
    raw.and_then(|s| DateTime::parse_from_rfc2822(s.trim()).ok())
        .map_or(Published::Unknown, Published::At)
}

/// Parse an RSS document and keep the first `limit` items in feed order.
///
/// # Errors
/// Returns `MandiError::Connector` when the document is not RSS.
pub fn parse_feed(xml: &str, limit: usize) -> Result<Vec<NewsItem>, MandiError> {
    let rss: Rss = quick_xml::de::from_str(xml)
        .map_err(|e| MandiError::connector(CONNECTOR_NAME, format!("malformed feed: {e}")))?;
    Ok(rss
        .channel
        .items
        .into_iter()
        .take(limit)
        .map(NewsItem::from)
        .collect())
}
