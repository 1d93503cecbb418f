use mandi_core::{
    AggregateResult, Capability, Fetched, MandiError, NewsItem, NewsQuery, aggregate_sentiment,
};

use crate::Mandi;
use crate::dashboard::SentimentPulse;

impl Mandi {
    /// Fetch headlines matching any term of `query`.
    ///
    /// Providers may include duplicates or syndicated content; no de-duplication is
    /// applied. The result never holds more than `query.limit` items.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a query without terms, otherwise an error if no
    /// eligible provider succeeds or none support news.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "mandi::router",
            skip(self, query),
            fields(terms = query.terms.len(), limit = query.limit),
        )
    )]
    pub async fn news(&self, query: &NewsQuery) -> Result<Vec<NewsItem>, MandiError> {
        let target = query.to_query_string();
        let mut items = self
            .fetch_single(&target, Capability::News, move |c| {
                c.as_news_provider()?;
                Some(async move {
                    match c.as_news_provider() {
                        Some(p) => p.news(query).await,
                        None => Err(MandiError::connector(
                            c.name(),
                            "missing news capability during call",
                        )),
                    }
                })
            })
            .await?;
        items.truncate(query.limit);
        Ok(items)
    }

    /// Average sentiment of `items` with the shared analyzer.
    #[must_use]
    pub fn aggregate(&self, items: &[NewsItem]) -> AggregateResult {
        aggregate_sentiment(&self.analyzer, items)
    }

    /// Fetch headlines for `query` and score them.
    ///
    /// Never fails: a failed or empty fetch yields `(0.0, Neutral)` with the
    /// outcome kept in `news`.
    pub async fn sentiment_pulse(&self, query: &NewsQuery) -> SentimentPulse {
        let news = match self.news(query).await {
            Ok(items) if items.is_empty() => Fetched::Empty,
            Ok(items) => Fetched::Data(items),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(target: "mandi::router", error = %e, "news fetch failed");
                Fetched::Failed(e)
            }
        };
        let result = news
            .data()
            .map_or(AggregateResult::NEUTRAL, |items| self.aggregate(items));
        SentimentPulse { news, result }
    }

    /// Sentiment pulse over the geopolitical watch terms, limited to the configured
    /// `news_limit`.
    pub async fn geopolitical_pulse(&self) -> SentimentPulse {
        let query = NewsQuery::geopolitics().with_limit(self.cfg.news_limit);
        self.sentiment_pulse(&query).await
    }
}
