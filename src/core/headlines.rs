use crate::config::NewsConfig;
use crate::domain::model::{NewsQuery, NewsResponse};
use crate::domain::ports::NewsSource;
use crate::utils::error::Result;
use rand::seq::IndexedRandom;
use std::sync::Arc;

pub const COMPANIES: [&str; 20] = [
    "Apple", "Google", "Microsoft", "Amazon", "Facebook", "Tesla", "Netflix", "Twitter", "Uber",
    "Lyft", "Airbnb", "Zoom", "Slack", "Shopify", "Spotify", "Pinterest", "Snapchat", "TikTok",
    "Reddit", "LinkedIn",
];

/// Looks up the latest news blurb for one of the tracked companies.
pub struct HeadlineService {
    source: Arc<dyn NewsSource>,
    news: NewsConfig,
}

impl HeadlineService {
    pub fn new(source: Arc<dyn NewsSource>, news: NewsConfig) -> Self {
        Self { source, news }
    }

    pub fn pick_company() -> &'static str {
        COMPANIES
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(COMPANIES[0])
    }

    pub async fn latest_headline(&self) -> Result<String> {
        let company = Self::pick_company();
        tracing::info!("Fetching latest headline for {}", company);
        self.headline_for(company).await
    }

    /// Empty when the company has no articles or the newest one has no description.
    pub async fn headline_for(&self, company: &str) -> Result<String> {
        let query = NewsQuery {
            keyword: company.to_string(),
            from_date: self.news.from_date.clone(),
            language: self.news.language.clone(),
            sort_by: self.news.sort_by.clone(),
        };

        let response = self.source.search(&query).await?;
        tracing::debug!("{} articles found for {}", response.articles.len(), company);

        Ok(newest_description(response))
    }
}

// articles arrive sorted by publishedAt, newest first
fn newest_description(response: NewsResponse) -> String {
    response
        .articles
        .into_iter()
        .next()
        .and_then(|article| article.description)
        .unwrap_or_default()
}
