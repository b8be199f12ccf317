use analysis_core::{AnalysisError, NewsArticle, NewsSource, SentimentClassifier};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod lexicon;
pub use lexicon::LexiconClassifier;

/// Articles considered per company.
pub const MAX_ARTICLES: usize = 10;

/// Characters of article text handed to the classifier.
pub const MAX_ARTICLE_CHARS: usize = 500;

/// Score reported when there is no news at all.
pub const NEUTRAL_SENTIMENT: f64 = 50.0;

const POLARITY_GAIN: f64 = 1.5;

/// Aggregated news sentiment on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub score: f64,
    pub article_count: usize,
    /// Mean per-article polarity in [-1, 1].
    pub mean_polarity: f64,
    pub interpretation: String,
}

/// Fold per-article polarities (P(positive) - P(negative)) into one score.
pub fn aggregate_sentiment(polarities: &[f64]) -> SentimentScore {
    if polarities.is_empty() {
        return SentimentScore {
            score: NEUTRAL_SENTIMENT,
            article_count: 0,
            mean_polarity: 0.0,
            interpretation: "No recent news".to_string(),
        };
    }

    let mean = polarities.iter().sum::<f64>() / polarities.len() as f64;
    let score = round2(((mean * POLARITY_GAIN).tanh() + 1.0) * 50.0);

    let interpretation = if score > 60.0 {
        "Mostly positive news"
    } else if score > 40.0 {
        "Mixed news"
    } else {
        "Negative news"
    };

    SentimentScore {
        score,
        article_count: polarities.len(),
        mean_polarity: mean,
        interpretation: interpretation.to_string(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// News sentiment over an injected news source and classifier.
///
/// When the classifier fails on an article the word-list fallback rates it
/// instead, so one unreachable model does not sink the whole evaluation.
pub struct NewsSentimentEngine {
    source: Arc<dyn NewsSource>,
    classifier: Arc<dyn SentimentClassifier>,
    fallback: LexiconClassifier,
}

impl NewsSentimentEngine {
    pub fn new(source: Arc<dyn NewsSource>, classifier: Arc<dyn SentimentClassifier>) -> Self {
        Self {
            source,
            classifier,
            fallback: LexiconClassifier::new(),
        }
    }

    /// Engine that rates articles with the word list only.
    pub fn with_lexicon(source: Arc<dyn NewsSource>) -> Self {
        Self::new(source, Arc::new(LexiconClassifier::new()))
    }

    async fn article_polarity(&self, article: &NewsArticle) -> f64 {
        let text = article.text();
        let text = truncate_chars(&text, MAX_ARTICLE_CHARS);

        match self.classifier.classify(text).await {
            Ok(probs) => probs.polarity(),
            Err(e) => {
                tracing::debug!("Classifier unavailable, falling back to word-list: {}", e);
                self.fallback.probabilities(text).polarity()
            }
        }
    }

    pub async fn score(&self, company: &str) -> Result<SentimentScore, AnalysisError> {
        let articles = self.source.recent_articles(company).await?;
        if articles.is_empty() {
            tracing::info!("{}: no recent news found", company);
        }

        let mut polarities = Vec::with_capacity(articles.len().min(MAX_ARTICLES));
        for article in articles.iter().take(MAX_ARTICLES) {
            polarities.push(self.article_polarity(article).await);
        }

        let sentiment = aggregate_sentiment(&polarities);
        tracing::info!(
            "{}: news sentiment {:.2} over {} articles ({})",
            company,
            sentiment.score,
            sentiment.article_count,
            sentiment.interpretation
        );
        Ok(sentiment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::SentimentProbabilities;
    use approx::assert_relative_eq;
    use async_trait::async_trait;

    struct StaticNews(Vec<NewsArticle>);

    #[async_trait]
    impl NewsSource for StaticNews {
        async fn recent_articles(&self, _query: &str) -> Result<Vec<NewsArticle>, AnalysisError> {
            Ok(self.0.clone())
        }
    }

    struct FailingNews;

    #[async_trait]
    impl NewsSource for FailingNews {
        async fn recent_articles(&self, query: &str) -> Result<Vec<NewsArticle>, AnalysisError> {
            Err(AnalysisError::Provider(format!("news search failed for {}", query)))
        }
    }

    struct FixedClassifier(SentimentProbabilities);

    #[async_trait]
    impl SentimentClassifier for FixedClassifier {
        async fn classify(&self, _text: &str) -> Result<SentimentProbabilities, AnalysisError> {
            Ok(self.0)
        }
    }

    struct BrokenClassifier;

    #[async_trait]
    impl SentimentClassifier for BrokenClassifier {
        async fn classify(&self, _text: &str) -> Result<SentimentProbabilities, AnalysisError> {
            Err(AnalysisError::Provider("model offline".to_string()))
        }
    }

    fn article(title: &str) -> NewsArticle {
        NewsArticle {
            title: title.to_string(),
            published_utc: None,
            url: None,
            content: None,
        }
    }

    #[test]
    fn test_no_news_is_neutral() {
        let s = aggregate_sentiment(&[]);
        assert_eq!(s.score, 50.0);
        assert_eq!(s.article_count, 0);
        assert_eq!(s.interpretation, "No recent news");
    }

    #[test]
    fn test_aggregate_formula() {
        let s = aggregate_sentiment(&[0.6, 0.2]);
        // mean 0.4 -> (tanh(0.6) + 1) * 50
        assert_relative_eq!(s.score, 76.85, epsilon = 1e-9);
        assert_eq!(s.interpretation, "Mostly positive news");

        let s = aggregate_sentiment(&[-0.1, 0.1]);
        assert_eq!(s.score, 50.0);
        assert_eq!(s.interpretation, "Mixed news");

        let s = aggregate_sentiment(&[-0.9]);
        assert!(s.score < 40.0);
        assert_eq!(s.interpretation, "Negative news");
    }

    #[test]
    fn test_score_stays_in_range() {
        assert!(aggregate_sentiment(&[1.0; 5]).score <= 100.0);
        assert!(aggregate_sentiment(&[-1.0; 5]).score >= 0.0);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("été", 2), "ét");
    }

    #[tokio::test]
    async fn test_engine_uses_classifier() {
        let engine = NewsSentimentEngine::new(
            Arc::new(StaticNews(vec![article("a"), article("b")])),
            Arc::new(FixedClassifier(SentimentProbabilities {
                positive: 0.7,
                neutral: 0.2,
                negative: 0.1,
            })),
        );

        let s = engine.score("Acme").await.unwrap();
        assert_eq!(s.article_count, 2);
        assert_relative_eq!(s.mean_polarity, 0.6, epsilon = 1e-12);
        assert!(s.score > 60.0);
    }

    #[tokio::test]
    async fn test_engine_caps_article_count() {
        let many = (0..25).map(|i| article(&format!("headline {}", i))).collect();
        let engine = NewsSentimentEngine::with_lexicon(Arc::new(StaticNews(many)));
        let s = engine.score("Acme").await.unwrap();
        assert_eq!(s.article_count, MAX_ARTICLES);
        assert_eq!(s.score, 50.0);
    }

    #[tokio::test]
    async fn test_broken_classifier_falls_back_to_lexicon() {
        let engine = NewsSentimentEngine::new(
            Arc::new(StaticNews(vec![article("Bankruptcy probe widens as losses mount")])),
            Arc::new(BrokenClassifier),
        );
        let s = engine.score("Acme").await.unwrap();
        assert!(s.mean_polarity < 0.0);
        assert!(s.score < 50.0);
    }

    #[tokio::test]
    async fn test_source_failure_propagates() {
        let engine = NewsSentimentEngine::with_lexicon(Arc::new(FailingNews));
        let result = engine.score("Acme").await;
        assert!(matches!(result, Err(AnalysisError::Provider(_))));
    }
}
