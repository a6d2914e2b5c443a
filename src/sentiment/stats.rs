use super::types::{LineResult, Sentiment};

/// Per-label counts over one result set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SentimentStats {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentStats {
    /// Count results by label in a single pass; confidence is ignored.
    pub fn from_results(results: &[LineResult]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut stats, result| {
                stats.record(result.sentiment);
                stats
            })
    }

    fn record(&mut self, sentiment: Sentiment) {
        self.total += 1;
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    /// Fraction of results carrying `sentiment`, or 0 for an empty set.
    pub fn share(&self, sentiment: Sentiment) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(sentiment) as f64 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(sentiment: Sentiment) -> LineResult {
        LineResult {
            line: "line".to_string(),
            sentiment,
            confidence: 0.5,
        }
    }

    #[test]
    fn counts_each_label() {
        let results = vec![
            result(Sentiment::Positive),
            result(Sentiment::Neutral),
            result(Sentiment::Negative),
            result(Sentiment::Positive),
            result(Sentiment::Neutral),
        ];
        let stats = SentimentStats::from_results(&results);
        assert_eq!(
            stats,
            SentimentStats {
                total: 5,
                positive: 2,
                negative: 1,
                neutral: 2,
            }
        );
    }

    #[test]
    fn empty_results_have_zero_share() {
        let stats = SentimentStats::from_results(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.share(Sentiment::Positive), 0.0);
    }

    #[test]
    fn share_is_fraction_of_total() {
        let results = vec![result(Sentiment::Negative), result(Sentiment::Positive)];
        let stats = SentimentStats::from_results(&results);
        assert!((stats.share(Sentiment::Negative) - 0.5).abs() < f64::EPSILON);
    }
}
