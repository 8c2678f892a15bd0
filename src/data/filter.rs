use super::model::{TweetDataset, TweetRecord};

// ---------------------------------------------------------------------------
// Filter criteria: month + inclusive score ranges
// ---------------------------------------------------------------------------

/// An inclusive score interval. Invariant: `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRange {
    pub lo: f64,
    pub hi: f64,
}

impl ScoreRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        ScoreRange { lo, hi }
    }

    /// Inclusive on both ends; never true for NaN.
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }
}

impl From<(f64, f64)> for ScoreRange {
    fn from((lo, hi): (f64, f64)) -> Self {
        ScoreRange { lo, hi }
    }
}

/// The complete filter state. Replaced wholesale on every control change,
/// never partially updated.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub month: String,
    pub sentiment: ScoreRange,
    pub subjectivity: ScoreRange,
}

impl FilterCriteria {
    /// Default criteria: the first distinct month with both ranges spanning
    /// each column's full observed extent.
    pub fn initial(dataset: &TweetDataset) -> Self {
        FilterCriteria {
            month: dataset.months().first().cloned().unwrap_or_default(),
            sentiment: dataset.sentiment_range().into(),
            subjectivity: dataset.subjectivity_range().into(),
        }
    }

    fn matches(&self, rec: &TweetRecord) -> bool {
        rec.month == self.month
            && self.sentiment.contains(rec.sentiment)
            && self.subjectivity.contains(rec.subjectivity)
    }
}

/// Return indices of tweets that pass the criteria, in original row order.
///
/// A month label absent from the dataset simply matches nothing; range
/// endpoints outside a column's observed extent are accepted as-is.
pub fn matching_indices(dataset: &TweetDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(month: &str, sentiment: f64, subjectivity: f64, text: &str) -> TweetRecord {
        TweetRecord {
            month: month.to_string(),
            sentiment,
            subjectivity,
            dim1: 0.0,
            dim2: 0.0,
            raw_text: text.to_string(),
        }
    }

    fn january_criteria() -> FilterCriteria {
        FilterCriteria {
            month: "Jan".to_string(),
            sentiment: ScoreRange::new(0.0, 1.0),
            subjectivity: ScoreRange::new(0.0, 1.0),
        }
    }

    #[test]
    fn keeps_matching_rows_in_original_order() {
        let ds = TweetDataset::from_records(vec![
            record("Jan", 0.5, 0.2, "a"),
            record("Feb", 0.5, 0.2, "b"),
            record("Jan", 0.1, 0.9, "c"),
            record("Jan", -0.5, 0.2, "d"),
        ]);
        assert_eq!(matching_indices(&ds, &january_criteria()), [0, 2]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = TweetDataset::from_records(vec![
            record("Jan", 0.5, 0.2, "a"),
            record("Jan", 0.7, 0.4, "b"),
        ]);
        let criteria = january_criteria();
        assert_eq!(
            matching_indices(&ds, &criteria),
            matching_indices(&ds, &criteria)
        );
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ds = TweetDataset::from_records(vec![
            record("Jan", 0.0, 0.5, "at lo"),
            record("Jan", 1.0, 0.5, "at hi"),
            record("Jan", 0.0 - 1e-9, 0.5, "below lo"),
            record("Jan", 1.0 + 1e-9, 0.5, "above hi"),
        ]);
        assert_eq!(matching_indices(&ds, &january_criteria()), [0, 1]);
    }

    #[test]
    fn unknown_month_yields_empty_not_error() {
        let ds = TweetDataset::from_records(vec![record("Jan", 0.5, 0.5, "a")]);
        let criteria = FilterCriteria {
            month: "NoSuchMonth".to_string(),
            ..january_criteria()
        };
        assert!(matching_indices(&ds, &criteria).is_empty());
    }

    #[test]
    fn out_of_observed_range_criteria_filter_conservatively() {
        let ds = TweetDataset::from_records(vec![record("Jan", 0.5, 0.5, "a")]);
        let criteria = FilterCriteria {
            sentiment: ScoreRange::new(2.0, 3.0),
            ..january_criteria()
        };
        assert!(matching_indices(&ds, &criteria).is_empty());

        let wide = FilterCriteria {
            sentiment: ScoreRange::new(-10.0, 10.0),
            ..january_criteria()
        };
        assert_eq!(matching_indices(&ds, &wide), [0]);
    }

    #[test]
    fn nan_scores_never_match() {
        let ds = TweetDataset::from_records(vec![record("Jan", f64::NAN, 0.5, "a")]);
        assert!(matching_indices(&ds, &january_criteria()).is_empty());
    }

    #[test]
    fn initial_criteria_cover_the_full_observed_extent() {
        let ds = TweetDataset::from_records(vec![
            record("May", -0.8, 0.1, "a"),
            record("June", 0.6, 0.9, "b"),
        ]);
        let criteria = FilterCriteria::initial(&ds);
        assert_eq!(criteria.month, "May");
        assert_eq!(criteria.sentiment, ScoreRange::new(-0.8, 0.6));
        assert_eq!(criteria.subjectivity, ScoreRange::new(0.1, 0.9));
    }
}
