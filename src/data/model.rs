use serde::Deserialize;

// ---------------------------------------------------------------------------
// TweetRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single processed tweet (one row of the source table).
///
/// Field names are bound to the source column headers via serde renames so
/// the same struct deserializes from CSV and records-oriented JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TweetRecord {
    #[serde(rename = "Month")]
    pub month: String,
    /// Polarity score, observed roughly in [-1, 1].
    #[serde(rename = "Sentiment")]
    pub sentiment: f64,
    /// Opinion-vs-fact score, observed in [0, 1].
    #[serde(rename = "Subjectivity")]
    pub subjectivity: f64,
    /// 2-D embedding coordinates, used only for visual placement.
    #[serde(rename = "Dimension 1")]
    pub dim1: f64,
    #[serde(rename = "Dimension 2")]
    pub dim2: f64,
    #[serde(rename = "RawTweet")]
    pub raw_text: String,
}

// ---------------------------------------------------------------------------
// TweetDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Score ranges used for slider bounds when a column has no observations.
const NOMINAL_SENTIMENT: (f64, f64) = (-1.0, 1.0);
const NOMINAL_SUBJECTIVITY: (f64, f64) = (0.0, 1.0);

/// The full parsed dataset with pre-computed month and score-range indices.
///
/// Immutable after construction. Row order is fixed at load time; selection
/// events trace back to rows through these stable indices.
#[derive(Debug, Clone)]
pub struct TweetDataset {
    /// All tweets (rows), in file order.
    pub records: Vec<TweetRecord>,
    /// Unique month labels in first-seen order.
    months: Vec<String>,
    /// Observed (min, max) of the sentiment column.
    sentiment_range: (f64, f64),
    /// Observed (min, max) of the subjectivity column.
    subjectivity_range: (f64, f64),
}

impl TweetDataset {
    /// Build the month and score-range indices from the loaded rows.
    pub fn from_records(records: Vec<TweetRecord>) -> Self {
        let mut months: Vec<String> = Vec::new();
        for rec in &records {
            if !months.iter().any(|m| m == &rec.month) {
                months.push(rec.month.clone());
            }
        }

        let sentiment_range =
            observed_range(records.iter().map(|r| r.sentiment), NOMINAL_SENTIMENT);
        let subjectivity_range =
            observed_range(records.iter().map(|r| r.subjectivity), NOMINAL_SUBJECTIVITY);

        TweetDataset {
            records,
            months,
            sentiment_range,
            subjectivity_range,
        }
    }

    /// Unique month labels in first-seen order.
    pub fn months(&self) -> &[String] {
        &self.months
    }

    /// Observed (min, max) of the sentiment column; nominal [-1, 1] when empty.
    pub fn sentiment_range(&self) -> (f64, f64) {
        self.sentiment_range
    }

    /// Observed (min, max) of the subjectivity column; nominal [0, 1] when empty.
    pub fn subjectivity_range(&self) -> (f64, f64) {
        self.subjectivity_range
    }

    /// Number of tweets.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Observed (min, max) over `values`, skipping NaN; `fallback` when nothing
/// observable remains.
fn observed_range(values: impl Iterator<Item = f64>, fallback: (f64, f64)) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut seen = false;

    for v in values {
        if v.is_nan() {
            continue;
        }
        lo = lo.min(v);
        hi = hi.max(v);
        seen = true;
    }

    if seen { (lo, hi) } else { fallback }
}
