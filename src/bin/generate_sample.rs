use std::sync::Arc;

use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[(self.next_u64() % options.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const TOPICS: [&str; 6] = [
    "the new release",
    "customer support",
    "this morning's outage",
    "the latest update",
    "the pricing change",
    "the keynote",
];

const POSITIVE: [&str; 4] = [
    "is absolutely fantastic",
    "made my whole week",
    "works better than expected",
    "deserves way more credit",
];

const NEGATIVE: [&str; 4] = [
    "is a complete letdown",
    "keeps breaking for me",
    "wasted my entire afternoon",
    "needs to be fixed yesterday",
];

const NEUTRAL: [&str; 3] = [
    "is about what I expected",
    "rolled out again today",
    "seems unchanged so far",
];

fn compose_tweet(rng: &mut SimpleRng, sentiment: f64) -> String {
    let topic = rng.pick(&TOPICS);
    let verdict = if sentiment > 0.25 {
        rng.pick(&POSITIVE)
    } else if sentiment < -0.25 {
        rng.pick(&NEGATIVE)
    } else {
        rng.pick(&NEUTRAL)
    };
    format!("Honestly, {topic} {verdict}.")
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Per-month mood drift and embedding cluster centre.
    let months: [(&str, f64, (f64, f64)); 5] = [
        ("January", -0.45, (-6.0, -2.0)),
        ("February", -0.15, (-2.5, 4.0)),
        ("March", 0.05, (1.0, -4.5)),
        ("April", 0.3, (4.0, 2.5)),
        ("May", 0.5, (7.5, -1.0)),
    ];
    let tweets_per_month = 150;

    let mut all_month: Vec<String> = Vec::new();
    let mut all_sentiment: Vec<f64> = Vec::new();
    let mut all_subjectivity: Vec<f64> = Vec::new();
    let mut all_dim1: Vec<f64> = Vec::new();
    let mut all_dim2: Vec<f64> = Vec::new();
    let mut all_text: Vec<String> = Vec::new();

    for &(month, mood, (cx, cy)) in &months {
        for _ in 0..tweets_per_month {
            let sentiment = rng.gauss(mood, 0.3).clamp(-1.0, 1.0);
            // Averaging two uniforms biases towards mid subjectivity.
            let subjectivity = ((rng.next_f64() + rng.next_f64()) / 2.0).clamp(0.0, 1.0);

            all_month.push(month.to_string());
            all_sentiment.push(sentiment);
            all_subjectivity.push(subjectivity);
            all_dim1.push(rng.gauss(cx, 1.4));
            all_dim2.push(rng.gauss(cy, 1.4));
            all_text.push(compose_tweet(&mut rng, sentiment));
        }
    }

    // ---- CSV ----
    let csv_path = "ProcessedTweets.csv";
    let mut writer = csv::Writer::from_path(csv_path).expect("Failed to create CSV file");
    writer
        .write_record([
            "Month",
            "Sentiment",
            "Subjectivity",
            "Dimension 1",
            "Dimension 2",
            "RawTweet",
        ])
        .expect("Failed to write CSV header");
    for i in 0..all_month.len() {
        let sentiment = format!("{:.4}", all_sentiment[i]);
        let subjectivity = format!("{:.4}", all_subjectivity[i]);
        let dim1 = format!("{:.4}", all_dim1[i]);
        let dim2 = format!("{:.4}", all_dim2[i]);
        writer
            .write_record([
                all_month[i].as_str(),
                sentiment.as_str(),
                subjectivity.as_str(),
                dim1.as_str(),
                dim2.as_str(),
                all_text[i].as_str(),
            ])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");

    // ---- Parquet ----
    let schema = Arc::new(Schema::new(vec![
        Field::new("Month", DataType::Utf8, false),
        Field::new("Sentiment", DataType::Float64, false),
        Field::new("Subjectivity", DataType::Float64, false),
        Field::new("Dimension 1", DataType::Float64, false),
        Field::new("Dimension 2", DataType::Float64, false),
        Field::new("RawTweet", DataType::Utf8, false),
    ]));

    let month_array = StringArray::from(
        all_month.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
    );
    let sentiment_array = Float64Array::from(all_sentiment);
    let subjectivity_array = Float64Array::from(all_subjectivity);
    let dim1_array = Float64Array::from(all_dim1);
    let dim2_array = Float64Array::from(all_dim2);
    let text_array = StringArray::from(
        all_text.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
    );

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(month_array),
            Arc::new(sentiment_array),
            Arc::new(subjectivity_array),
            Arc::new(dim1_array),
            Arc::new(dim2_array),
            Arc::new(text_array),
        ],
    )
    .expect("Failed to create RecordBatch");

    let parquet_path = "ProcessedTweets.parquet";
    let file = std::fs::File::create(parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!(
        "Wrote {} tweets across {} months to {csv_path} and {parquet_path}",
        all_month.len(),
        months.len()
    );
}
