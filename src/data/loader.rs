use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Array, AsArray, Float32Array, Float64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{TweetDataset, TweetRecord};

/// Column headers every supported input format must provide.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Month",
    "Sentiment",
    "Subjectivity",
    "Dimension 1",
    "Dimension 2",
    "RawTweet",
];

/// Dataset loading failed. Fatal at startup: the UI never opens without a
/// well-formed dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("required column '{0}' is missing")]
    MissingColumn(String),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    #[error("malformed Parquet data: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
    #[error("row {row}: {message}")]
    BadField { row: usize, message: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the processed-tweet table from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the required columns (canonical format)
/// * `.json`    – `[{ "Month": ..., "Sentiment": ..., ... }, ...]`
/// * `.parquet` – flat scalar columns with the same names
pub fn load_file(path: &Path) -> Result<TweetDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

fn open(path: &Path) -> Result<std::fs::File, LoadError> {
    std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming at least the required columns; extra
/// columns are ignored. Column presence is verified before any row is
/// parsed so a missing column fails with its name rather than a row error.
fn load_csv(path: &Path) -> Result<TweetDataset, LoadError> {
    let mut reader = csv::Reader::from_reader(open(path)?);

    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<TweetRecord>().enumerate() {
        let record = result.map_err(|e| LoadError::BadField {
            row,
            message: e.to_string(),
        })?;
        records.push(record);
    }

    Ok(TweetDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Month": "January",
///     "Sentiment": 0.12,
///     "Subjectivity": 0.5,
///     "Dimension 1": -3.1,
///     "Dimension 2": 7.8,
///     "RawTweet": "..."
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<TweetDataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let rows = root.as_array().ok_or_else(|| LoadError::BadField {
        row: 0,
        message: "expected a top-level JSON array of records".to_string(),
    })?;

    if let Some(first) = rows.first().and_then(|r| r.as_object()) {
        for required in REQUIRED_COLUMNS {
            if !first.contains_key(required) {
                return Err(LoadError::MissingColumn(required.to_string()));
            }
        }
    }

    let mut records = Vec::with_capacity(rows.len());
    for (row, value) in rows.iter().enumerate() {
        let record: TweetRecord =
            serde_json::from_value(value.clone()).map_err(|e| LoadError::BadField {
                row,
                message: e.to_string(),
            })?;
        records.push(record);
    }

    Ok(TweetDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat scalar columns.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`); string columns may be Utf8 or
/// LargeUtf8, score columns Float64 or Float32.
fn load_parquet(path: &Path) -> Result<TweetDataset, LoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?;
    let reader = builder.build()?;

    let mut records = Vec::new();
    let mut row_base = 0usize;

    for batch_result in reader {
        let batch = batch_result?;

        let month_col = required_column(&batch, "Month")?;
        let sentiment_col = required_column(&batch, "Sentiment")?;
        let subjectivity_col = required_column(&batch, "Subjectivity")?;
        let dim1_col = required_column(&batch, "Dimension 1")?;
        let dim2_col = required_column(&batch, "Dimension 2")?;
        let raw_text_col = required_column(&batch, "RawTweet")?;

        for row in 0..batch.num_rows() {
            let abs_row = row_base + row;
            records.push(TweetRecord {
                month: string_value(month_col, row, abs_row, "Month")?,
                sentiment: f64_value(sentiment_col, row, abs_row, "Sentiment")?,
                subjectivity: f64_value(subjectivity_col, row, abs_row, "Subjectivity")?,
                dim1: f64_value(dim1_col, row, abs_row, "Dimension 1")?,
                dim2: f64_value(dim2_col, row, abs_row, "Dimension 2")?,
                raw_text: string_value(raw_text_col, row, abs_row, "RawTweet")?,
            });
        }
        row_base += batch.num_rows();
    }

    Ok(TweetDataset::from_records(records))
}

// -- Arrow helpers --

fn required_column<'a>(
    batch: &'a RecordBatch,
    name: &str,
) -> Result<&'a Arc<dyn Array>, LoadError> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| LoadError::MissingColumn(name.to_string()))?;
    Ok(batch.column(idx))
}

fn string_value(
    col: &Arc<dyn Array>,
    row: usize,
    abs_row: usize,
    column: &str,
) -> Result<String, LoadError> {
    if col.is_null(row) {
        return Err(bad_field(abs_row, column, "null value"));
    }
    match col.data_type() {
        DataType::Utf8 => {
            if let Some(arr) = col.as_any().downcast_ref::<StringArray>() {
                Ok(arr.value(row).to_string())
            } else {
                Err(bad_field(abs_row, column, "expected StringArray"))
            }
        }
        DataType::LargeUtf8 => {
            let arr = col.as_string::<i64>();
            Ok(arr.value(row).to_string())
        }
        other => Err(bad_field(
            abs_row,
            column,
            &format!("expected a string column, got {other:?}"),
        )),
    }
}

fn f64_value(
    col: &Arc<dyn Array>,
    row: usize,
    abs_row: usize,
    column: &str,
) -> Result<f64, LoadError> {
    if col.is_null(row) {
        return Err(bad_field(abs_row, column, "null value"));
    }
    match col.data_type() {
        DataType::Float64 => {
            if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
                Ok(arr.value(row))
            } else {
                Err(bad_field(abs_row, column, "expected Float64Array"))
            }
        }
        DataType::Float32 => {
            if let Some(arr) = col.as_any().downcast_ref::<Float32Array>() {
                Ok(arr.value(row) as f64)
            } else {
                Err(bad_field(abs_row, column, "expected Float32Array"))
            }
        }
        other => Err(bad_field(
            abs_row,
            column,
            &format!("expected a float column, got {other:?}"),
        )),
    }
}

fn bad_field(row: usize, column: &str, message: &str) -> LoadError {
    LoadError::BadField {
        row,
        message: format!("column '{column}': {message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const CSV_HEADER: &str = "Month,Sentiment,Subjectivity,Dimension 1,Dimension 2,RawTweet";

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "{contents}").unwrap();
        path
    }

    #[test]
    fn csv_happy_path() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            &tmp,
            "tweets.csv",
            &format!(
                "{CSV_HEADER}\n\
                 January,0.5,0.2,1.0,2.0,\"hello, world\"\n\
                 February,-0.9,0.8,3.0,4.0,bye\n"
            ),
        );

        let ds = load_file(&path).expect("load csv");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.months(), ["January", "February"]);
        assert_eq!(ds.records[0].raw_text, "hello, world");
        assert_eq!(ds.records[1].dim2, 4.0);
        assert_eq!(ds.sentiment_range(), (-0.9, 0.5));
    }

    #[test]
    fn csv_missing_column_is_named() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            &tmp,
            "tweets.csv",
            "Month,Sentiment,Dimension 1,Dimension 2,RawTweet\nJanuary,0.5,1.0,2.0,hi\n",
        );

        let err = load_file(&path).unwrap_err();
        match err {
            LoadError::MissingColumn(name) => assert_eq!(name, "Subjectivity"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn csv_header_only_is_an_empty_dataset() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "tweets.csv", &format!("{CSV_HEADER}\n"));

        let ds = load_file(&path).expect("load empty csv");
        assert!(ds.is_empty());
        assert_eq!(ds.sentiment_range(), (-1.0, 1.0));
    }

    #[test]
    fn csv_unparsable_cell_reports_the_row() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            &tmp,
            "tweets.csv",
            &format!("{CSV_HEADER}\nJanuary,not-a-number,0.2,1.0,2.0,hi\n"),
        );

        let err = load_file(&path).unwrap_err();
        match err {
            LoadError::BadField { row, .. } => assert_eq!(row, 0),
            other => panic!("expected BadField, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_file(Path::new("/nonexistent/tweets.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "tweets.xlsx", "junk");

        let err = load_file(&path).unwrap_err();
        match err {
            LoadError::UnsupportedExtension(ext) => assert_eq!(ext, "xlsx"),
            other => panic!("expected UnsupportedExtension, got {other:?}"),
        }
    }

    #[test]
    fn json_happy_path() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            &tmp,
            "tweets.json",
            r#"[
                {"Month": "January", "Sentiment": 0.5, "Subjectivity": 0.2,
                 "Dimension 1": 1.0, "Dimension 2": 2.0, "RawTweet": "hi"},
                {"Month": "January", "Sentiment": -0.9, "Subjectivity": 0.8,
                 "Dimension 1": 3.0, "Dimension 2": 4.0, "RawTweet": "bye"}
            ]"#,
        );

        let ds = load_file(&path).expect("load json");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.months(), ["January"]);
        assert_eq!(ds.records[1].raw_text, "bye");
    }

    #[test]
    fn json_missing_column_is_named() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            &tmp,
            "tweets.json",
            r#"[{"Month": "January", "Sentiment": 0.5, "Subjectivity": 0.2,
                 "Dimension 1": 1.0, "Dimension 2": 2.0}]"#,
        );

        let err = load_file(&path).unwrap_err();
        match err {
            LoadError::MissingColumn(name) => assert_eq!(name, "RawTweet"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn json_non_array_root_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "tweets.json", r#"{"Month": "January"}"#);

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::BadField { .. }));
    }
}
