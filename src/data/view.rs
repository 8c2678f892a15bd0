use thiserror::Error;

use super::model::TweetDataset;

// ---------------------------------------------------------------------------
// PlotPoint – what the plot layer renders and reports back
// ---------------------------------------------------------------------------

/// One scatter point handed to the plot layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    /// Embedding coordinates (`dim1`, `dim2`).
    pub x: f64,
    pub y: f64,
    /// Raw tweet text shown on hover.
    pub hover: String,
    /// Position within the filtered subset. This is what selection events
    /// reference, not the original dataset index.
    pub local_index: usize,
}

/// A selection event referenced a point outside the view it was resolved
/// against, i.e. the plot has been replaced since the selection was made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("selection index {index} is out of bounds for a view of {len} points")]
pub struct StaleSelectionError {
    pub index: usize,
    pub len: usize,
}

// ---------------------------------------------------------------------------
// FilteredView – the versioned result of one filter pass
// ---------------------------------------------------------------------------

/// The filtered subset currently on display, tagged with a version so that
/// selection events can be matched to the exact plot they were made on.
#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    pub version: u64,
    /// Original dataset indices of the rows on display, in original order.
    pub indices: Vec<usize>,
    /// Projection of those rows, `points[i].local_index == i`.
    pub points: Vec<PlotPoint>,
}

impl FilteredView {
    pub fn new(version: u64, dataset: &TweetDataset, indices: Vec<usize>) -> Self {
        let points = project(dataset, &indices);
        FilteredView {
            version,
            indices,
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Project filtered rows into plot points. Pure and total; an empty subset
/// projects to an empty point list.
pub fn project(dataset: &TweetDataset, indices: &[usize]) -> Vec<PlotPoint> {
    indices
        .iter()
        .enumerate()
        .map(|(local_index, &orig)| {
            let rec = &dataset.records[orig];
            PlotPoint {
                x: rec.dim1,
                y: rec.dim2,
                hover: rec.raw_text.clone(),
                local_index,
            }
        })
        .collect()
}

/// Map selected local indices back to raw tweet text, preserving the order
/// the plot layer delivered them in.
///
/// `view` must be the view that produced the plot the selection was made on;
/// any local index outside it fails with [`StaleSelectionError`] so the
/// caller can discard the event instead of showing mismatched rows.
pub fn resolve(
    dataset: &TweetDataset,
    view: &FilteredView,
    selected: &[usize],
) -> Result<Vec<String>, StaleSelectionError> {
    selected
        .iter()
        .map(|&local| {
            let orig = *view.indices.get(local).ok_or(StaleSelectionError {
                index: local,
                len: view.indices.len(),
            })?;
            Ok(dataset.records[orig].raw_text.clone())
        })
        .collect()
}
