use crate::data::filter::{matching_indices, FilterCriteria};
use crate::data::model::TweetDataset;
use crate::data::view::{self, FilteredView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// What the raw-tweet table is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionState {
    /// No selection on display.
    Idle,
    /// Raw text of the points picked on the current plot, in pick order.
    Selected(Vec<String>),
}

/// The full UI state, independent of rendering.
///
/// One event is processed to completion per frame interaction: every filter
/// change replaces the criteria and the view wholesale, and every selection
/// event is resolved against the exact view version it was made on.
pub struct AppState {
    /// Loaded dataset, read-only for the process lifetime.
    pub dataset: TweetDataset,

    /// Current filter controls.
    pub criteria: FilterCriteria,

    /// The filtered subset backing the visible plot (cached, versioned).
    pub view: FilteredView,

    /// Selection state machine: Idle or Selected.
    pub selection: SelectionState,

    /// Anchor of an in-progress selection drag, in plot coordinates.
    pub drag_anchor: Option<[f64; 2]>,

    /// Status message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Initial state: first distinct month, full observed score ranges,
    /// nothing selected.
    pub fn new(dataset: TweetDataset) -> Self {
        let criteria = FilterCriteria::initial(&dataset);
        let view = FilteredView::new(0, &dataset, matching_indices(&dataset, &criteria));
        AppState {
            dataset,
            criteria,
            view,
            selection: SelectionState::Idle,
            drag_anchor: None,
            status_message: None,
        }
    }

    /// Recompute the view after a filter-control change.
    ///
    /// The old view is replaced under a new version; whatever selection was
    /// on display referenced it and is discarded.
    pub fn refilter(&mut self) {
        let version = self.view.version.wrapping_add(1);
        let indices = matching_indices(&self.dataset, &self.criteria);
        self.view = FilteredView::new(version, &self.dataset, indices);
        self.selection = SelectionState::Idle;
        self.status_message = None;
    }

    pub fn set_month(&mut self, month: String) {
        if self.criteria.month != month {
            self.criteria.month = month;
            self.refilter();
        }
    }

    pub fn set_sentiment_range(&mut self, lo: f64, hi: f64) {
        if (self.criteria.sentiment.lo, self.criteria.sentiment.hi) != (lo, hi) {
            self.criteria.sentiment = (lo, hi).into();
            self.refilter();
        }
    }

    pub fn set_subjectivity_range(&mut self, lo: f64, hi: f64) {
        if (self.criteria.subjectivity.lo, self.criteria.subjectivity.hi) != (lo, hi) {
            self.criteria.subjectivity = (lo, hi).into();
            self.refilter();
        }
    }

    /// Handle a selection event from the plot layer.
    ///
    /// `view_version` is the version of the view the plot rendered when the
    /// selection was made. Events for any other version raced a filter
    /// change and are discarded, as are events whose indices fall outside
    /// the view. An empty point list clears the table.
    pub fn on_points_selected(&mut self, view_version: u64, locals: &[usize]) {
        if view_version != self.view.version {
            log::warn!(
                "discarding selection for view {view_version}, current is {}",
                self.view.version
            );
            self.status_message = Some("Selection discarded: the plot has changed".to_string());
            self.selection = SelectionState::Idle;
            return;
        }

        if locals.is_empty() {
            self.selection = SelectionState::Idle;
            return;
        }

        match view::resolve(&self.dataset, &self.view, locals) {
            Ok(texts) => {
                log::debug!("resolved {} selected tweets", texts.len());
                self.selection = SelectionState::Selected(texts);
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("discarding stale selection: {e}");
                self.status_message = Some("Selection discarded: the plot has changed".to_string());
                self.selection = SelectionState::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::TweetRecord;

    fn record(month: &str, sentiment: f64, text: &str) -> TweetRecord {
        TweetRecord {
            month: month.to_string(),
            sentiment,
            subjectivity: 0.5,
            dim1: 1.0,
            dim2: 2.0,
            raw_text: text.to_string(),
        }
    }

    fn state() -> AppState {
        AppState::new(TweetDataset::from_records(vec![
            record("Jan", 0.5, "a"),
            record("Jan", -0.5, "b"),
            record("Feb", 0.2, "c"),
        ]))
    }

    #[test]
    fn starts_idle_on_first_month_with_full_ranges() {
        let st = state();
        assert_eq!(st.criteria.month, "Jan");
        assert_eq!(
            (st.criteria.sentiment.lo, st.criteria.sentiment.hi),
            (-0.5, 0.5)
        );
        assert_eq!(st.selection, SelectionState::Idle);
        assert_eq!(st.view.indices, [0, 1]);
    }

    #[test]
    fn selection_event_moves_to_selected() {
        let mut st = state();
        let version = st.view.version;
        st.on_points_selected(version, &[1, 0]);
        assert_eq!(
            st.selection,
            SelectionState::Selected(vec!["b".to_string(), "a".to_string()])
        );
    }

    #[test]
    fn empty_selection_event_clears_to_idle() {
        let mut st = state();
        let version = st.view.version;
        st.on_points_selected(version, &[0]);
        st.on_points_selected(version, &[]);
        assert_eq!(st.selection, SelectionState::Idle);
    }

    #[test]
    fn filter_change_discards_selection_and_bumps_version() {
        let mut st = state();
        let version = st.view.version;
        st.on_points_selected(version, &[0]);
        assert!(matches!(st.selection, SelectionState::Selected(_)));

        st.set_month("Feb".to_string());
        assert_eq!(st.selection, SelectionState::Idle);
        assert_eq!(st.view.version, version + 1);
        assert_eq!(st.view.indices, [2]);
    }

    #[test]
    fn stale_version_selection_is_discarded() {
        let mut st = state();
        let old_version = st.view.version;
        st.set_month("Feb".to_string());

        st.on_points_selected(old_version, &[0]);
        assert_eq!(st.selection, SelectionState::Idle);
        assert!(st.status_message.is_some());
    }

    #[test]
    fn out_of_bounds_selection_is_discarded() {
        let mut st = state();
        let version = st.view.version;
        st.on_points_selected(version, &[5]);
        assert_eq!(st.selection, SelectionState::Idle);
        assert!(st.status_message.is_some());
    }

    #[test]
    fn unchanged_range_does_not_invalidate_the_view() {
        let mut st = state();
        let version = st.view.version;
        st.on_points_selected(version, &[0]);

        let (lo, hi) = (st.criteria.sentiment.lo, st.criteria.sentiment.hi);
        st.set_sentiment_range(lo, hi);
        assert_eq!(st.view.version, version);
        assert!(matches!(st.selection, SelectionState::Selected(_)));
    }

    #[test]
    fn narrowed_range_refilters() {
        let mut st = state();
        st.set_sentiment_range(0.0, 0.5);
        assert_eq!(st.view.indices, [0]);
    }
}
