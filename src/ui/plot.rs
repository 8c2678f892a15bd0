use eframe::egui::{Color32, PointerButton, Ui};
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::color::ScoreGradient;
use crate::data::view::PlotPoint;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Tweet scatter (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter of the current view and handle rectangle selection.
///
/// Shift + primary-button drag draws a selection rectangle in plot
/// coordinates; on release the contained points are reported to the
/// controller together with the version of the view that was rendered.
pub fn scatter_plot(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The dataset contains no tweets.");
        });
        return;
    }

    let gradient = ScoreGradient::new(state.dataset.sentiment_range());
    let select_mode = ui.input(|i| i.modifiers.shift);
    let rendered_version = state.view.version;
    let mut selection: Option<Vec<usize>> = None;

    Plot::new("tweet_scatter")
        .x_axis_label("Dimension 1")
        .y_axis_label("Dimension 2")
        .allow_boxed_zoom(!select_mode)
        .allow_drag(!select_mode)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for point in &state.view.points {
                let orig = state.view.indices[point.local_index];
                let sentiment = state.dataset.records[orig].sentiment;

                let dot = Points::new(vec![[point.x, point.y]])
                    .radius(2.5)
                    .color(gradient.color_for(sentiment))
                    .name(&point.hover);
                plot_ui.points(dot);
            }

            let response = plot_ui.response().clone();

            if !select_mode {
                state.drag_anchor = None;
                return;
            }

            if response.drag_started_by(PointerButton::Primary) {
                state.drag_anchor = plot_ui.pointer_coordinate().map(|p| [p.x, p.y]);
            }

            if let (Some(anchor), Some(cursor)) = (state.drag_anchor, plot_ui.pointer_coordinate())
            {
                let cursor = [cursor.x, cursor.y];
                if response.dragged_by(PointerButton::Primary) {
                    plot_ui.line(rubber_band(anchor, cursor));
                }
                if response.drag_stopped_by(PointerButton::Primary) {
                    selection = Some(locals_in_rect(&state.view.points, anchor, cursor));
                }
            }

            if response.drag_stopped_by(PointerButton::Primary) {
                state.drag_anchor = None;
            }
        });

    if let Some(locals) = selection {
        state.on_points_selected(rendered_version, &locals);
    }
}

/// The in-progress selection rectangle, drawn as a closed outline.
fn rubber_band(a: [f64; 2], b: [f64; 2]) -> Line<'static> {
    let corners = vec![
        [a[0], a[1]],
        [b[0], a[1]],
        [b[0], b[1]],
        [a[0], b[1]],
        [a[0], a[1]],
    ];
    Line::new(PlotPoints::from(corners))
        .color(Color32::LIGHT_BLUE)
        .width(1.0)
}

/// Local indices of the points inside the rectangle spanned by two corners
/// (inclusive on the edges).
fn locals_in_rect(points: &[PlotPoint], a: [f64; 2], b: [f64; 2]) -> Vec<usize> {
    let (x0, x1) = (a[0].min(b[0]), a[0].max(b[0]));
    let (y0, y1) = (a[1].min(b[1]), a[1].max(b[1]));

    points
        .iter()
        .filter(|p| x0 <= p.x && p.x <= x1 && y0 <= p.y && p.y <= y1)
        .map(|p| p.local_index)
        .collect()
}
