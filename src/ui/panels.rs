use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::{AppState, SelectionState};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("TweetScope");
        ui.separator();

        ui.label(format!(
            "{} tweets loaded, {} shown",
            state.dataset.len(),
            state.view.len()
        ));

        if let SelectionState::Selected(rows) = &state.selection {
            ui.separator();
            ui.label(format!("{} selected", rows.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter panel: month dropdown plus the two score-range
/// controls. Any change replaces the criteria and refilters.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Month dropdown ----
    ui.strong("Month");
    let months = state.dataset.months().to_vec();
    egui::ComboBox::from_id_salt("month")
        .selected_text(state.criteria.month.clone())
        .show_ui(ui, |ui: &mut Ui| {
            for month in &months {
                if ui
                    .selectable_label(state.criteria.month == *month, month)
                    .clicked()
                {
                    state.set_month(month.clone());
                }
            }
        });
    ui.separator();

    // ---- Sentiment range ----
    ui.strong("Sentiment Score");
    let (lo, hi) = score_range_sliders(
        ui,
        "sentiment",
        (state.criteria.sentiment.lo, state.criteria.sentiment.hi),
        state.dataset.sentiment_range(),
    );
    state.set_sentiment_range(lo, hi);
    ui.separator();

    // ---- Subjectivity range ----
    ui.strong("Subjectivity Score");
    let (lo, hi) = score_range_sliders(
        ui,
        "subjectivity",
        (state.criteria.subjectivity.lo, state.criteria.subjectivity.hi),
        state.dataset.subjectivity_range(),
    );
    state.set_subjectivity_range(lo, hi);
}

/// A lo/hi slider pair over `bounds`. Each slider is limited by the other
/// endpoint, so the returned pair always satisfies `lo <= hi`.
fn score_range_sliders(
    ui: &mut Ui,
    id: &str,
    (mut lo, mut hi): (f64, f64),
    (min, max): (f64, f64),
) -> (f64, f64) {
    ui.push_id(id, |ui: &mut Ui| {
        ui.add(
            egui::Slider::new(&mut lo, min..=hi)
                .text("min")
                .fixed_decimals(2),
        );
        ui.add(
            egui::Slider::new(&mut hi, lo..=max)
                .text("max")
                .fixed_decimals(2),
        );
    });
    (lo, hi)
}

// ---------------------------------------------------------------------------
// Bottom panel – raw tweet table
// ---------------------------------------------------------------------------

/// Render the raw text of the currently selected points.
pub fn tweet_table(ui: &mut Ui, state: &AppState) {
    match &state.selection {
        SelectionState::Idle => {
            ui.label("Raw Tweets — shift-drag a rectangle on the plot to inspect points.");
        }
        SelectionState::Selected(rows) => {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong(format!("Raw Tweets ({})", rows.len()));
                    });
                })
                .body(|mut body| {
                    for text in rows {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.label(text);
                            });
                        });
                    }
                });
        }
    }
}
