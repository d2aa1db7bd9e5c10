use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::CandidateFilter;
use crate::data::pool::CarSource;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Right side panel – selected cars, search, candidates
// ---------------------------------------------------------------------------

/// Render the selection panel.  Clicks are applied once the panel is drawn.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let mut to_remove: Option<String> = None;
    let mut to_add: Option<String> = None;

    ui.heading("Selected");
    ui.separator();

    if state.store.selected().is_empty() {
        ui.label(RichText::new("Nothing selected.").weak());
    } else {
        let max_height = ui.available_height() * 0.5;
        TableBuilder::new(ui)
            .id_salt("selected_cars")
            .max_scroll_height(max_height)
            .column(Column::exact(4.0))
            .column(Column::remainder())
            .column(Column::auto())
            .body(|mut body| {
                for car in state.store.selected() {
                    let color = state.color_map.color_for(&car.id);
                    body.row(38.0, |mut row| {
                        row.col(|ui: &mut Ui| {
                            let rect = ui.available_rect_before_wrap();
                            ui.painter().rect_filled(rect, 0.0, color);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.vertical(|ui: &mut Ui| {
                                ui.label(car.display_name());
                                ui.label(RichText::new(car.info()).small().weak());
                            });
                        });
                        row.col(|ui: &mut Ui| {
                            if ui.small_button("🗑").on_hover_text("Remove").clicked() {
                                to_remove = Some(car.id.clone());
                            }
                        });
                    });
                }
            });
    }

    ui.add_space(6.0);
    ui.add(
        egui::TextEdit::singleline(&mut state.search_text)
            .hint_text("Search cars")
            .desired_width(f32::INFINITY),
    );
    ui.separator();

    let candidates = state.candidates();
    if candidates.is_empty() {
        ui.label(RichText::new("No matching cars.").weak());
    }
    ScrollArea::vertical()
        .id_salt("candidates")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for car in &candidates {
                if ui
                    .selectable_label(false, car.display_name())
                    .on_hover_text("Add to chart")
                    .clicked()
                {
                    to_add = Some(car.id.clone());
                }
            }
        });

    if let Some(id) = to_remove {
        state.remove_car(&id);
    }
    if let Some(id) = to_add {
        state.add_car(&id);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} cars loaded, {} selected",
            state.store.source().len(),
            state.store.selected().len()
        ));

        ui.separator();

        let filter = state.store.candidate_filter();
        if ui
            .selectable_label(filter.require_complete, "Complete records only")
            .clicked()
        {
            state.store.set_candidate_filter(CandidateFilter {
                require_complete: !filter.require_complete,
            });
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open car data")
        .add_filter("Supported files", &["json", "csv", "parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
