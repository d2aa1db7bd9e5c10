use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::data::model::{Car, Category};
use crate::data::pool::CarSource;
use crate::series::{SeriesGroup, nearest_category};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Comparison chart (central panel)
// ---------------------------------------------------------------------------

/// Render the comparison chart in the central panel.
pub fn car_chart(ui: &mut Ui, state: &AppState) {
    if state.series.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Pick cars from the list to compare them");
        });
        return;
    }

    let last = (Category::ALL.len() - 1) as f64;

    Plot::new("car_chart")
        .legend(Legend::default())
        .y_axis_label("Share of maximum")
        .x_axis_formatter(|mark, _range| category_label(mark.value))
        .x_grid_spacer(egui_plot::uniform_grid_spacer(|_| [1.0, 1.0, 1.0]))
        .label_formatter(|_, _| String::new())
        .include_x(-0.25)
        .include_x(last + 0.25)
        .include_y(0.0)
        .include_y(1.05)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for group in &state.series.groups {
                let color = state.color_map.color_for(&group.id);
                let name = state
                    .store
                    .source()
                    .find(&group.id)
                    .map(Car::display_name)
                    .unwrap_or_else(|| group.id.clone());

                // Missing values split a car's line into separate runs.
                for segment in line_segments(group) {
                    let line = Line::new(PlotPoints::from(segment))
                        .name(&name)
                        .color(color)
                        .width(1.5);
                    plot_ui.line(line);
                }
            }

            let Some(pointer) = plot_ui.pointer_coordinate() else {
                return;
            };
            let Some(category) = nearest_category(pointer.x) else {
                return;
            };
            let x = category.index() as f64;
            for point in state.series.hover_points(category) {
                let (Some(value), Some(raw)) = (point.value, point.raw) else {
                    continue;
                };
                let color = state.color_map.color_for(&point.id);
                plot_ui.points(
                    Points::new(vec![[x, value]])
                        .radius(5.0)
                        .filled(false)
                        .color(color),
                );
                plot_ui.text(Text::new(
                    PlotPoint::new(x, value - 0.04),
                    RichText::new(category.format_value(raw)).color(Color32::from_gray(112)),
                ));
            }
        });
}

/// Axis label for a grid mark; only whole positions carry a category name.
fn category_label(x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    Category::from_index(rounded as usize)
        .map(|c| c.label().to_string())
        .unwrap_or_default()
}

/// Contiguous runs of present values, as `[x, y]` pairs.  Always at least one
/// run, empty when every value is missing, so each car keeps a legend entry.
fn line_segments(group: &SeriesGroup) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for point in &group.points {
        match point.value {
            Some(value) if value.is_finite() => {
                current.push([point.category.index() as f64, value]);
            }
            _ => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() || segments.is_empty() {
        segments.push(current);
    }
    segments
}
