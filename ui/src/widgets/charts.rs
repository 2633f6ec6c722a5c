//! Minimal painters for the analytics tabs.
//!
//! Geometry comes from `tiffin_business` chart scaling; these functions only
//! allocate space and draw.

use std::f32::consts::TAU;

use egui::{
    Align2, Color32, FontId, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Vec2, pos2, vec2,
};
use tiffin_business::{
    Series, SeriesPoint, bar_heights, grouped_bar_heights, line_points, pie_fractions,
};

use crate::utils::colors::palette;

const LABEL_HEIGHT: f32 = 16.0;
const BAR_GAP: f32 = 6.0;
const PIE_SEGMENTS: usize = 64;

fn axis_color(ui: &Ui) -> Color32 {
    ui.visuals().widgets.noninteractive.bg_stroke.color
}

fn label_color(ui: &Ui) -> Color32 {
    ui.visuals().weak_text_color()
}

/// Chart title drawn as a regular label so it is visible to screen readers.
pub fn chart_title(ui: &mut Ui, title: &str) -> Response {
    ui.strong(title)
}

pub fn bar_chart(ui: &mut Ui, points: &[SeriesPoint], height: f32) -> Response {
    let width = ui.available_width();
    let (response, painter) =
        ui.allocate_painter(vec2(width, height + LABEL_HEIGHT), Sense::hover());
    let plot = Rect::from_min_size(response.rect.min, vec2(width, height));
    painter.hline(plot.x_range(), plot.bottom(), Stroke::new(1.0, axis_color(ui)));

    if points.is_empty() {
        return response;
    }

    let slot = width / points.len() as f32;
    let bar_width = (slot - BAR_GAP).max(1.0);
    for (i, (point, bar)) in points.iter().zip(bar_heights(points, height)).enumerate() {
        let left = plot.left() + i as f32 * slot + BAR_GAP / 2.0;
        let rect = Rect::from_min_max(
            pos2(left, plot.bottom() - bar),
            pos2(left + bar_width, plot.bottom()),
        );
        painter.rect_filled(rect, 2.0, palette(0));
        painter.text(
            pos2(left + bar_width / 2.0, plot.bottom() + 2.0),
            Align2::CENTER_TOP,
            &point.label,
            FontId::proportional(10.0),
            label_color(ui),
        );
    }
    response.on_hover_text(series_summary(points))
}

/// Bars grouped per label, one color per series, on a shared scale.
pub fn grouped_bar_chart(ui: &mut Ui, series: &[Series], height: f32) -> Response {
    let width = ui.available_width();
    let (response, painter) =
        ui.allocate_painter(vec2(width, height + LABEL_HEIGHT), Sense::hover());
    let plot = Rect::from_min_size(response.rect.min, vec2(width, height));
    painter.hline(plot.x_range(), plot.bottom(), Stroke::new(1.0, axis_color(ui)));

    let groups = series.iter().map(|s| s.points.len()).max().unwrap_or(0);
    if groups == 0 {
        return response;
    }

    let heights = grouped_bar_heights(series, height);
    let slot = width / groups as f32;
    let bar_width = ((slot - BAR_GAP) / series.len() as f32).max(1.0);
    for (s, bars) in heights.iter().enumerate() {
        for (g, bar) in bars.iter().enumerate() {
            let left = plot.left() + g as f32 * slot + BAR_GAP / 2.0 + s as f32 * bar_width;
            let rect = Rect::from_min_max(
                pos2(left, plot.bottom() - bar),
                pos2(left + bar_width, plot.bottom()),
            );
            painter.rect_filled(rect, 1.0, palette(s));
        }
    }
    if let Some(first) = series.first() {
        for (g, point) in first.points.iter().enumerate() {
            painter.text(
                pos2(plot.left() + (g as f32 + 0.5) * slot, plot.bottom() + 2.0),
                Align2::CENTER_TOP,
                &point.label,
                FontId::proportional(10.0),
                label_color(ui),
            );
        }
    }
    response
}

pub fn line_chart(ui: &mut Ui, points: &[SeriesPoint], height: f32) -> Response {
    let width = ui.available_width();
    let (response, painter) = ui.allocate_painter(vec2(width, height), Sense::hover());
    let rect = response.rect;
    painter.hline(rect.x_range(), rect.bottom(), Stroke::new(1.0, axis_color(ui)));

    let vertices: Vec<Pos2> = line_points(points, width, height)
        .into_iter()
        .map(|(x, y)| rect.min + vec2(x, y))
        .collect();
    let stroke = Stroke::new(2.0, palette(1));
    if vertices.len() > 1 {
        painter.add(Shape::line(vertices.clone(), stroke));
    }
    for vertex in vertices {
        painter.circle_filled(vertex, 3.0, stroke.color);
    }
    if points.is_empty() {
        response
    } else {
        response.on_hover_text(series_summary(points))
    }
}

/// A ring of slices; with nothing to show only the outline is drawn.
pub fn pie_chart(ui: &mut Ui, points: &[SeriesPoint], radius: f32) -> Response {
    let (response, painter) = ui.allocate_painter(Vec2::splat(radius * 2.0), Sense::hover());
    let center = response.rect.center();
    painter.circle_stroke(center, radius, Stroke::new(1.0, axis_color(ui)));

    let mut start = 0.0_f32;
    for (i, fraction) in pie_fractions(points).into_iter().enumerate() {
        if fraction <= 0.0 {
            continue;
        }
        let sweep = fraction * TAU;
        let steps = ((PIE_SEGMENTS as f32 * fraction).ceil() as usize).max(2);
        let rim: Vec<Pos2> = (0..=steps)
            .map(|step| {
                let angle = start + sweep * step as f32 / steps as f32;
                center + radius * Vec2::angled(angle)
            })
            .collect();
        // A slice wider than half a turn is not convex, so each is drawn as a fan.
        for window in rim.windows(2) {
            painter.add(Shape::convex_polygon(
                vec![center, window[0], window[1]],
                palette(i),
                Stroke::NONE,
            ));
        }
        start += sweep;
    }
    if points.is_empty() {
        response
    } else {
        response.on_hover_text(series_summary(points))
    }
}

/// Legend row for a pie or multi-series chart.
pub fn legend(ui: &mut Ui, labels: &[&str]) {
    ui.horizontal_wrapped(|ui| {
        for (i, label) in labels.iter().enumerate() {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, palette(i));
            ui.label(*label);
        }
    });
}

fn series_summary(points: &[SeriesPoint]) -> String {
    points
        .iter()
        .map(|point| format!("{}: {}", point.label, point.value))
        .collect::<Vec<_>>()
        .join("\n")
}
