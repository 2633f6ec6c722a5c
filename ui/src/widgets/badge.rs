use egui::{Frame, Margin, Response, RichText, Stroke, Ui};
use tiffin_business::BadgeTier;

use crate::utils::colors::tier_color;

/// A pill-shaped status label colored by tier.
///
/// Returns the inner label's response so the text stays queryable.
pub fn badge(ui: &mut Ui, text: &str, tier: BadgeTier) -> Response {
    let color = tier_color(tier);
    Frame::NONE
        .fill(color.gamma_multiply(0.15))
        .stroke(Stroke::new(1.0, color))
        .corner_radius(8.0)
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| ui.label(RichText::new(text).small().strong().color(color)))
        .inner
}
