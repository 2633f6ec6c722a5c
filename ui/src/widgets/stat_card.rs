use egui::{Frame, Margin, Response, RichText, Ui};

pub const STAT_CARD_WIDTH: f32 = 180.0;

/// A framed headline number with a caption above it.
pub fn stat_card(ui: &mut Ui, title: &str, value: &str) -> Response {
    Frame::group(ui.style())
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_min_width(STAT_CARD_WIDTH);
            ui.vertical(|ui| {
                ui.label(RichText::new(title).weak());
                ui.heading(value);
            });
        })
        .response
}
