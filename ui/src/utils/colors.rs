//! Shared color constants for the UI.

use egui::Color32;
use tiffin_business::BadgeTier;

/// Forest green for delivered/active/approved badges.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for cancelled/rejected and anything unrecognised.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber for placed/pending badges.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Blue for in-progress badges (preparing, out for delivery, inactive).
pub const COLOR_BLUE: Color32 = Color32::from_rgb(13, 110, 253);

/// Chart palette, cycled by series or slice index.
pub const CHART_PALETTE: [Color32; 6] = [
    Color32::from_rgb(255, 112, 67),
    Color32::from_rgb(66, 165, 245),
    Color32::from_rgb(102, 187, 106),
    Color32::from_rgb(171, 71, 188),
    Color32::from_rgb(255, 202, 40),
    Color32::from_rgb(38, 198, 218),
];

pub fn tier_color(tier: BadgeTier) -> Color32 {
    match tier {
        BadgeTier::Positive => COLOR_GREEN,
        BadgeTier::Warning => COLOR_AMBER,
        BadgeTier::Informational => COLOR_BLUE,
        BadgeTier::Negative => COLOR_RED,
    }
}

pub fn palette(index: usize) -> Color32 {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}
