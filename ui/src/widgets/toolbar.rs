//! Search box and filter pickers shown above list tables.

use std::hash::Hash;

use egui::{ComboBox, Response, TextEdit, Ui};
use tiffin_business::FilterOption;

pub const SEARCH_HINT: &str = "Search...";
const ALL_LABEL: &str = "All";

pub fn search_box(ui: &mut Ui, query: &mut String) -> Response {
    ui.add(
        TextEdit::singleline(query)
            .hint_text(SEARCH_HINT)
            .desired_width(220.0),
    )
}

/// Combo box over `T::OPTIONS` plus an "All" entry that clears the filter.
///
/// Returns `true` when the selection changed.
pub fn filter_combo<T: FilterOption>(
    ui: &mut Ui,
    id_salt: impl Hash,
    label: &str,
    selected: &mut Option<T>,
) -> bool {
    let before = *selected;
    ui.label(label);
    ComboBox::from_id_salt(id_salt)
        .selected_text(selected.map_or(ALL_LABEL, FilterOption::label))
        .show_ui(ui, |ui| {
            ui.selectable_value(selected, None, ALL_LABEL);
            for option in T::OPTIONS {
                ui.selectable_value(selected, Some(*option), option.label());
            }
        });
    before != *selected
}

/// "+ New <noun>" button. Returns `true` when clicked.
pub fn create_button(ui: &mut Ui, noun: &str) -> bool {
    ui.button(format!("➕ New {noun}")).clicked()
}
