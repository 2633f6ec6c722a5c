use egui::Ui;
use egui_extras::TableRow;
use tiffin_business::Column;

pub const ACTIONS_HEADER: &str = "Actions";

/// Renders the header row: one bold label per column, then "Actions" if shown.
pub fn render_table_header(header: &mut TableRow<'_, '_>, columns: &[Column], with_actions: bool) {
    for column in columns {
        header.col(|ui| render_header_cell(ui, column.label()));
    }
    if with_actions {
        header.col(|ui| render_header_cell(ui, ACTIONS_HEADER));
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}
