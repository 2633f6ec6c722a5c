use egui::Ui;
use egui_extras::TableRow;
use tiffin_business::{ActionKind, Column, Row, RowAction, format_cell};

use super::Actions;
use super::cells::{default_action_buttons, render_cell};

/// Renders one data row and, when present, its action cell.
///
/// The action cell is scoped by the row key so widget ids stay stable when
/// rows are filtered or reordered.
pub fn render_row<A>(
    table_row: &mut TableRow<'_, '_>,
    columns: &[Column],
    row: &Row,
    actions: &mut Actions<'_, A>,
) -> Option<RowAction<A>> {
    for column in columns {
        let cell = format_cell(column, row);
        table_row.col(|ui| render_cell(ui, &cell));
    }

    let mut clicked = None;
    match actions {
        Actions::None => {}
        Actions::Default(set) => {
            let set = *set;
            if !set.is_empty() {
                table_row.col(|ui| {
                    clicked = action_cell(ui, row, |ui| default_action_buttons(ui, set))
                        .map(ActionKind::Default);
                });
            }
        }
        Actions::Custom(render) => {
            table_row.col(|ui| {
                clicked = action_cell(ui, row, |ui| render(ui, row)).map(ActionKind::Custom);
            });
        }
    }

    clicked.map(|kind| RowAction {
        key: row.key(),
        kind,
    })
}

fn action_cell<R>(ui: &mut Ui, row: &Row, add: impl FnOnce(&mut Ui) -> Option<R>) -> Option<R> {
    ui.push_id(row.key(), |ui| ui.horizontal(add).inner).inner
}
