//! Column sizing for the generic table.

use egui_extras::Column;

pub const MIN_COLUMN_WIDTH: f32 = 80.0;
pub const ACTIONS_WIDTH: f32 = 200.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// One flexible column per data column, plus a trailing Actions column.
pub fn table_columns(data_columns: usize, with_actions: bool) -> Vec<Column> {
    let mut columns: Vec<Column> = (0..data_columns)
        .map(|_| Column::auto().at_least(MIN_COLUMN_WIDTH).clip(true))
        .collect();
    if with_actions {
        columns.push(Column::remainder().at_least(ACTIONS_WIDTH));
    }
    columns
}
