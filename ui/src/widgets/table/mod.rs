//! Generic data table.
//!
//! The table is split into smaller components:
//! - `columns`: Column definitions and widths
//! - `header`: Table header rendering
//! - `row`: Row rendering with cells and the action cell
//! - `cells`: Cell and default action button rendering
//!
//! Rows are already projected and filtered by the caller. The table only
//! truncates, formats and paints, and hands back the clicked action.

mod cells;
pub mod columns;
pub mod header;
mod row;

use std::convert::Infallible;
use std::hash::Hash;

use egui::{Id, Label, Layout, Ui};
use egui_extras::TableBuilder;
use tiffin_business::{
    ActionSet, Column, DEFAULT_MAX_ROWS, Row, RowAction, TableBody, table_body,
};

pub use cells::{default_action_buttons, render_cell};
use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;

type RenderActions<'a, A> = Box<dyn FnMut(&mut Ui, &Row) -> Option<A> + 'a>;

/// How the trailing Actions column is filled.
pub enum Actions<'a, A> {
    None,
    /// Built-in view/edit/delete buttons for the enabled handlers.
    Default(ActionSet),
    /// Caller-drawn cell; replaces the default buttons entirely.
    Custom(RenderActions<'a, A>),
}

impl<A> Actions<'_, A> {
    fn is_shown(&self) -> bool {
        match self {
            Self::None => false,
            Self::Default(set) => !set.is_empty(),
            Self::Custom(_) => true,
        }
    }
}

/// A table over pre-projected rows.
///
/// ```ignore
/// let clicked = DataTable::new("orders", &columns)
///     .max_rows(20)
///     .loading(data.is_loading(Resource::Orders))
///     .actions(ActionSet::NONE.with_view())
///     .show(ui, &rows);
/// ```
pub struct DataTable<'a, A = Infallible> {
    id: Id,
    columns: &'a [Column],
    max_rows: usize,
    loading: bool,
    actions: Actions<'a, A>,
}

impl<'a> DataTable<'a> {
    pub fn new(id_salt: impl Hash, columns: &'a [Column]) -> Self {
        Self {
            id: Id::new(id_salt),
            columns,
            max_rows: DEFAULT_MAX_ROWS,
            loading: false,
            actions: Actions::None,
        }
    }

    /// Default buttons for the handlers in `set`; missing handlers get no button.
    pub fn actions(mut self, set: ActionSet) -> Self {
        self.actions = Actions::Default(set);
        self
    }

    /// Replaces the default buttons with a custom per-row renderer.
    pub fn custom_actions<B>(
        self,
        render: impl FnMut(&mut Ui, &Row) -> Option<B> + 'a,
    ) -> DataTable<'a, B> {
        DataTable {
            id: self.id,
            columns: self.columns,
            max_rows: self.max_rows,
            loading: self.loading,
            actions: Actions::Custom(Box::new(render)),
        }
    }
}

impl<'a, A> DataTable<'a, A> {
    pub fn max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Paints the table and returns the action clicked this frame, if any.
    pub fn show(self, ui: &mut Ui, rows: &[Row]) -> Option<RowAction<A>> {
        let Self {
            id,
            columns,
            max_rows,
            loading,
            mut actions,
        } = self;
        let with_actions = actions.is_shown();
        let body = table_body(rows, max_rows, loading);
        let mut clicked = None;

        ui.push_id(id, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .resizable(false)
                .vscroll(false)
                .cell_layout(Layout::left_to_right(egui::Align::Center));
            for column in table_columns(columns.len(), with_actions) {
                builder = builder.column(column);
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    render_table_header(&mut header, columns, with_actions);
                })
                .body(|mut table_body| {
                    let TableBody::Rows(visible) = body else {
                        return;
                    };
                    for data_row in visible {
                        table_body.row(ROW_HEIGHT, |mut table_row| {
                            if let Some(action) =
                                row::render_row(&mut table_row, columns, data_row, &mut actions)
                            {
                                clicked = Some(action);
                            }
                        });
                    }
                });

            if let TableBody::Placeholder(placeholder) = body {
                ui.add_sized(
                    [ui.available_width(), ROW_HEIGHT],
                    Label::new(placeholder.text()),
                );
            }
        });

        clicked
    }
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use tiffin_business::{EMPTY_TEXT, LOADING_TEXT, RowKey, columns};

    use super::*;

    fn rows(count: usize) -> Vec<Row> {
        (0..count)
            .map(|i| {
                Row::new(RowKey::new(&format!("id-{i}")))
                    .with("name", format!("Customer {i}"))
                    .with("amount", i as f64)
            })
            .collect()
    }

    #[test]
    fn test_truncates_to_max_rows_in_order() {
        let columns = columns(&["Name", "Amount"]);
        let data = rows(15);
        let mut harness = Harness::new_ui(|ui| {
            DataTable::new("truncate", &columns).show(ui, &data);
        });
        harness.step();

        assert!(harness.query_by_label("Customer 0").is_some());
        assert!(harness.query_by_label("Customer 9").is_some());
        assert!(harness.query_by_label("Customer 10").is_none());
        assert!(harness.query_by_label("₹9.00").is_some());
    }

    #[test]
    fn test_placeholder_depends_on_loading() {
        let columns = columns(&["Name"]);
        let mut harness = Harness::new_ui_state(
            |ui, loading: &mut bool| {
                DataTable::new("empty", &columns)
                    .loading(*loading)
                    .show(ui, &[]);
            },
            true,
        );
        harness.step();
        assert!(harness.query_by_label(LOADING_TEXT).is_some());
        assert!(harness.query_by_label(EMPTY_TEXT).is_none());

        *harness.state_mut() = false;
        harness.step();
        assert!(harness.query_by_label(EMPTY_TEXT).is_some());
        assert!(harness.query_by_label(LOADING_TEXT).is_none());
    }

    #[test]
    fn test_zero_max_rows_shows_placeholder() {
        let columns = columns(&["Name"]);
        let data = rows(3);
        let mut harness = Harness::new_ui(|ui| {
            DataTable::new("zero", &columns).max_rows(0).show(ui, &data);
        });
        harness.step();
        assert!(harness.query_by_label(EMPTY_TEXT).is_some());
    }

    #[test]
    fn test_only_enabled_default_buttons_render() {
        let columns = columns(&["Name"]);
        let data = rows(1);
        let mut harness = Harness::new_ui(|ui| {
            DataTable::new("buttons", &columns)
                .actions(ActionSet::NONE.with_view().with_delete())
                .show(ui, &data);
        });
        harness.step();

        assert!(harness.query_by_label("Actions").is_some());
        assert!(harness.query_by_label("View").is_some());
        assert!(harness.query_by_label("Delete").is_some());
        assert!(harness.query_by_label("Edit").is_none());
    }

    #[test]
    fn test_no_actions_omits_actions_column() {
        let columns = columns(&["Name"]);
        let data = rows(1);
        let mut harness = Harness::new_ui(|ui| {
            DataTable::new("plain", &columns)
                .actions(ActionSet::NONE)
                .show(ui, &data);
        });
        harness.step();
        assert!(harness.query_by_label("Actions").is_none());
    }

    #[test]
    fn test_custom_renderer_replaces_defaults() {
        let columns = columns(&["Name"]);
        let data = rows(2);
        let mut harness = Harness::new_ui(|ui| {
            DataTable::new("custom", &columns)
                .actions(ActionSet::NONE.with_edit())
                .custom_actions(|ui, row| {
                    ui.button(format!("Open {}", row.key()))
                        .clicked()
                        .then_some(())
                })
                .show(ui, &data);
        });
        harness.step();

        assert!(harness.query_by_label("Open id-0").is_some());
        assert!(harness.query_by_label("Open id-1").is_some());
        assert!(harness.query_by_label("Edit").is_none());
    }
}
