use egui::{ComboBox, Ui};
use tiffin_business::{
    ActionKind, DashboardCommand, OrderStatus, OrdersFilter, Resource, Row, ViewFilter,
    order_columns, project,
};

use super::{PageCtx, default_command, find_row, page_header};
use crate::widgets::{DataTable, filter_combo, search_box};

const STATUS_PLACEHOLDER: &str = "Set status";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderAction {
    View,
    SetStatus(OrderStatus),
}

#[derive(Debug, Default)]
pub struct OrdersPage {
    pub filter: OrdersFilter,
}

/// The workflow state of a row, if its raw status is one.
fn current_status(row: &Row) -> Option<OrderStatus> {
    row.get("status")
        .and_then(|status| status.to_string().parse::<OrderStatus>().ok())
}

/// Status picker plus a View button.
///
/// Picking the status the order already has emits nothing.
fn order_actions(ui: &mut Ui, row: &Row) -> Option<OrderAction> {
    let current = current_status(row);
    let mut picked = None;

    ComboBox::from_id_salt("order_status")
        .width(140.0)
        .selected_text(current.map_or(STATUS_PLACEHOLDER, OrderStatus::label))
        .show_ui(ui, |ui| {
            for status in OrderStatus::ALL {
                if ui
                    .selectable_label(current == Some(status), status.label())
                    .clicked()
                {
                    picked = Some(status);
                }
            }
        });

    if ui.small_button("View").clicked() {
        return Some(OrderAction::View);
    }
    picked
        .filter(|status| Some(*status) != current)
        .map(OrderAction::SetStatus)
}

impl OrdersPage {
    pub fn show(&mut self, ui: &mut Ui, ctx: &PageCtx<'_>) -> Vec<DashboardCommand> {
        page_header(ui, "Orders", |ui| {
            search_box(ui, &mut self.filter.search);
            filter_combo(ui, "orders_status_filter", "Status", &mut self.filter.status);
        });

        let columns = order_columns();
        let rows = project(self.filter.apply(&ctx.data.orders[..]));
        let clicked = DataTable::new("orders_table", &columns)
            .max_rows(ctx.max_rows)
            .loading(ctx.data.is_loading(Resource::Orders))
            .custom_actions(order_actions)
            .show(ui, &rows);

        let Some(action) = clicked else {
            return Vec::new();
        };
        let command = match action.kind {
            ActionKind::Custom(OrderAction::View) => {
                find_row(&rows, action.key).map(|row| DashboardCommand::View {
                    resource: Resource::Orders,
                    row: row.clone(),
                })
            }
            ActionKind::Custom(OrderAction::SetStatus(status)) => {
                Some(DashboardCommand::ChangeOrderStatus {
                    id: action.key,
                    status,
                })
            }
            ActionKind::Default(default) => {
                default_command(Resource::Orders, &rows, action.key, default)
            }
        };
        command.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use tiffin_business::RowKey;

    use super::*;

    #[test]
    fn test_current_status_only_for_workflow_values() {
        let moving = Row::new(RowKey::new("o1")).with("status", "OUT_FOR_DELIVERY");
        let placed = Row::new(RowKey::new("o2")).with("status", "PLACED");
        let bare = Row::new(RowKey::new("o3"));

        assert_eq!(current_status(&moving), Some(OrderStatus::OutForDelivery));
        assert_eq!(current_status(&placed), None);
        assert_eq!(current_status(&bare), None);
    }

    #[test]
    fn test_actions_cell_has_view_button() {
        let row = Row::new(RowKey::new("o1")).with("status", "pending");
        let mut harness = Harness::new_ui(|ui| {
            order_actions(ui, &row);
        });
        harness.step();

        assert!(harness.query_by_label("View").is_some());
    }
}
