use egui::{Button, RichText, Ui};
use tiffin_business::{
    ActionKind, DashboardCommand, ModalRequest, Resource, RestaurantsFilter, Row, ViewFilter,
    project, restaurant_columns,
};

use super::{PageCtx, default_command, find_row, page_header};
use crate::utils::colors::{COLOR_GREEN, COLOR_RED};
use crate::widgets::{DataTable, create_button, filter_combo, search_box};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RestaurantAction {
    View,
    Approve,
    Reject,
}

/// View for every row; Approve and Reject only while approval is pending.
fn restaurant_actions(ui: &mut Ui, row: &Row) -> Option<RestaurantAction> {
    let mut clicked = None;
    if ui.small_button("View").clicked() {
        clicked = Some(RestaurantAction::View);
    }
    let approved = row.get("approval").is_some_and(|value| value.is_truthy());
    if !approved {
        if ui
            .add(Button::new(RichText::new("Approve").color(COLOR_GREEN)).small())
            .clicked()
        {
            clicked = Some(RestaurantAction::Approve);
        }
        if ui
            .add(Button::new(RichText::new("Reject").color(COLOR_RED)).small())
            .clicked()
        {
            clicked = Some(RestaurantAction::Reject);
        }
    }
    clicked
}

#[derive(Debug, Default)]
pub struct RestaurantsPage {
    pub filter: RestaurantsFilter,
}

impl RestaurantsPage {
    pub fn show(&mut self, ui: &mut Ui, ctx: &PageCtx<'_>) -> Vec<DashboardCommand> {
        let mut commands = Vec::new();
        page_header(ui, "Restaurants", |ui| {
            search_box(ui, &mut self.filter.search);
            filter_combo(
                ui,
                "restaurants_approval_filter",
                "Approval",
                &mut self.filter.approval,
            );
            if create_button(ui, Resource::Restaurants.noun()) {
                commands.push(DashboardCommand::OpenModal(ModalRequest::Create(
                    Resource::Restaurants,
                )));
            }
        });

        let columns = restaurant_columns();
        let rows = project(self.filter.apply(&ctx.data.restaurants[..]));
        let clicked = DataTable::new("restaurants_table", &columns)
            .max_rows(ctx.max_rows)
            .loading(ctx.data.is_loading(Resource::Restaurants))
            .custom_actions(restaurant_actions)
            .show(ui, &rows);

        if let Some(action) = clicked {
            let id = action.key;
            let command = match action.kind {
                ActionKind::Custom(RestaurantAction::View) => {
                    find_row(&rows, id).map(|row| DashboardCommand::View {
                        resource: Resource::Restaurants,
                        row: row.clone(),
                    })
                }
                ActionKind::Custom(RestaurantAction::Approve) => {
                    Some(DashboardCommand::Approve { id })
                }
                ActionKind::Custom(RestaurantAction::Reject) => {
                    Some(DashboardCommand::Reject { id })
                }
                ActionKind::Default(default) => {
                    default_command(Resource::Restaurants, &rows, id, default)
                }
            };
            commands.extend(command);
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use tiffin_business::RowKey;

    use super::*;

    #[test]
    fn test_pending_restaurant_offers_approval() {
        let row = Row::new(RowKey::new("r1")).with("approval", false);
        let mut harness = Harness::new_ui(|ui| {
            restaurant_actions(ui, &row);
        });
        harness.step();

        assert!(harness.query_by_label("View").is_some());
        assert!(harness.query_by_label("Approve").is_some());
        assert!(harness.query_by_label("Reject").is_some());
    }

    #[test]
    fn test_approved_restaurant_only_has_view() {
        let row = Row::new(RowKey::new("r2")).with("approval", true);
        let mut harness = Harness::new_ui(|ui| {
            restaurant_actions(ui, &row);
        });
        harness.step();

        assert!(harness.query_by_label("View").is_some());
        assert!(harness.query_by_label("Approve").is_none());
    }

    #[test]
    fn test_clicking_approve_returns_action() {
        let row = Row::new(RowKey::new("r3"));
        let mut harness = Harness::new_ui_state(
            |ui, clicked: &mut Option<RestaurantAction>| {
                if let Some(action) = restaurant_actions(ui, &row) {
                    *clicked = Some(action);
                }
            },
            None,
        );
        harness.step();
        harness.get_by_label("Approve").click();
        harness.step();

        assert_eq!(*harness.state(), Some(RestaurantAction::Approve));
    }
}
