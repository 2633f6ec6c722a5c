use egui::Ui;
use tiffin_business::{
    ActionKind, ActionSet, DashboardCommand, ModalRequest, Resource, SubscriptionsFilter,
    ViewFilter, plan_columns, project, subscription_columns,
};

use super::{PageCtx, default_command, page_header};
use crate::widgets::{DataTable, create_button, filter_combo, search_box};

/// Customer subscriptions above, the plans they subscribe to below.
#[derive(Debug, Default)]
pub struct SubscriptionPage {
    pub filter: SubscriptionsFilter,
}

impl SubscriptionPage {
    pub fn show(&mut self, ui: &mut Ui, ctx: &PageCtx<'_>) -> Vec<DashboardCommand> {
        let mut commands = Vec::new();
        page_header(ui, "Subscriptions", |ui| {
            search_box(ui, &mut self.filter.search);
            filter_combo(
                ui,
                "subscriptions_status_filter",
                "Status",
                &mut self.filter.status,
            );
        });

        let columns = subscription_columns();
        let rows = project(self.filter.apply(&ctx.data.subscriptions[..]));
        let clicked = DataTable::new("subscriptions_table", &columns)
            .max_rows(ctx.max_rows)
            .loading(ctx.data.is_loading(Resource::Subscriptions))
            .actions(ActionSet::NONE.with_view())
            .show(ui, &rows);
        if let Some(action) = clicked {
            let ActionKind::Default(default) = action.kind;
            commands.extend(default_command(
                Resource::Subscriptions,
                &rows,
                action.key,
                default,
            ));
        }

        ui.add_space(24.0);
        page_header(ui, "Plans", |ui| {
            if create_button(ui, Resource::SubscriptionPlans.noun()) {
                commands.push(DashboardCommand::OpenModal(ModalRequest::Create(
                    Resource::SubscriptionPlans,
                )));
            }
        });

        let columns = plan_columns();
        let plans = project(&ctx.data.plans);
        let clicked = DataTable::new("plans_table", &columns)
            .max_rows(ctx.max_rows)
            .loading(ctx.data.is_loading(Resource::SubscriptionPlans))
            .actions(ActionSet::NONE.with_edit().with_delete())
            .show(ui, &plans);
        if let Some(action) = clicked {
            let ActionKind::Default(default) = action.kind;
            commands.extend(default_command(
                Resource::SubscriptionPlans,
                &plans,
                action.key,
                default,
            ));
        }
        commands
    }
}
