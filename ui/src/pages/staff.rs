use egui::Ui;
use tiffin_business::{
    DashboardCommand, ModalRequest, Resource, StaffFilter, ViewFilter, project, staff_columns,
};

use super::users::{account_actions, account_command};
use super::{PageCtx, page_header};
use crate::widgets::{DataTable, create_button, search_box};

#[derive(Debug, Default)]
pub struct StaffPage {
    pub filter: StaffFilter,
}

impl StaffPage {
    pub fn show(&mut self, ui: &mut Ui, ctx: &PageCtx<'_>) -> Vec<DashboardCommand> {
        let mut commands = Vec::new();
        page_header(ui, "Staff", |ui| {
            search_box(ui, &mut self.filter.search);
            if create_button(ui, Resource::Staff.noun()) {
                commands.push(DashboardCommand::OpenModal(ModalRequest::Create(
                    Resource::Staff,
                )));
            }
        });

        let columns = staff_columns();
        let rows = project(self.filter.apply(&ctx.data.staff[..]));
        let clicked = DataTable::new("staff_table", &columns)
            .max_rows(ctx.max_rows)
            .loading(ctx.data.is_loading(Resource::Staff))
            .custom_actions(account_actions)
            .show(ui, &rows);

        if let Some(action) = clicked {
            commands.extend(account_command(Resource::Staff, &rows, action.key, action.kind));
        }
        commands
    }
}
