use egui::Ui;
use tiffin_business::{
    ActionKind, ActionSet, DashboardCommand, FoodsFilter, ModalRequest, Resource, ViewFilter,
    food_columns, project,
};

use super::{PageCtx, default_command, page_header};
use crate::widgets::{DataTable, create_button, filter_combo, search_box};

#[derive(Debug, Default)]
pub struct FoodsPage {
    pub filter: FoodsFilter,
}

impl FoodsPage {
    pub fn show(&mut self, ui: &mut Ui, ctx: &PageCtx<'_>) -> Vec<DashboardCommand> {
        let mut commands = Vec::new();
        page_header(ui, "Foods", |ui| {
            search_box(ui, &mut self.filter.search);
            filter_combo(
                ui,
                "foods_availability_filter",
                "Availability",
                &mut self.filter.availability,
            );
            if create_button(ui, Resource::Foods.noun()) {
                commands.push(DashboardCommand::OpenModal(ModalRequest::Create(
                    Resource::Foods,
                )));
            }
        });

        let columns = food_columns();
        let rows = project(self.filter.apply(&ctx.data.foods[..]));
        let clicked = DataTable::new("foods_table", &columns)
            .max_rows(ctx.max_rows)
            .loading(ctx.data.is_loading(Resource::Foods))
            .actions(ActionSet::NONE.with_view().with_edit().with_delete())
            .show(ui, &rows);

        if let Some(action) = clicked {
            let ActionKind::Default(default) = action.kind;
            commands.extend(default_command(Resource::Foods, &rows, action.key, default));
        }
        commands
    }
}
