use egui::{Button, Ui};
use tiffin_business::{
    ActionKind, ActionSet, DashboardCommand, DefaultAction, ModalRequest, Resource, Row, RowKey,
    UsersFilter, ViewFilter, project, user_columns,
};

use super::{PageCtx, default_command, page_header};
use crate::widgets::table::default_action_buttons;
use crate::widgets::{DataTable, create_button, filter_combo, search_box};

pub(crate) const RESET_PASSWORD_LABEL: &str = "Reset password";

/// Row actions for people with a login: edit, delete, reset password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AccountAction {
    Builtin(DefaultAction),
    ResetPassword,
}

pub(crate) fn account_actions(ui: &mut Ui, _row: &Row) -> Option<AccountAction> {
    let builtin = default_action_buttons(ui, ActionSet::NONE.with_edit().with_delete())
        .map(AccountAction::Builtin);
    let reset = ui
        .add(Button::new(RESET_PASSWORD_LABEL).small())
        .clicked()
        .then_some(AccountAction::ResetPassword);
    builtin.or(reset)
}

pub(crate) fn account_command(
    resource: Resource,
    rows: &[Row],
    key: RowKey,
    kind: ActionKind<AccountAction>,
) -> Option<DashboardCommand> {
    match kind {
        ActionKind::Custom(AccountAction::ResetPassword) => {
            Some(DashboardCommand::ResetPassword { resource, id: key })
        }
        ActionKind::Custom(AccountAction::Builtin(action)) | ActionKind::Default(action) => {
            default_command(resource, rows, key, action)
        }
    }
}

#[derive(Debug, Default)]
pub struct UsersPage {
    pub filter: UsersFilter,
}

impl UsersPage {
    pub fn show(&mut self, ui: &mut Ui, ctx: &PageCtx<'_>) -> Vec<DashboardCommand> {
        let mut commands = Vec::new();
        page_header(ui, "Users", |ui| {
            search_box(ui, &mut self.filter.search);
            filter_combo(ui, "users_role_filter", "Role", &mut self.filter.role);
            if create_button(ui, Resource::Users.noun()) {
                commands.push(DashboardCommand::OpenModal(ModalRequest::Create(
                    Resource::Users,
                )));
            }
        });

        let columns = user_columns();
        let rows = project(self.filter.apply(&ctx.data.users[..]));
        let clicked = DataTable::new("users_table", &columns)
            .max_rows(ctx.max_rows)
            .loading(ctx.data.is_loading(Resource::Users))
            .custom_actions(account_actions)
            .show(ui, &rows);

        if let Some(action) = clicked {
            commands.extend(account_command(Resource::Users, &rows, action.key, action.kind));
        }
        commands
    }
}
