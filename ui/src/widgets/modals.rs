//! The single dashboard dialog: view, create, edit or confirm delete.
//!
//! The shell owns an `Option<Modal>`; [`show_modal`] draws it, clears it on
//! close and returns the command a submit produced.

use egui::{Button, Color32, Context, Grid, Id, RichText, TextEdit, Ui, Window};
use tiffin_business::{
    CellValue, DashboardCommand, FormField, ModalRequest, Resource, Row, RowKey, form_fields,
    form_values, is_editable,
};

use crate::utils::colors::{COLOR_AMBER, COLOR_RED};

pub const CONFIRM_DELETE_LABEL: &str = "Yes, delete";

#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    View {
        resource: Resource,
        row: Row,
    },
    Edit {
        resource: Resource,
        key: RowKey,
        fields: Vec<FormField>,
    },
    Create {
        resource: Resource,
        fields: Vec<FormField>,
    },
    ConfirmDelete {
        resource: Resource,
        key: RowKey,
        label: String,
    },
}

impl Modal {
    /// `None` for a create form on a resource without editable fields.
    pub fn from_request(request: ModalRequest) -> Option<Self> {
        match request {
            ModalRequest::Create(resource) => is_editable(resource).then(|| Self::Create {
                resource,
                fields: form_fields(resource, None),
            }),
            ModalRequest::ConfirmDelete {
                resource,
                key,
                label,
            } => Some(Self::ConfirmDelete {
                resource,
                key,
                label,
            }),
        }
    }

    /// The dialog a UI-local command opens, if any.
    pub fn from_command(command: &DashboardCommand) -> Option<Self> {
        match command {
            DashboardCommand::OpenModal(request) => Self::from_request(request.clone()),
            DashboardCommand::View { resource, row } => Some(Self::View {
                resource: *resource,
                row: row.clone(),
            }),
            DashboardCommand::Edit { resource, row } => {
                is_editable(*resource).then(|| Self::Edit {
                    resource: *resource,
                    key: row.key(),
                    fields: form_fields(*resource, Some(row)),
                })
            }
            _ => None,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::View { resource, .. } => format!("{resource} details"),
            Self::Edit { resource, .. } => format!("Edit {resource}"),
            Self::Create { resource, .. } => format!("New {resource}"),
            Self::ConfirmDelete { resource, .. } => format!("Delete {resource}"),
        }
    }
}

enum Outcome {
    Close,
    Submit(DashboardCommand),
}

enum FormAction {
    Submit(Vec<(String, CellValue)>),
    Cancel,
}

/// Draws the open dialog, if any.
///
/// Returns the submitted command. The modal is cleared on submit, on Cancel
/// and when the window is closed.
pub fn show_modal(ctx: &Context, modal: &mut Option<Modal>) -> Option<DashboardCommand> {
    let current = modal.as_mut()?;
    let mut open = true;

    let outcome = Window::new(current.title())
        .id(Id::new("dashboard_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| modal_body(ui, current))
        .and_then(|response| response.inner)
        .flatten();

    match outcome {
        Some(Outcome::Submit(command)) => {
            *modal = None;
            Some(command)
        }
        Some(Outcome::Close) => {
            *modal = None;
            None
        }
        None => {
            if !open {
                *modal = None;
            }
            None
        }
    }
}

fn modal_body(ui: &mut Ui, modal: &mut Modal) -> Option<Outcome> {
    match modal {
        Modal::View { row, .. } => {
            Grid::new("view_fields")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for (field, value) in row.fields() {
                        ui.label(RichText::new(field).strong());
                        ui.label(value.to_string());
                        ui.end_row();
                    }
                });
            ui.add_space(12.0);
            ui.button("Close").clicked().then_some(Outcome::Close)
        }
        Modal::Edit {
            resource,
            key,
            fields,
        } => form_body(ui, fields, "Save").map(|action| match action {
            FormAction::Submit(fields) => Outcome::Submit(DashboardCommand::Update {
                resource: *resource,
                id: *key,
                fields,
            }),
            FormAction::Cancel => Outcome::Close,
        }),
        Modal::Create { resource, fields } => {
            form_body(ui, fields, "Create").map(|action| match action {
                FormAction::Submit(fields) => Outcome::Submit(DashboardCommand::Create {
                    resource: *resource,
                    fields,
                }),
                FormAction::Cancel => Outcome::Close,
            })
        }
        Modal::ConfirmDelete {
            resource,
            key,
            label,
        } => {
            ui.colored_label(COLOR_AMBER, "⚠ Warning");
            ui.add_space(4.0);
            ui.label(format!("Are you sure you want to delete '{label}'?"));
            ui.label("This action cannot be undone.");
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new(CONFIRM_DELETE_LABEL).color(COLOR_RED))
                    .clicked()
                {
                    return Some(Outcome::Submit(DashboardCommand::Delete {
                        resource: *resource,
                        id: *key,
                    }));
                }
                ui.button("Cancel").clicked().then_some(Outcome::Close)
            })
            .inner
        }
    }
}

/// Editable fields plus submit and cancel buttons.
///
/// Submit stays disabled while any number field is invalid or every field is blank.
fn form_body(ui: &mut Ui, fields: &mut [FormField], submit: &str) -> Option<FormAction> {
    Grid::new("form_fields")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for field in fields.iter_mut() {
                ui.label(field.label);
                ui.vertical(|ui| {
                    ui.add(TextEdit::singleline(&mut field.input).hint_text(field.label));
                    if field.is_invalid() {
                        ui.colored_label(Color32::RED, format!("{} must be a number", field.label));
                    }
                });
                ui.end_row();
            }
        });

    ui.add_space(12.0);
    let values = form_values(fields);
    let can_submit = !values.is_empty() && !fields.iter().any(FormField::is_invalid);

    ui.horizontal(|ui| {
        if ui.add_enabled(can_submit, Button::new(submit)).clicked() {
            return Some(FormAction::Submit(values));
        }
        ui.button("Cancel").clicked().then_some(FormAction::Cancel)
    })
    .inner
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::*;

    struct ModalState {
        modal: Option<Modal>,
        submitted: Vec<DashboardCommand>,
    }

    fn harness(modal: Option<Modal>) -> Harness<'static, ModalState> {
        Harness::new_state(
            |ctx, state: &mut ModalState| {
                if let Some(command) = show_modal(ctx, &mut state.modal) {
                    state.submitted.push(command);
                }
            },
            ModalState {
                modal,
                submitted: Vec::new(),
            },
        )
    }

    #[test]
    fn test_confirm_delete_emits_delete() {
        let mut harness = harness(Modal::from_request(ModalRequest::ConfirmDelete {
            resource: Resource::Users,
            key: RowKey::new("u1"),
            label: "Asha".to_owned(),
        }));
        harness.step();
        assert!(harness.query_by_label_contains("'Asha'").is_some());

        harness.get_by_label(CONFIRM_DELETE_LABEL).click();
        harness.step();
        harness.step();

        assert!(harness.state().modal.is_none());
        assert_eq!(
            harness.state().submitted,
            vec![DashboardCommand::Delete {
                resource: Resource::Users,
                id: RowKey::new("u1"),
            }]
        );
    }

    #[test]
    fn test_cancel_closes_without_command() {
        let mut harness = harness(Modal::from_request(ModalRequest::ConfirmDelete {
            resource: Resource::Foods,
            key: RowKey::new("f1"),
            label: "Idli".to_owned(),
        }));
        harness.step();
        harness.get_by_label("Cancel").click();
        harness.step();
        harness.step();

        assert!(harness.state().modal.is_none());
        assert!(harness.state().submitted.is_empty());
    }

    #[test]
    fn test_edit_form_submits_update() {
        let row = Row::new(RowKey::new("f7"))
            .with("name", "Dosa")
            .with("category", "South Indian")
            .with("price", 60.0);
        let modal = Modal::from_command(&DashboardCommand::Edit {
            resource: Resource::Foods,
            row,
        });
        let Some(modal) = modal else {
            panic!("edit command should open a modal");
        };
        let mut harness = harness(Some(modal));
        harness.step();

        harness.get_by_label("Save").click();
        harness.step();
        harness.step();

        assert_eq!(
            harness.state().submitted,
            vec![DashboardCommand::Update {
                resource: Resource::Foods,
                id: RowKey::new("f7"),
                fields: vec![
                    ("name".to_owned(), CellValue::from("Dosa")),
                    ("category".to_owned(), CellValue::from("South Indian")),
                    ("price".to_owned(), CellValue::Number(60.0)),
                ],
            }]
        );
    }

    #[test]
    fn test_invalid_number_blocks_submit() {
        let mut modal = Modal::from_request(ModalRequest::Create(Resource::Foods))
            .expect("foods have a create form");
        if let Modal::Create { fields, .. } = &mut modal {
            fields[0].input = "Vada".to_owned();
            fields[2].input = "cheap".to_owned();
        }
        let mut harness = harness(Some(modal));
        harness.step();

        assert!(harness.query_by_label("Price must be a number").is_some());
        harness.get_by_label("Create").click();
        harness.step();
        harness.step();

        assert!(harness.state().modal.is_some());
        assert!(harness.state().submitted.is_empty());
    }

    #[test]
    fn test_view_lists_row_fields() {
        let modal = Modal::View {
            resource: Resource::Orders,
            row: Row::new(RowKey::new("o1"))
                .with("customer", "Ravi")
                .with("status", "placed"),
        };
        let mut harness = harness(Some(modal));
        harness.step();

        assert!(harness.query_by_label("Ravi").is_some());
        assert!(harness.query_by_label("placed").is_some());
    }

    #[test]
    fn test_resources_without_fields_open_no_form() {
        let row = Row::new(RowKey::new("o1")).with("status", "pending");
        assert_eq!(
            Modal::from_command(&DashboardCommand::Edit {
                resource: Resource::Orders,
                row: row.clone(),
            }),
            None
        );
        assert_eq!(
            Modal::from_request(ModalRequest::Create(Resource::Subscriptions)),
            None
        );
        assert!(matches!(
            Modal::from_command(&DashboardCommand::View {
                resource: Resource::Orders,
                row,
            }),
            Some(Modal::View { .. })
        ));
    }
}
