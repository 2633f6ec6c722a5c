use egui::{Button, Grid, TextEdit, Ui};
use tiffin_business::{DashboardCommand, LOADING_TEXT, PlatformSettings, Resource, SettingsDraft};

use super::{PageCtx, page_header};
use crate::utils::colors::COLOR_RED;

/// Tab-local draft of the platform settings.
///
/// The draft is seeded once from the loaded settings and then only changes
/// through the form or Reset.
#[derive(Debug, Default)]
pub struct SettingsPage {
    pub draft: Option<SettingsDraft>,
}

fn seed(loaded: Option<&PlatformSettings>) -> SettingsDraft {
    loaded.map_or_else(
        || SettingsDraft::from(&PlatformSettings::default()),
        SettingsDraft::from,
    )
}

fn text_row(ui: &mut Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(TextEdit::singleline(value).desired_width(220.0));
    ui.end_row();
}

impl SettingsPage {
    pub fn show(&mut self, ui: &mut Ui, ctx: &PageCtx<'_>) -> Vec<DashboardCommand> {
        page_header(ui, "Settings", |_| {});

        let loaded = ctx.data.settings.as_ref();
        if self.draft.is_none() && loaded.is_none() && ctx.data.is_loading(Resource::Settings) {
            ui.label(LOADING_TEXT);
            return Vec::new();
        }
        let draft = self.draft.get_or_insert_with(|| seed(loaded));

        Grid::new("settings_form")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                text_row(ui, "Delivery fee", &mut draft.delivery_fee);
                text_row(ui, "Tax percent", &mut draft.tax_percent);
                text_row(ui, "Minimum order amount", &mut draft.min_order_amount);
                text_row(ui, "Support email", &mut draft.support_email);
            });

        let validated = draft.validate();
        if let Err(err) = &validated {
            ui.colored_label(COLOR_RED, err.to_string());
        }

        ui.add_space(12.0);
        let mut commands = Vec::new();
        ui.horizontal(|ui| {
            let save = ui.add_enabled(validated.is_ok(), Button::new("Save"));
            if save.clicked()
                && let Ok(settings) = validated
            {
                commands.push(DashboardCommand::SaveSettings(settings));
            }
            if ui.button("Reset").clicked() {
                *draft = seed(loaded);
            }
        });
        commands
    }
}
