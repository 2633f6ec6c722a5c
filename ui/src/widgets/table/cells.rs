//! Cell rendering for the generic table.

use egui::{Button, Ui};
use tiffin_business::{ActionSet, Cell, DefaultAction};

use crate::widgets::badge::badge;

/// Renders a formatted cell: plain text or a status badge.
#[inline]
pub fn render_cell(ui: &mut Ui, cell: &Cell) {
    match cell {
        Cell::Text(text) => {
            ui.label(text);
        }
        Cell::Badge { text, tier } => {
            badge(ui, text, *tier);
        }
    }
}

fn action_hover(action: DefaultAction) -> &'static str {
    match action {
        DefaultAction::View => "View details",
        DefaultAction::Edit => "Edit",
        DefaultAction::Delete => "Delete",
    }
}

/// Buttons for every enabled default action, in view/edit/delete order.
///
/// Returns the action whose button was clicked. Custom renderers call this to
/// keep the standard buttons next to their own.
pub fn default_action_buttons(ui: &mut Ui, actions: ActionSet) -> Option<DefaultAction> {
    let mut clicked = None;
    for action in actions.enabled() {
        if ui
            .add(Button::new(action.label()).small())
            .on_hover_text(action_hover(action))
            .clicked()
        {
            clicked = Some(action);
        }
    }
    clicked
}
