mod badge;
pub mod charts;
mod env_version;
mod icon;
mod modals;
mod stat_card;
pub mod table;
mod toolbar;

pub use badge::badge;
pub use env_version::env_version;
pub use icon::{RenderIcon, TabIcon};
pub use modals::{CONFIRM_DELETE_LABEL, Modal, show_modal};
pub use stat_card::{STAT_CARD_WIDTH, stat_card};
pub use table::{Actions, DataTable};
pub use toolbar::{SEARCH_HINT, create_button, filter_combo, search_box};
