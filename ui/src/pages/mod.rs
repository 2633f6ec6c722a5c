//! Dashboard tabs.
//!
//! Only the active tab has a page. Switching tabs drops the old page, so
//! filters and analytics snapshots start fresh on every visit:
//! - `overview`: headline numbers, order status pie, recent orders
//! - `orders`, `users`, `restaurants`, `foods`, `staff`: filtered list tabs
//! - `subscription`: subscriptions and subscription plans
//! - `revenue`: revenue charts and the per-restaurant report
//! - `settings`: platform settings form

mod foods;
mod orders;
mod overview;
mod restaurants;
mod revenue;
mod settings;
mod staff;
mod subscription;
mod users;

use std::time::Duration;

use egui::{Button, Ui};
use tiffin_business::{
    AnalyticsEndpoint, AnalyticsLoader, AnalyticsSnapshot, ApiClient, DashboardCommand,
    DashboardData, DefaultAction, ModalRequest, Resource, Row, RowKey,
};

use crate::widgets::{RenderIcon, TabIcon};

pub use foods::FoodsPage;
pub use orders::OrdersPage;
pub use overview::OverviewPage;
pub use restaurants::RestaurantsPage;
pub use revenue::RevenuePage;
pub use settings::SettingsPage;
pub use staff::StaffPage;
pub use subscription::SubscriptionPage;
pub use users::UsersPage;

const NAV_WIDTH: f32 = 170.0;
const ANALYTICS_POLL: Duration = Duration::from_millis(100);

/// What every page gets from the shell for one frame.
#[derive(Clone, Copy)]
pub struct PageCtx<'a> {
    pub data: &'a DashboardData,
    pub client: &'a ApiClient,
    pub max_rows: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Orders,
    Users,
    Restaurants,
    Foods,
    Staff,
    Subscription,
    Revenue,
    Settings,
}

impl Tab {
    pub const ALL: [Self; 9] = [
        Self::Overview,
        Self::Orders,
        Self::Users,
        Self::Restaurants,
        Self::Foods,
        Self::Staff,
        Self::Subscription,
        Self::Revenue,
        Self::Settings,
    ];
}

impl RenderIcon for Tab {
    fn icon(&self) -> TabIcon {
        match self {
            Self::Overview => TabIcon::Dashboard,
            Self::Orders => TabIcon::Orders,
            Self::Users => TabIcon::Users,
            Self::Restaurants => TabIcon::Restaurants,
            Self::Foods => TabIcon::Foods,
            Self::Staff => TabIcon::Staff,
            Self::Subscription => TabIcon::Subscription,
            Self::Revenue => TabIcon::Revenue,
            Self::Settings => TabIcon::Settings,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Orders => "Orders",
            Self::Users => "Users",
            Self::Restaurants => "Restaurants",
            Self::Foods => "Foods",
            Self::Staff => "Staff",
            Self::Subscription => "Subscription",
            Self::Revenue => "Revenue",
            Self::Settings => "Settings",
        }
    }
}

/// State of the page currently on screen.
#[derive(Debug)]
pub enum Page {
    Overview(OverviewPage),
    Orders(OrdersPage),
    Users(UsersPage),
    Restaurants(RestaurantsPage),
    Foods(FoodsPage),
    Staff(StaffPage),
    Subscription(SubscriptionPage),
    Revenue(RevenuePage),
    Settings(SettingsPage),
}

impl Page {
    pub fn new(tab: Tab) -> Self {
        match tab {
            Tab::Overview => Self::Overview(OverviewPage::default()),
            Tab::Orders => Self::Orders(OrdersPage::default()),
            Tab::Users => Self::Users(UsersPage::default()),
            Tab::Restaurants => Self::Restaurants(RestaurantsPage::default()),
            Tab::Foods => Self::Foods(FoodsPage::default()),
            Tab::Staff => Self::Staff(StaffPage::default()),
            Tab::Subscription => Self::Subscription(SubscriptionPage::default()),
            Tab::Revenue => Self::Revenue(RevenuePage::default()),
            Tab::Settings => Self::Settings(SettingsPage::default()),
        }
    }

    pub fn show(&mut self, ui: &mut Ui, ctx: &PageCtx<'_>) -> Vec<DashboardCommand> {
        match self {
            Self::Overview(page) => page.show(ui, ctx),
            Self::Orders(page) => page.show(ui, ctx),
            Self::Users(page) => page.show(ui, ctx),
            Self::Restaurants(page) => page.show(ui, ctx),
            Self::Foods(page) => page.show(ui, ctx),
            Self::Staff(page) => page.show(ui, ctx),
            Self::Subscription(page) => page.show(ui, ctx),
            Self::Revenue(page) => page.show(ui, ctx),
            Self::Settings(page) => page.show(ui, ctx),
        }
    }
}

/// The selected tab and its page.
#[derive(Debug)]
pub struct Navigation {
    current: Tab,
    page: Page,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            current: Tab::default(),
            page: Page::new(Tab::default()),
        }
    }
}

impl Navigation {
    pub fn current(&self) -> Tab {
        self.current
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Switches tabs. Re-selecting the current tab keeps its state.
    pub fn select(&mut self, tab: Tab) {
        if tab != self.current {
            log::debug!("Switching to {} tab", tab.label());
            self.current = tab;
            self.page = Page::new(tab);
        }
    }

    /// Vertical list of tab buttons.
    pub fn rail(&mut self, ui: &mut Ui) {
        ui.set_min_width(NAV_WIDTH);
        ui.vertical(|ui| {
            for tab in Tab::ALL {
                let selected = tab == self.current;
                let button = Button::selectable(selected, tab.icon_label());
                if ui
                    .add_sized([NAV_WIDTH, 28.0], button)
                    .clicked()
                {
                    self.select(tab);
                }
            }
        });
    }

    pub fn show_page(&mut self, ui: &mut Ui, ctx: &PageCtx<'_>) -> Vec<DashboardCommand> {
        self.page.show(ui, ctx)
    }
}

fn find_row(rows: &[Row], key: RowKey) -> Option<&Row> {
    rows.iter().find(|row| row.key() == key)
}

/// Human name of a row for confirmation prompts.
fn row_label(row: &Row) -> String {
    ["name", "plan", "customer", "order"]
        .iter()
        .filter_map(|field| row.get(field))
        .find(|value| !value.is_missing())
        .map_or_else(|| row.key().to_string(), ToString::to_string)
}

/// The command behind a built-in view, edit or delete button.
fn default_command(
    resource: Resource,
    rows: &[Row],
    key: RowKey,
    action: DefaultAction,
) -> Option<DashboardCommand> {
    let row = find_row(rows, key)?;
    Some(match action {
        DefaultAction::View => DashboardCommand::View {
            resource,
            row: row.clone(),
        },
        DefaultAction::Edit => DashboardCommand::Edit {
            resource,
            row: row.clone(),
        },
        DefaultAction::Delete => DashboardCommand::OpenModal(ModalRequest::ConfirmDelete {
            resource,
            key,
            label: row_label(row),
        }),
    })
}

/// Starts the analytics fan-out on the first frame of a mount, then drains it.
///
/// Returns `true` while responses are outstanding.
fn poll_analytics(
    ui: &Ui,
    client: &ApiClient,
    endpoints: &[AnalyticsEndpoint],
    loader: &mut Option<AnalyticsLoader>,
    snapshot: &mut AnalyticsSnapshot,
) -> bool {
    let loader = loader.get_or_insert_with(|| AnalyticsLoader::start(client, endpoints));
    loader.poll(snapshot);
    let pending = loader.is_pending();
    if pending {
        ui.ctx().request_repaint_after(ANALYTICS_POLL);
    }
    pending
}

/// Page heading with an optional trailing toolbar.
fn page_header(ui: &mut Ui, title: &str, toolbar: impl FnOnce(&mut Ui)) {
    ui.horizontal(|ui| {
        ui.heading(title);
        ui.add_space(16.0);
        toolbar(ui);
    });
    ui.separator();
}
