use egui::Ui;
use tiffin_business::{
    AnalyticsEndpoint, AnalyticsLoader, AnalyticsSnapshot, DashboardCommand, Resource,
    format_currency, order_columns, project,
};

use super::{PageCtx, page_header, poll_analytics};
use crate::widgets::charts::{bar_chart, chart_title, legend, pie_chart};
use crate::widgets::{DataTable, stat_card};

const PIE_RADIUS: f32 = 80.0;
const CHART_HEIGHT: f32 = 140.0;
const RECENT_ORDERS: usize = 5;

#[derive(Debug, Default)]
pub struct OverviewPage {
    loader: Option<AnalyticsLoader>,
    pub snapshot: AnalyticsSnapshot,
}

impl OverviewPage {
    pub fn show(&mut self, ui: &mut Ui, ctx: &PageCtx<'_>) -> Vec<DashboardCommand> {
        poll_analytics(
            ui,
            ctx.client,
            &AnalyticsEndpoint::OVERVIEW_TAB,
            &mut self.loader,
            &mut self.snapshot,
        );
        let snapshot = &self.snapshot;
        let overview = &snapshot.overview;

        page_header(ui, "Overview", |_| {});
        ui.horizontal_wrapped(|ui| {
            stat_card(ui, "Total Orders", &overview.total_orders.to_string());
            stat_card(ui, "Total Users", &overview.total_users.to_string());
            stat_card(ui, "Restaurants", &overview.total_restaurants.to_string());
            stat_card(ui, "Revenue", &format_currency(Some(overview.total_revenue)));
        });

        ui.add_space(16.0);
        ui.columns(2, |columns| {
            let breakdown = snapshot.status_breakdown();
            chart_title(&mut columns[0], "Orders by status");
            pie_chart(&mut columns[0], &breakdown, PIE_RADIUS);
            let labels: Vec<&str> = breakdown.iter().map(|p| p.label.as_str()).collect();
            legend(&mut columns[0], &labels);

            chart_title(&mut columns[1], "Food revenue by day");
            bar_chart(&mut columns[1], &snapshot.food_series(), CHART_HEIGHT);
        });

        ui.add_space(16.0);
        ui.strong("Recent orders");
        let columns = order_columns();
        DataTable::new("recent_orders", &columns)
            .max_rows(RECENT_ORDERS)
            .loading(ctx.data.is_loading(Resource::Orders))
            .show(ui, &project(&ctx.data.orders));

        Vec::new()
    }
}
