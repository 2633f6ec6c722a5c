use egui::Ui;
use tiffin_business::{
    AnalyticsEndpoint, AnalyticsLoader, AnalyticsSnapshot, DashboardCommand, format_currency,
    project, restaurant_revenue_columns,
};

use super::{PageCtx, page_header, poll_analytics};
use crate::widgets::charts::{bar_chart, chart_title, grouped_bar_chart, legend, line_chart};
use crate::widgets::{DataTable, stat_card};

const CHART_HEIGHT: f32 = 160.0;

#[derive(Debug, Default)]
pub struct RevenuePage {
    loader: Option<AnalyticsLoader>,
    pub snapshot: AnalyticsSnapshot,
}

impl RevenuePage {
    pub fn show(&mut self, ui: &mut Ui, ctx: &PageCtx<'_>) -> Vec<DashboardCommand> {
        let loading = poll_analytics(
            ui,
            ctx.client,
            &AnalyticsEndpoint::REVENUE_TAB,
            &mut self.loader,
            &mut self.snapshot,
        );
        let snapshot = &self.snapshot;

        page_header(ui, "Revenue", |_| {});
        ui.horizontal_wrapped(|ui| {
            let stats = &snapshot.revenue;
            stat_card(ui, "Food Revenue", &format_currency(Some(stats.food_revenue)));
            stat_card(
                ui,
                "Subscription Revenue",
                &format_currency(Some(stats.subscription_revenue)),
            );
            stat_card(ui, "Total Revenue", &format_currency(Some(stats.total_revenue)));
        });

        ui.add_space(16.0);
        chart_title(ui, "Food revenue by day");
        line_chart(ui, &snapshot.food_series(), CHART_HEIGHT);

        ui.add_space(16.0);
        chart_title(ui, "Subscription revenue by day");
        bar_chart(ui, &snapshot.subscription_series(), CHART_HEIGHT);

        ui.add_space(16.0);
        chart_title(ui, "Revenue by restaurant");
        let series = snapshot.restaurant_series();
        let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
        legend(ui, &names);
        grouped_bar_chart(ui, &series, CHART_HEIGHT);

        ui.add_space(8.0);
        let columns = restaurant_revenue_columns();
        DataTable::new("revenue_by_restaurant", &columns)
            .max_rows(ctx.max_rows)
            .loading(loading)
            .show(ui, &project(&snapshot.by_restaurant));

        Vec::new()
    }
}
