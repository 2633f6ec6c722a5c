//! Overview and Revenue tabs: analytics fan-out, failure defaults and
//! once-per-mount fetching.

mod common;

use common::{TestApp, fixture_fetcher};
use kittest::Queryable;
use serde_json::json;
use tiffin_business::RevenueStats;
use tiffin_ui::pages::{Page, Tab};

const BY_RESTAURANT: &str = "/admin/analytics/revenue/by-restaurant";

#[test]
fn test_revenue_failure_leaves_zero_stats() {
    // No analytics routes: every analytics request fails.
    let mut app = TestApp::new(fixture_fetcher());
    app.harness.state_mut().select(Tab::Revenue);
    app.harness.step();
    app.harness.step();

    match app.harness.state().navigation().page() {
        Page::Revenue(page) => {
            assert_eq!(page.snapshot.revenue, RevenueStats::default());
            assert!(page.snapshot.by_restaurant.is_empty());
        }
        other => panic!("expected the revenue page, got {other:?}"),
    }
    assert_eq!(app.harness.query_all_by_label("₹0.00").count(), 3);
    assert!(app.harness.query_by_label("No data found").is_some());
}

#[test]
fn test_revenue_stats_and_restaurant_report() {
    let fetcher = fixture_fetcher()
        .with_json(
            "/admin/analytics/revenue/stats",
            200,
            json!({"foodRevenue": 1200.5, "subscriptionRevenue": 300, "totalRevenue": 1500.5}),
        )
        .with_json(
            BY_RESTAURANT,
            200,
            json!([{
                "restaurantName": "Biryani House",
                "foodRevenue": 1000,
                "subscriptionRevenue": 200,
                "orderCount": 12,
                "subscriptionCount": 3,
                "totalRevenue": 1200
            }]),
        );
    let mut app = TestApp::new(fetcher);
    app.harness.state_mut().select(Tab::Revenue);
    app.harness.step();

    assert!(app.harness.query_by_label("₹1200.50").is_some());
    assert!(app.harness.query_by_label("₹1500.50").is_some());
    assert!(app.harness.query_by_label("Biryani House").is_some());
    assert!(app.harness.query_by_label("₹1000.00").is_some());
    assert!(app.harness.query_by_label("₹1200.00").is_some());
}

#[test]
fn test_analytics_are_requested_once_per_mount() {
    let mut app = TestApp::new(fixture_fetcher());
    app.harness.state_mut().select(Tab::Revenue);
    for _ in 0..5 {
        app.harness.step();
    }
    assert_eq!(app.requests_to(BY_RESTAURANT), 1);

    app.harness.state_mut().select(Tab::Orders);
    app.harness.step();
    app.harness.state_mut().select(Tab::Revenue);
    app.harness.step();
    assert_eq!(app.requests_to(BY_RESTAURANT), 2);
}

#[test]
fn test_overview_shows_headline_numbers() {
    let fetcher = fixture_fetcher().with_json(
        "/admin/analytics/overview",
        200,
        json!({
            "totalOrders": 42,
            "totalUsers": 17,
            "totalRestaurants": 3,
            "totalRevenue": 5400,
            "ordersByStatus": [
                {"status": "delivered", "count": 30},
                {"status": "out_for_delivery", "count": 12}
            ]
        }),
    );
    let mut app = TestApp::new(fetcher);
    app.harness.step();

    assert_eq!(app.harness.state().navigation().current(), Tab::Overview);
    assert_eq!(app.requests_to("/admin/analytics/overview"), 1);
    assert_eq!(app.requests_to("/admin/analytics/revenue/stats"), 0);
    assert!(app.harness.query_by_label("42").is_some());
    assert!(app.harness.query_by_label("17").is_some());
    assert!(app.harness.query_by_label("₹5400.00").is_some());
    // Legend entries use the readable status label.
    assert!(app.harness.query_by_label("out for delivery").is_some());
}
