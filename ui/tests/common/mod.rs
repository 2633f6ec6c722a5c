#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use egui_kittest::Harness;
use serde_json::json;
use tiffin_business::{
    BusinessConfig, CommandDispatcher, DashboardCommand, MockFetcher, Resource,
};
use tiffin_ui::TiffinApp;
use tiffin_ui::state::State;

pub const BASE_URL: &str = "http://tiffin.test";

/// Records dispatched commands instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    sent: Arc<Mutex<Vec<DashboardCommand>>>,
}

impl RecordingDispatcher {
    pub fn sent(&self) -> Vec<DashboardCommand> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

impl CommandDispatcher for RecordingDispatcher {
    fn dispatch(&mut self, command: DashboardCommand) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(command);
        }
    }

    fn poll_completed(&mut self) -> Vec<Resource> {
        Vec::new()
    }
}

/// Canned answers for every list the dashboard loads at startup.
pub fn fixture_fetcher() -> MockFetcher {
    MockFetcher::new()
        .with_json(
            "/admin/orders",
            200,
            json!([
                {
                    "_id": "64f0000000abc123",
                    "user": {"name": "Asha Rao"},
                    "restaurant": {"_id": "r1", "title": "Biryani House"},
                    "items": [{"name": "Biryani", "quantity": 2}],
                    "totalAmount": 450,
                    "status": "OUT_FOR_DELIVERY",
                    "createdAt": "2024-03-05T10:00:00Z"
                },
                {
                    "_id": "64f0000000def456",
                    "user": {"name": "Ravi Kumar"},
                    "restaurant": "r2",
                    "totalAmount": 120,
                    "status": "delivered"
                }
            ]),
        )
        .with_json(
            "/admin/users",
            200,
            json!({"data": [
                {"_id": "u1", "name": "Asha Rao", "email": "asha@example.in", "role": "customer"},
                {"_id": "u2", "name": "Vikram Shah", "email": "vikram@example.in", "role": "admin"}
            ]}),
        )
        .with_json(
            "/admin/restaurants",
            200,
            json!([
                {"_id": "r1", "title": "Biryani House", "cuisine": "Hyderabadi", "isApproved": true},
                {"_id": "r2", "title": "Dosa Corner", "cuisine": "South Indian", "isApproved": false}
            ]),
        )
        .with_json(
            "/admin/foods",
            200,
            json!([{"_id": "f1", "name": "Masala Dosa", "category": "Breakfast", "price": 80, "isAvailable": true}]),
        )
        .with_json(
            "/admin/staff",
            200,
            json!([{"_id": "s1", "name": "Meera Iyer", "email": "meera@tiffin.in", "role": "support"}]),
        )
        .with_json(
            "/admin/subscriptions",
            200,
            json!([{"_id": "sub1", "user": {"name": "Asha Rao"}, "planName": "Weekly Veg", "amount": 899, "status": "active"}]),
        )
        .with_json(
            "/admin/subscription-plans",
            200,
            json!([{"_id": "p1", "name": "Weekly Veg", "price": 899, "durationDays": 7, "mealsPerDay": 2}]),
        )
        .with_json(
            "/admin/settings",
            200,
            json!({"deliveryFee": 30, "taxPercent": 5, "minOrderAmount": 99, "supportEmail": "help@tiffin.in"}),
        )
}

/// A window wide enough for every table column to be laid out.
pub fn app_harness(app: TiffinApp) -> Harness<'static, TiffinApp> {
    Harness::builder()
        .with_size(egui::vec2(1600.0, 1000.0))
        .build_eframe(|_| app)
}

pub struct TestApp {
    pub harness: Harness<'static, TiffinApp>,
    pub fetcher: Arc<MockFetcher>,
    pub dispatcher: RecordingDispatcher,
}

impl TestApp {
    pub fn new(fetcher: MockFetcher) -> Self {
        Self::with_config(BusinessConfig::new(BASE_URL), fetcher)
    }

    pub fn with_config(config: BusinessConfig, fetcher: MockFetcher) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let fetcher = Arc::new(fetcher);
        let dispatcher = RecordingDispatcher::default();
        let state = State::with_fetcher(config, fetcher.clone());
        let app = TiffinApp::with_dispatcher(state, Box::new(dispatcher.clone()));
        let mut harness = app_harness(app);
        harness.step();

        Self {
            harness,
            fetcher,
            dispatcher,
        }
    }

    /// Number of requests whose URL ends with `suffix`.
    pub fn requests_to(&self, suffix: &str) -> usize {
        self.fetcher
            .requests()
            .iter()
            .filter(|(_, url)| url.ends_with(suffix))
            .count()
    }
}
