//! Analytics snapshots for the Overview and Revenue tabs.
//!
//! A tab starts an [`AnalyticsLoader`] when it mounts and drains it every
//! frame. Failed endpoints are logged and leave the snapshot's zero defaults
//! in place.

use flume::{Receiver, Sender};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::chart::{Series, SeriesPoint};
use crate::error::ApiResult;
use crate::format::status_label;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevenueStats {
    pub food_revenue: f64,
    pub subscription_revenue: f64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyRevenue {
    pub date: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RestaurantRevenue {
    pub restaurant_name: String,
    pub food_revenue: f64,
    pub subscription_revenue: f64,
    pub order_count: u64,
    pub subscription_count: u64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewStats {
    pub total_orders: u64,
    pub total_users: u64,
    pub total_restaurants: u64,
    pub total_revenue: f64,
    pub orders_by_status: Vec<StatusCount>,
}

impl From<&DailyRevenue> for SeriesPoint {
    fn from(day: &DailyRevenue) -> Self {
        SeriesPoint::new(day.date.clone(), day.revenue)
    }
}

impl From<&StatusCount> for SeriesPoint {
    fn from(entry: &StatusCount) -> Self {
        SeriesPoint::new(status_label(&entry.status), entry.count as f64)
    }
}

/// Endpoints a tab can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsEndpoint {
    Overview,
    RevenueStats,
    FoodRevenue,
    SubscriptionRevenue,
    RevenueByRestaurant,
}

impl AnalyticsEndpoint {
    pub const OVERVIEW_TAB: [Self; 2] = [Self::Overview, Self::FoodRevenue];
    pub const REVENUE_TAB: [Self; 4] = [
        Self::RevenueStats,
        Self::FoodRevenue,
        Self::SubscriptionRevenue,
        Self::RevenueByRestaurant,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Overview => "/admin/analytics/overview",
            Self::RevenueStats => "/admin/analytics/revenue/stats",
            Self::FoodRevenue => "/admin/analytics/revenue/food",
            Self::SubscriptionRevenue => "/admin/analytics/revenue/subscriptions",
            Self::RevenueByRestaurant => "/admin/analytics/revenue/by-restaurant",
        }
    }
}

/// One decoded endpoint response.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsUpdate {
    Overview(OverviewStats),
    RevenueStats(RevenueStats),
    FoodRevenue(Vec<DailyRevenue>),
    SubscriptionRevenue(Vec<DailyRevenue>),
    RevenueByRestaurant(Vec<RestaurantRevenue>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsSnapshot {
    pub overview: OverviewStats,
    pub revenue: RevenueStats,
    pub food_revenue: Vec<DailyRevenue>,
    pub subscription_revenue: Vec<DailyRevenue>,
    pub by_restaurant: Vec<RestaurantRevenue>,
}

impl AnalyticsSnapshot {
    pub fn apply(&mut self, update: AnalyticsUpdate) {
        match update {
            AnalyticsUpdate::Overview(stats) => self.overview = stats,
            AnalyticsUpdate::RevenueStats(stats) => self.revenue = stats,
            AnalyticsUpdate::FoodRevenue(days) => self.food_revenue = days,
            AnalyticsUpdate::SubscriptionRevenue(days) => self.subscription_revenue = days,
            AnalyticsUpdate::RevenueByRestaurant(rows) => self.by_restaurant = rows,
        }
    }

    pub fn food_series(&self) -> Vec<SeriesPoint> {
        self.food_revenue.iter().map(SeriesPoint::from).collect()
    }

    pub fn subscription_series(&self) -> Vec<SeriesPoint> {
        self.subscription_revenue.iter().map(SeriesPoint::from).collect()
    }

    pub fn status_breakdown(&self) -> Vec<SeriesPoint> {
        self.overview
            .orders_by_status
            .iter()
            .map(SeriesPoint::from)
            .collect()
    }

    /// Food and subscription revenue per restaurant, one series each.
    pub fn restaurant_series(&self) -> Vec<Series> {
        let points = |value: fn(&RestaurantRevenue) -> f64| {
            self.by_restaurant
                .iter()
                .map(|row| SeriesPoint::new(row.restaurant_name.clone(), value(row)))
                .collect::<Vec<_>>()
        };
        vec![
            Series {
                name: "Food".to_owned(),
                points: points(|row: &RestaurantRevenue| row.food_revenue),
            },
            Series {
                name: "Subscriptions".to_owned(),
                points: points(|row: &RestaurantRevenue| row.subscription_revenue),
            },
        ]
    }
}

type Outcome = (AnalyticsEndpoint, ApiResult<AnalyticsUpdate>);

/// In-flight analytics requests for one tab mount.
#[derive(Debug)]
pub struct AnalyticsLoader {
    receiver: Receiver<Outcome>,
    pending: Vec<AnalyticsEndpoint>,
}

impl AnalyticsLoader {
    /// Fires every endpoint at once. Responses may arrive in any order.
    pub fn start(client: &ApiClient, endpoints: &[AnalyticsEndpoint]) -> Self {
        let (sender, receiver) = flume::unbounded();
        info!("Requesting {} analytics endpoints", endpoints.len());
        for endpoint in endpoints {
            request(client, *endpoint, sender.clone());
        }
        Self {
            receiver,
            pending: endpoints.to_vec(),
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Applies every response received so far. Returns `true` if anything
    /// arrived.
    pub fn poll(&mut self, snapshot: &mut AnalyticsSnapshot) -> bool {
        let mut changed = false;
        for (endpoint, result) in self.receiver.try_iter() {
            self.pending.retain(|pending| *pending != endpoint);
            changed = true;
            match result {
                Ok(update) => snapshot.apply(update),
                Err(err) => warn!("Analytics {} unavailable: {err}", endpoint.path()),
            }
        }
        changed
    }
}

fn request(client: &ApiClient, endpoint: AnalyticsEndpoint, sender: Sender<Outcome>) {
    let path = endpoint.path();
    // A dropped receiver means the tab was left; the send result is ignored.
    match endpoint {
        AnalyticsEndpoint::Overview => client.get_json(path, move |result| {
            let _ = sender.send((endpoint, result.map(AnalyticsUpdate::Overview)));
        }),
        AnalyticsEndpoint::RevenueStats => client.get_json(path, move |result| {
            let _ = sender.send((endpoint, result.map(AnalyticsUpdate::RevenueStats)));
        }),
        AnalyticsEndpoint::FoodRevenue => client.get_json(path, move |result| {
            let _ = sender.send((endpoint, result.map(AnalyticsUpdate::FoodRevenue)));
        }),
        AnalyticsEndpoint::SubscriptionRevenue => client.get_json(path, move |result| {
            let _ = sender.send((endpoint, result.map(AnalyticsUpdate::SubscriptionRevenue)));
        }),
        AnalyticsEndpoint::RevenueByRestaurant => client.get_json(path, move |result| {
            let _ = sender.send((endpoint, result.map(AnalyticsUpdate::RevenueByRestaurant)));
        }),
    }
}
