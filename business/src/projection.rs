//! Projections from API records to table rows.
//!
//! Each tab shows a fixed column list; the matching [`IntoRow`] impl writes a
//! field for every column key, renaming and deriving values on the way.

use chrono::{DateTime, NaiveDate};

use crate::analytics::RestaurantRevenue;
use crate::format::format_currency;
use crate::models::{
    Food, Order, PersonRef, Restaurant, RestaurantRef, StaffMember, Subscription,
    SubscriptionPlan, User,
};
use crate::row::{CellValue, Column, Row, RowKey, columns};

pub const ORDER_COLUMNS: [&str; 7] = [
    "Order",
    "Customer",
    "Restaurant",
    "Items",
    "Amount",
    "Status",
    "Date",
];
pub const USER_COLUMNS: [&str; 5] = ["Name", "Email", "Role", "Status", "Joined"];
pub const RESTAURANT_COLUMNS: [&str; 5] = ["Name", "Owner", "Cuisine", "Approval", "Revenue"];
pub const FOOD_COLUMNS: [&str; 5] = ["Name", "Restaurant", "Category", "Price", "Status"];
pub const STAFF_COLUMNS: [&str; 4] = ["Name", "Email", "Role", "Status"];
pub const SUBSCRIPTION_COLUMNS: [&str; 5] = ["Customer", "Plan", "Amount", "Status", "Renews"];
pub const PLAN_COLUMNS: [&str; 5] = ["Plan", "Price", "Duration", "Meals/Day", "Status"];
pub const RESTAURANT_REVENUE_COLUMNS: [&str; 6] = [
    "Restaurant",
    "Orders",
    "Subscriptions",
    "Food Sales",
    "Subscription Sales",
    "Revenue",
];

/// Digits of an order id shown in tables.
const SHORT_ID_LEN: usize = 6;

/// A record that can be flattened into one table row.
pub trait IntoRow {
    fn to_row(&self) -> Row;
}

/// Projects every record of a slice, keeping order.
pub fn project<'a, T: IntoRow + 'a>(items: impl IntoIterator<Item = &'a T>) -> Vec<Row> {
    items.into_iter().map(IntoRow::to_row).collect()
}

pub fn order_columns() -> Vec<Column> {
    columns(&ORDER_COLUMNS)
}

pub fn user_columns() -> Vec<Column> {
    columns(&USER_COLUMNS)
}

pub fn restaurant_columns() -> Vec<Column> {
    columns(&RESTAURANT_COLUMNS)
}

pub fn food_columns() -> Vec<Column> {
    columns(&FOOD_COLUMNS)
}

pub fn staff_columns() -> Vec<Column> {
    columns(&STAFF_COLUMNS)
}

pub fn subscription_columns() -> Vec<Column> {
    columns(&SUBSCRIPTION_COLUMNS)
}

pub fn plan_columns() -> Vec<Column> {
    columns(&PLAN_COLUMNS)
}

pub fn restaurant_revenue_columns() -> Vec<Column> {
    columns(&RESTAURANT_REVENUE_COLUMNS)
}

/// `#` followed by the last six characters of the id.
pub fn short_order_id(id: &str) -> String {
    let len = id.chars().count();
    let tail: String = id.chars().skip(len.saturating_sub(SHORT_ID_LEN)).collect();
    format!("#{tail}")
}

/// Formats an API timestamp as `DD/MM/YYYY`.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates; anything else
/// yields `None`.
pub fn format_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
        .map(|date| date.format("%d/%m/%Y").to_string())
}

fn date_cell(raw: Option<&String>) -> CellValue {
    raw.and_then(|raw| format_date(raw)).into()
}

fn restaurant_title(reference: Option<&RestaurantRef>) -> CellValue {
    reference.and_then(RestaurantRef::title).into()
}

fn person_name(reference: Option<&PersonRef>) -> CellValue {
    reference.and_then(PersonRef::name).into()
}

fn activity(active: bool) -> &'static str {
    if active { "active" } else { "inactive" }
}

impl IntoRow for Order {
    fn to_row(&self) -> Row {
        Row::new(RowKey::new(&self.id))
            .with("order", short_order_id(&self.id))
            .with("customer", person_name(self.customer.as_ref()))
            .with("restaurant", restaurant_title(self.restaurant.as_ref()))
            .with("items", self.item_count())
            .with("amount", self.total_amount)
            .with("status", self.status.as_str())
            .with("date", date_cell(self.created_at.as_ref()))
    }
}

impl IntoRow for User {
    fn to_row(&self) -> Row {
        Row::new(RowKey::new(&self.id))
            .with("name", self.name.clone())
            .with("email", self.email.clone())
            .with("role", (!self.role.is_empty()).then(|| self.role.clone()))
            .with("status", activity(self.is_active))
            .with("joined", date_cell(self.created_at.as_ref()))
    }
}

impl IntoRow for Restaurant {
    fn to_row(&self) -> Row {
        Row::new(RowKey::new(&self.id))
            .with("name", self.title.clone())
            .with("owner", person_name(self.owner.as_ref()))
            .with("cuisine", self.cuisine.clone())
            .with("approval", self.is_approved)
            .with("revenue", self.revenue)
    }
}

impl IntoRow for Food {
    fn to_row(&self) -> Row {
        Row::new(RowKey::new(&self.id))
            .with("name", self.name.clone())
            .with("restaurant", restaurant_title(self.restaurant.as_ref()))
            .with("category", self.category.clone())
            .with("price", self.price)
            .with("status", activity(self.is_available))
    }
}

impl IntoRow for StaffMember {
    fn to_row(&self) -> Row {
        Row::new(RowKey::new(&self.id))
            .with("name", self.name.clone())
            .with("email", self.email.clone())
            .with("role", self.role.clone())
            .with("status", activity(self.is_active))
    }
}

impl IntoRow for Subscription {
    fn to_row(&self) -> Row {
        Row::new(RowKey::new(&self.id))
            .with("customer", person_name(self.customer.as_ref()))
            .with("plan", self.plan_name.clone())
            .with("amount", self.amount)
            .with("status", self.status.as_str())
            .with("renews", date_cell(self.renews_at.as_ref()))
    }
}

impl IntoRow for SubscriptionPlan {
    fn to_row(&self) -> Row {
        Row::new(RowKey::new(&self.id))
            .with("plan", self.name.clone())
            .with("price", self.price)
            .with("duration", self.duration_days.map(|days| format!("{days} days")))
            .with("meals/day", self.meals_per_day)
            .with("status", activity(self.is_active))
    }
}

/// Rows are keyed by restaurant name; the revenue report has no ids.
impl IntoRow for RestaurantRevenue {
    fn to_row(&self) -> Row {
        Row::new(RowKey::new(&self.restaurant_name))
            .with("restaurant", self.restaurant_name.as_str())
            .with("orders", self.order_count)
            .with("subscriptions", self.subscription_count)
            .with("food sales", format_currency(Some(self.food_revenue)))
            .with(
                "subscription sales",
                format_currency(Some(self.subscription_revenue)),
            )
            .with("revenue", self.total_revenue)
    }
}
