mod analytics;
mod api;
mod chart;
mod command;
mod config;
mod data;
mod error;
mod fetch_service;
mod filters;
mod form;
mod format;
mod models;
mod order_status;
mod projection;
mod resource;
mod row;
mod settings;
mod table;

pub use analytics::{
    AnalyticsEndpoint, AnalyticsLoader, AnalyticsSnapshot, AnalyticsUpdate, DailyRevenue,
    OverviewStats, RestaurantRevenue, RevenueStats, StatusCount,
};
pub use api::{ApiClient, Method};
pub use chart::{
    MIN_BAR_HEIGHT, Series, SeriesPoint, bar_heights, grouped_bar_heights, line_points,
    pie_fractions, scale_divisor, shared_divisor,
};
pub use command::{ApiDispatcher, CommandDispatcher, DashboardCommand, ModalRequest, Mutation};
pub use config::BusinessConfig;
pub use data::{DashboardData, DataLoader, DataUpdate};
pub use error::{ApiError, ApiResult, ConfigError};
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::MockFetcher;
pub use fetch_service::{EhttpFetcher, FetchService, OnDone};
pub use filters::{
    Approval, Availability, FilterOption, FoodsFilter, OrdersFilter, RestaurantsFilter,
    StaffFilter, SubscriptionState, SubscriptionsFilter, UserRole, UsersFilter, ViewFilter,
    matches_search,
};
pub use form::{FieldKind, FormField, form_fields, form_values, is_editable};
pub use format::{
    BadgeTier, CURRENCY_SYMBOL, Cell, classify_status, format_cell, format_currency,
    is_currency_column, status_label,
};
pub use models::{
    Food, ListPayload, Order, OrderItem, PersonRef, Restaurant, RestaurantRef, StaffMember,
    Subscription, SubscriptionPlan, User,
};
pub use order_status::{OrderStatus, UnknownOrderStatus};
pub use projection::{
    FOOD_COLUMNS, IntoRow, ORDER_COLUMNS, PLAN_COLUMNS, RESTAURANT_COLUMNS,
    RESTAURANT_REVENUE_COLUMNS, STAFF_COLUMNS, SUBSCRIPTION_COLUMNS, USER_COLUMNS, food_columns,
    format_date, order_columns, plan_columns, project, restaurant_columns,
    restaurant_revenue_columns, short_order_id, staff_columns, subscription_columns, user_columns,
};
pub use resource::Resource;
pub use row::{CellValue, Column, MISSING_TEXT, Row, RowKey, columns};
pub use settings::{PlatformSettings, SettingsDraft, SettingsError};
pub use table::{
    ActionKind, ActionSet, DEFAULT_MAX_ROWS, DefaultAction, EMPTY_TEXT, LOADING_TEXT,
    Placeholder, RowAction, TableBody, table_body, visible_rows,
};
