//! Per-tab filter state.
//!
//! Each tab owns exactly one of these records. They live in memory for as
//! long as the tab is shown and are rebuilt from `Default` when the user
//! navigates back.

use crate::models::{Food, Order, PersonRef, Restaurant, StaffMember, Subscription, User};
use crate::order_status::OrderStatus;

/// Case-insensitive substring match of `query` against any of `fields`.
///
/// A blank query matches everything.
pub fn matches_search<'a>(query: &str, fields: impl IntoIterator<Item = Option<&'a str>>) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
}

/// Options offered by a filter combo box. `None` in the owning field means "All".
pub trait FilterOption: Copy + PartialEq + 'static {
    const OPTIONS: &'static [Self];

    fn label(self) -> &'static str;
}

/// Filter state that can narrow a slice of records.
pub trait ViewFilter<T> {
    fn matches(&self, item: &T) -> bool;

    /// Matching records, in their original order.
    fn apply<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

impl FilterOption for OrderStatus {
    const OPTIONS: &'static [Self] = &Self::ALL;

    fn label(self) -> &'static str {
        OrderStatus::label(self)
    }
}

fn customer(person: Option<&PersonRef>) -> Option<&str> {
    person.and_then(PersonRef::name)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrdersFilter {
    pub search: String,
    pub status: Option<OrderStatus>,
}

impl ViewFilter<Order> for OrdersFilter {
    fn matches(&self, order: &Order) -> bool {
        let status_ok = self.status.is_none_or(|status| status.matches(&order.status));
        status_ok
            && matches_search(
                &self.search,
                [
                    Some(order.id.as_str()),
                    customer(order.customer.as_ref()),
                    order.restaurant.as_ref().and_then(|r| r.title()),
                ],
            )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Customer,
    RestaurantOwner,
    Admin,
}

impl UserRole {
    fn wire_names(self) -> &'static [&'static str] {
        match self {
            Self::Customer => &["customer", "user"],
            Self::RestaurantOwner => &["restaurant_owner", "owner", "restaurant"],
            Self::Admin => &["admin"],
        }
    }

    pub fn matches(self, raw: &str) -> bool {
        let raw = raw.trim();
        self.wire_names()
            .iter()
            .any(|name| raw.eq_ignore_ascii_case(name))
    }
}

impl FilterOption for UserRole {
    const OPTIONS: &'static [Self] = &[Self::Customer, Self::RestaurantOwner, Self::Admin];

    fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::RestaurantOwner => "Restaurant owner",
            Self::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersFilter {
    pub search: String,
    pub role: Option<UserRole>,
}

impl ViewFilter<User> for UsersFilter {
    fn matches(&self, user: &User) -> bool {
        self.role.is_none_or(|role| role.matches(&user.role))
            && matches_search(
                &self.search,
                [
                    user.name.as_deref(),
                    user.email.as_deref(),
                    user.phone.as_deref(),
                ],
            )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approval {
    Approved,
    Pending,
}

impl FilterOption for Approval {
    const OPTIONS: &'static [Self] = &[Self::Approved, Self::Pending];

    fn label(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantsFilter {
    pub search: String,
    pub approval: Option<Approval>,
}

impl ViewFilter<Restaurant> for RestaurantsFilter {
    fn matches(&self, restaurant: &Restaurant) -> bool {
        let approval_ok = match self.approval {
            None => true,
            Some(Approval::Approved) => restaurant.is_approved,
            Some(Approval::Pending) => !restaurant.is_approved,
        };
        approval_ok
            && matches_search(
                &self.search,
                [
                    restaurant.title.as_deref(),
                    restaurant.cuisine.as_deref(),
                    customer(restaurant.owner.as_ref()),
                ],
            )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Unavailable,
}

impl FilterOption for Availability {
    const OPTIONS: &'static [Self] = &[Self::Available, Self::Unavailable];

    fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Unavailable => "Unavailable",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodsFilter {
    pub search: String,
    pub availability: Option<Availability>,
}

impl ViewFilter<Food> for FoodsFilter {
    fn matches(&self, food: &Food) -> bool {
        let availability_ok = match self.availability {
            None => true,
            Some(Availability::Available) => food.is_available,
            Some(Availability::Unavailable) => !food.is_available,
        };
        availability_ok
            && matches_search(
                &self.search,
                [
                    food.name.as_deref(),
                    food.category.as_deref(),
                    food.restaurant.as_ref().and_then(|r| r.title()),
                ],
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffFilter {
    pub search: String,
}

impl ViewFilter<StaffMember> for StaffFilter {
    fn matches(&self, member: &StaffMember) -> bool {
        matches_search(
            &self.search,
            [
                member.name.as_deref(),
                member.email.as_deref(),
                member.role.as_deref(),
            ],
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    Active,
    Paused,
    Expired,
    Cancelled,
}

impl SubscriptionState {
    pub fn matches(self, raw: &str) -> bool {
        raw.trim().eq_ignore_ascii_case(self.label())
    }
}

impl FilterOption for SubscriptionState {
    const OPTIONS: &'static [Self] = &[Self::Active, Self::Paused, Self::Expired, Self::Cancelled];

    fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Expired => "Expired",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionsFilter {
    pub search: String,
    pub status: Option<SubscriptionState>,
}

impl ViewFilter<Subscription> for SubscriptionsFilter {
    fn matches(&self, subscription: &Subscription) -> bool {
        self.status
            .is_none_or(|status| status.matches(&subscription.status))
            && matches_search(
                &self.search,
                [
                    customer(subscription.customer.as_ref()),
                    subscription.plan_name.as_deref(),
                ],
            )
    }
}
