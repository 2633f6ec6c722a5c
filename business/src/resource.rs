use std::fmt;

/// An admin API collection the dashboard reads from or mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Orders,
    Users,
    Restaurants,
    Foods,
    Staff,
    Subscriptions,
    SubscriptionPlans,
    Settings,
}

impl Resource {
    /// Every list-shaped collection, in the order the dashboard loads them.
    pub const LISTS: [Self; 7] = [
        Self::Orders,
        Self::Users,
        Self::Restaurants,
        Self::Foods,
        Self::Staff,
        Self::Subscriptions,
        Self::SubscriptionPlans,
    ];

    /// Path below the API prefix.
    pub fn path(self) -> &'static str {
        match self {
            Self::Orders => "/admin/orders",
            Self::Users => "/admin/users",
            Self::Restaurants => "/admin/restaurants",
            Self::Foods => "/admin/foods",
            Self::Staff => "/admin/staff",
            Self::Subscriptions => "/admin/subscriptions",
            Self::SubscriptionPlans => "/admin/subscription-plans",
            Self::Settings => "/admin/settings",
        }
    }

    pub fn item_path(self, id: &str) -> String {
        format!("{}/{id}", self.path())
    }

    /// Singular noun used in dialog titles.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Orders => "Order",
            Self::Users => "User",
            Self::Restaurants => "Restaurant",
            Self::Foods => "Food",
            Self::Staff => "Staff member",
            Self::Subscriptions => "Subscription",
            Self::SubscriptionPlans => "Subscription plan",
            Self::Settings => "Settings",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}
