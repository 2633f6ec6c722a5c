//! Entity lists shared by the list tabs.

use flume::{Receiver, Sender};
use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{
    Food, ListPayload, Order, Restaurant, StaffMember, Subscription, SubscriptionPlan, User,
};
use crate::resource::Resource;
use crate::settings::PlatformSettings;

/// Unfiltered lists as last fetched from the API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub orders: Vec<Order>,
    pub users: Vec<User>,
    pub restaurants: Vec<Restaurant>,
    pub foods: Vec<Food>,
    pub staff: Vec<StaffMember>,
    pub subscriptions: Vec<Subscription>,
    pub plans: Vec<SubscriptionPlan>,
    pub settings: Option<PlatformSettings>,
    loading: Vec<Resource>,
    /// Latest failure per resource, oldest first.
    errors: Vec<(Resource, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataUpdate {
    Orders(Vec<Order>),
    Users(Vec<User>),
    Restaurants(Vec<Restaurant>),
    Foods(Vec<Food>),
    Staff(Vec<StaffMember>),
    Subscriptions(Vec<Subscription>),
    SubscriptionPlans(Vec<SubscriptionPlan>),
    Settings(PlatformSettings),
}

impl DashboardData {
    pub fn is_loading(&self, resource: Resource) -> bool {
        self.loading.contains(&resource)
    }

    /// The most recent failure among resources whose last attempt failed.
    pub fn last_error(&self) -> Option<&str> {
        self.errors.last().map(|(_, message)| message.as_str())
    }

    fn mark_loading(&mut self, resource: Resource) {
        if !self.is_loading(resource) {
            self.loading.push(resource);
        }
    }

    pub fn apply(&mut self, resource: Resource, result: ApiResult<DataUpdate>) {
        self.loading.retain(|pending| *pending != resource);
        self.errors.retain(|(failed, _)| *failed != resource);
        let update = match result {
            Ok(update) => update,
            Err(err) => {
                warn!("Failed to load {resource}: {err}");
                self.errors
                    .push((resource, format!("Failed to load {resource}: {err}")));
                return;
            }
        };
        match update {
            DataUpdate::Orders(items) => self.orders = items,
            DataUpdate::Users(items) => self.users = items,
            DataUpdate::Restaurants(items) => self.restaurants = items,
            DataUpdate::Foods(items) => self.foods = items,
            DataUpdate::Staff(items) => self.staff = items,
            DataUpdate::Subscriptions(items) => self.subscriptions = items,
            DataUpdate::SubscriptionPlans(items) => self.plans = items,
            DataUpdate::Settings(settings) => self.settings = Some(settings),
        }
    }
}

type Outcome = (Resource, ApiResult<DataUpdate>);

/// Fetches entity lists and funnels the results back to the UI thread.
#[derive(Debug)]
pub struct DataLoader {
    sender: Sender<Outcome>,
    receiver: Receiver<Outcome>,
}

impl Default for DataLoader {
    fn default() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self { sender, receiver }
    }
}

fn fetch_list<T, F>(client: &ApiClient, resource: Resource, sender: Sender<Outcome>, wrap: F)
where
    T: DeserializeOwned,
    F: FnOnce(Vec<T>) -> DataUpdate + Send + 'static,
{
    client.get_json(resource.path(), move |result: ApiResult<ListPayload<T>>| {
        let _ = sender.send((resource, result.map(|payload| wrap(payload.into_vec()))));
    });
}

impl DataLoader {
    pub fn load_all(&self, client: &ApiClient, data: &mut DashboardData) {
        info!("Loading dashboard lists");
        for resource in Resource::LISTS {
            self.refresh(client, data, resource);
        }
        self.refresh(client, data, Resource::Settings);
    }

    pub fn refresh(&self, client: &ApiClient, data: &mut DashboardData, resource: Resource) {
        data.mark_loading(resource);
        let sender = self.sender.clone();
        match resource {
            Resource::Orders => fetch_list(client, resource, sender, DataUpdate::Orders),
            Resource::Users => fetch_list(client, resource, sender, DataUpdate::Users),
            Resource::Restaurants => fetch_list(client, resource, sender, DataUpdate::Restaurants),
            Resource::Foods => fetch_list(client, resource, sender, DataUpdate::Foods),
            Resource::Staff => fetch_list(client, resource, sender, DataUpdate::Staff),
            Resource::Subscriptions => {
                fetch_list(client, resource, sender, DataUpdate::Subscriptions)
            }
            Resource::SubscriptionPlans => {
                fetch_list(client, resource, sender, DataUpdate::SubscriptionPlans)
            }
            Resource::Settings => client.get_json(resource.path(), move |result| {
                let _ = sender.send((resource, result.map(DataUpdate::Settings)));
            }),
        }
    }

    /// Applies every finished fetch. Returns `true` if anything changed.
    pub fn poll(&self, data: &mut DashboardData) -> bool {
        let mut changed = false;
        for (resource, result) in self.receiver.try_iter() {
            data.apply(resource, result);
            changed = true;
        }
        changed
    }
}
