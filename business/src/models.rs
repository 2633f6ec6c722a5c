//! Records returned by the admin API.
//!
//! Every field except the identity is optional on the wire. Absent, null or
//! mistyped values decode to defaults and become placeholders at projection
//! time. A list item without a usable identity is skipped on its own.

use log::warn;
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A restaurant reference as embedded in orders and foods.
///
/// The API either populates the referenced document or sends its bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RestaurantRef {
    Populated {
        #[serde(rename = "_id", alias = "id", default)]
        id: Option<String>,
        #[serde(alias = "name", default)]
        title: Option<String>,
    },
    Id(String),
}

impl RestaurantRef {
    /// Title of a populated reference. A bare id has no displayable title.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Populated { title, .. } => title.as_deref().filter(|t| !t.is_empty()),
            Self::Id(_) => None,
        }
    }
}

/// A person embedded in another record (order customer, restaurant owner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersonRef {
    Populated {
        #[serde(default)]
        name: Option<String>,
    },
    Id(String),
}

impl PersonRef {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Populated { name } => name.as_deref().filter(|n| !n.is_empty()),
            Self::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: Option<String>,
    #[serde(default = "one", deserialize_with = "lenient::quantity")]
    pub quantity: u32,
}

fn one() -> u32 {
    1
}

fn yes() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id", deserialize_with = "lenient::identity")]
    pub id: String,
    #[serde(alias = "user", default, deserialize_with = "lenient::or_default")]
    pub customer: Option<PersonRef>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub restaurant: Option<RestaurantRef>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub items: Vec<OrderItem>,
    #[serde(alias = "amount", default, deserialize_with = "lenient::number")]
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub created_at: Option<String>,
}

impl Order {
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id", deserialize_with = "lenient::identity")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub role: String,
    #[serde(default = "yes", deserialize_with = "lenient::flag_or_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(rename = "_id", alias = "id", deserialize_with = "lenient::identity")]
    pub id: String,
    #[serde(alias = "name", default, deserialize_with = "lenient::or_default")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub owner: Option<PersonRef>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub cuisine: Option<String>,
    #[serde(alias = "approved", default, deserialize_with = "lenient::or_default")]
    pub is_approved: bool,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    #[serde(rename = "_id", alias = "id", deserialize_with = "lenient::identity")]
    pub id: String,
    #[serde(alias = "title", default, deserialize_with = "lenient::or_default")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub restaurant: Option<RestaurantRef>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(alias = "available", default = "yes", deserialize_with = "lenient::flag_or_true")]
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    #[serde(rename = "_id", alias = "id", deserialize_with = "lenient::identity")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub role: Option<String>,
    #[serde(default = "yes", deserialize_with = "lenient::flag_or_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(rename = "_id", alias = "id", deserialize_with = "lenient::identity")]
    pub id: String,
    #[serde(alias = "user", default, deserialize_with = "lenient::or_default")]
    pub customer: Option<PersonRef>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub plan_name: Option<String>,
    #[serde(alias = "price", default, deserialize_with = "lenient::number")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: String,
    #[serde(alias = "endDate", default, deserialize_with = "lenient::or_default")]
    pub renews_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    #[serde(rename = "_id", alias = "id", deserialize_with = "lenient::identity")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(alias = "duration", default, deserialize_with = "lenient::count")]
    pub duration_days: Option<u32>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub meals_per_day: Option<u32>,
    #[serde(default = "yes", deserialize_with = "lenient::flag_or_true")]
    pub is_active: bool,
}

/// List endpoints answer either with a bare array or `{ "data": [...] }`.
///
/// Items are decoded one by one; an item that cannot be decoded is logged
/// and dropped without affecting its siblings.
#[derive(Debug)]
pub struct ListPayload<T>(Vec<T>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawList {
    Bare(Vec<Value>),
    Wrapped { data: Vec<Value> },
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ListPayload<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (RawList::Bare(items) | RawList::Wrapped { data: items }) =
            RawList::deserialize(deserializer)?;

        let decoded = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!("Skipping list item {index}: {err}");
                    None
                }
            })
            .collect();
        Ok(Self(decoded))
    }
}

impl<T> ListPayload<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

/// Field decoders that turn bad values into defaults instead of errors.
mod lenient {
    use serde::de::{self, DeserializeOwned, Deserializer};
    use serde::Deserialize;
    use serde_json::Value;

    pub(super) fn identity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(id) if !id.is_empty() => Ok(id),
            Value::Number(id) => Ok(id.to_string()),
            other => Err(de::Error::custom(format!("unusable identity {other}"))),
        }
    }

    /// `T`, or its default when the value is null or mistyped.
    pub(super) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    /// A finite number. Numeric text is accepted, anything else is `None`.
    pub(super) fn number<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        let number = match Value::deserialize(deserializer)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(number.filter(|n| n.is_finite()))
    }

    pub(super) fn count<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u32>, D::Error> {
        Ok(number(deserializer)?
            .filter(|n| *n >= 0.0 && *n <= f64::from(u32::MAX))
            .map(|n| n as u32))
    }

    pub(super) fn quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        Ok(count(deserializer)?.unwrap_or(1))
    }

    /// Only an explicit `false` clears the flag.
    pub(super) fn flag_or_true<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<bool, D::Error> {
        Ok(!matches!(Value::deserialize(deserializer)?, Value::Bool(false)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_with_populated_refs() {
        let order: Order = serde_json::from_value(json!({
            "_id": "65f1c0ffee12ab34cd56ef78",
            "user": {"name": "Asha"},
            "restaurant": {"_id": "r1", "title": "Dosa Corner"},
            "items": [{"name": "Masala dosa", "quantity": 2}, {"name": "Filter coffee"}],
            "totalAmount": 240.0,
            "status": "PLACED",
            "createdAt": "2024-03-14T09:30:00.000Z"
        }))
        .expect("order should decode");

        assert_eq!(order.customer.as_ref().and_then(PersonRef::name), Some("Asha"));
        assert_eq!(
            order.restaurant.as_ref().and_then(RestaurantRef::title),
            Some("Dosa Corner")
        );
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.total_amount, Some(240.0));
    }

    #[test]
    fn test_bare_id_reference_has_no_title() {
        let food: Food = serde_json::from_value(json!({
            "id": "f1",
            "name": "Idli",
            "restaurant": "r1"
        }))
        .expect("food should decode");

        assert_eq!(food.restaurant, Some(RestaurantRef::Id("r1".to_owned())));
        assert_eq!(food.restaurant.as_ref().and_then(RestaurantRef::title), None);
        assert!(food.is_available);
    }

    #[test]
    fn test_sparse_records_decode() {
        let user: User = serde_json::from_value(json!({"_id": "u1"})).expect("user");
        assert!(user.is_active);
        assert!(user.name.is_none());

        let restaurant: Restaurant =
            serde_json::from_value(json!({"_id": "r1", "approved": true})).expect("restaurant");
        assert!(restaurant.is_approved);
    }

    #[test]
    fn test_list_payload_shapes() {
        let bare: ListPayload<StaffMember> =
            serde_json::from_value(json!([{"_id": "s1"}])).expect("bare");
        assert_eq!(bare.into_vec().len(), 1);

        let wrapped: ListPayload<StaffMember> =
            serde_json::from_value(json!({"data": [{"_id": "s1"}, {"_id": "s2"}]}))
                .expect("wrapped");
        assert_eq!(wrapped.into_vec().len(), 2);
    }

    #[test]
    fn test_malformed_fields_fall_back_to_defaults() {
        let orders: ListPayload<Order> = serde_json::from_value(json!([
            {"_id": "o1", "status": "pending", "totalAmount": 100},
            {"_id": "o2", "status": null, "totalAmount": 50, "items": "two"}
        ]))
        .expect("orders");
        let orders = orders.into_vec();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[1].status, "");
        assert_eq!(orders[1].total_amount, Some(50.0));
        assert_eq!(orders[1].item_count(), 0);

        let foods: ListPayload<Food> = serde_json::from_value(json!({"data": [
            {"_id": "f1", "price": "45", "isAvailable": null},
            {"_id": "f2", "price": "cheap", "category": 7}
        ]}))
        .expect("foods");
        let foods = foods.into_vec();
        assert_eq!(foods[0].price, Some(45.0));
        assert!(foods[0].is_available);
        assert_eq!(foods[1].price, None);
        assert_eq!(foods[1].category, None);
    }

    #[test]
    fn test_item_without_identity_is_skipped() {
        let staff: ListPayload<StaffMember> = serde_json::from_value(json!([
            {"_id": "s1", "isActive": false},
            {"name": "No id"},
            {"_id": ""},
            {"id": 42, "role": null}
        ]))
        .expect("staff");
        let staff = staff.into_vec();

        assert_eq!(staff.len(), 2);
        assert!(!staff[0].is_active);
        assert_eq!(staff[1].id, "42");
        assert_eq!(staff[1].role, None);
    }
}
