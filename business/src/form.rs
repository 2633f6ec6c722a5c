//! Create and edit forms for the list resources.
//!
//! Each resource exposes a fixed set of editable fields. Field inputs are
//! plain strings while the user types; [`FormField::value`] turns them back
//! into typed values for the request body.

use crate::resource::Resource;
use crate::row::{CellValue, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// Static description of one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldDef {
    /// JSON key in the request body.
    wire: &'static str,
    label: &'static str,
    /// Row field used to seed the edit form.
    row_field: &'static str,
    kind: FieldKind,
}

const fn text(wire: &'static str, label: &'static str, row_field: &'static str) -> FieldDef {
    FieldDef {
        wire,
        label,
        row_field,
        kind: FieldKind::Text,
    }
}

const fn number(wire: &'static str, label: &'static str, row_field: &'static str) -> FieldDef {
    FieldDef {
        wire,
        label,
        row_field,
        kind: FieldKind::Number,
    }
}

const USER_FIELDS: [FieldDef; 3] = [
    text("name", "Name", "name"),
    text("email", "Email", "email"),
    text("role", "Role", "role"),
];
const RESTAURANT_FIELDS: [FieldDef; 2] = [
    text("title", "Name", "name"),
    text("cuisine", "Cuisine", "cuisine"),
];
const FOOD_FIELDS: [FieldDef; 3] = [
    text("name", "Name", "name"),
    text("category", "Category", "category"),
    number("price", "Price", "price"),
];
const STAFF_FIELDS: [FieldDef; 3] = [
    text("name", "Name", "name"),
    text("email", "Email", "email"),
    text("role", "Role", "role"),
];
const PLAN_FIELDS: [FieldDef; 3] = [
    text("name", "Plan", "plan"),
    number("price", "Price", "price"),
    number("mealsPerDay", "Meals per day", "meals/day"),
];

fn field_defs(resource: Resource) -> &'static [FieldDef] {
    match resource {
        Resource::Users => &USER_FIELDS,
        Resource::Restaurants => &RESTAURANT_FIELDS,
        Resource::Foods => &FOOD_FIELDS,
        Resource::Staff => &STAFF_FIELDS,
        Resource::SubscriptionPlans => &PLAN_FIELDS,
        Resource::Orders | Resource::Subscriptions | Resource::Settings => &[],
    }
}

/// Whether the resource can be created or edited from the dashboard.
pub fn is_editable(resource: Resource) -> bool {
    !field_defs(resource).is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub wire: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub input: String,
}

impl FormField {
    pub fn value(&self) -> CellValue {
        let template = match self.kind {
            FieldKind::Text => CellValue::Text(String::new()),
            FieldKind::Number => CellValue::Number(0.0),
        };
        template.parse_like(&self.input)
    }

    /// A number field holding something that is not a number.
    pub fn is_invalid(&self) -> bool {
        self.kind == FieldKind::Number && matches!(self.value(), CellValue::Text(_))
    }
}

/// Form fields for `resource`, seeded from `row` when editing.
pub fn form_fields(resource: Resource, row: Option<&Row>) -> Vec<FormField> {
    field_defs(resource)
        .iter()
        .map(|def| {
            let input = row
                .and_then(|row| row.get(def.row_field))
                .filter(|value| !value.is_missing())
                .map(|value| match value {
                    CellValue::Number(n) => n.to_string(),
                    other => other.to_string(),
                })
                .unwrap_or_default();
            FormField {
                wire: def.wire,
                label: def.label,
                kind: def.kind,
                input,
            }
        })
        .collect()
}

/// Request body fields. Blank inputs are left out.
pub fn form_values(fields: &[FormField]) -> Vec<(String, CellValue)> {
    fields
        .iter()
        .map(|field| (field.wire.to_owned(), field.value()))
        .filter(|(_, value)| !value.is_missing())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::RowKey;

    #[test]
    fn test_edit_form_is_seeded_from_row() {
        let row = Row::new(RowKey::new("f1"))
            .with("name", "Idli")
            .with("category", CellValue::Missing)
            .with("price", 45.5);
        let fields = form_fields(Resource::Foods, Some(&row));

        let inputs: Vec<&str> = fields.iter().map(|f| f.input.as_str()).collect();
        assert_eq!(inputs, vec!["Idli", "", "45.5"]);
    }

    #[test]
    fn test_form_values_are_typed_and_skip_blanks() {
        let mut fields = form_fields(Resource::SubscriptionPlans, None);
        fields[0].input = "Weekly Veg".to_owned();
        fields[1].input = "899".to_owned();

        assert_eq!(
            form_values(&fields),
            vec![
                ("name".to_owned(), CellValue::from("Weekly Veg")),
                ("price".to_owned(), CellValue::Number(899.0)),
            ]
        );
    }

    #[test]
    fn test_invalid_number_is_flagged() {
        let mut fields = form_fields(Resource::Foods, None);
        fields[2].input = "cheap".to_owned();
        assert!(fields[2].is_invalid());
        assert!(!fields[0].is_invalid());
    }

    #[test]
    fn test_orders_are_not_editable() {
        assert!(!is_editable(Resource::Orders));
        assert!(is_editable(Resource::Staff));
    }
}
