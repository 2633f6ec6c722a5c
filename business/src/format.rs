//! Column-aware cell formatting.
//!
//! [`format_cell`] is the single place where a column name decides how a row
//! value is shown: currency, approval badge, status badge, or plain text.

use crate::row::{CellValue, Column, MISSING_TEXT, Row};

/// Currency symbol prefixed to every monetary amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Columns whose values are monetary amounts.
const CURRENCY_COLUMNS: [&str; 3] = ["amount", "revenue", "price"];

const POSITIVE_STATUSES: [&str; 3] = ["delivered", "active", "approved"];
const WARNING_STATUSES: [&str; 2] = ["placed", "pending"];
const INFORMATIONAL_STATUSES: [&str; 3] = ["preparing", "inactive", "out_for_delivery"];

/// Visual classification of a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTier {
    Positive,
    Warning,
    Informational,
    Negative,
}

/// Displayable content of one table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Badge { text: String, tier: BadgeTier },
}

impl Cell {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Badge { text, .. } => text,
        }
    }
}

/// Classifies a status string into a badge tier.
///
/// Total over all inputs: anything not in a known list is [`BadgeTier::Negative`].
pub fn classify_status(status: &str) -> BadgeTier {
    let status = status.trim().to_lowercase();
    let status = status.as_str();

    if POSITIVE_STATUSES.contains(&status) {
        BadgeTier::Positive
    } else if WARNING_STATUSES.contains(&status) {
        BadgeTier::Warning
    } else if INFORMATIONAL_STATUSES.contains(&status) {
        BadgeTier::Informational
    } else {
        BadgeTier::Negative
    }
}

/// Raw status with underscores shown as spaces.
pub fn status_label(status: &str) -> String {
    status.replace('_', " ")
}

/// Formats an amount with two decimals; missing or non-finite amounts are zero.
pub fn format_currency(amount: Option<f64>) -> String {
    let amount = amount.filter(|a| a.is_finite()).unwrap_or(0.0);
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

pub fn is_currency_column(column: &Column) -> bool {
    CURRENCY_COLUMNS.contains(&column.key())
}

/// Produces the cell shown for `column` on `row`.
pub fn format_cell(column: &Column, row: &Row) -> Cell {
    let value = row.value(column);

    if is_currency_column(column) {
        return Cell::Text(format_currency(value.as_number()));
    }

    match column.key() {
        "approval" => {
            let (text, tier) = if value.is_truthy() {
                ("approved", BadgeTier::Positive)
            } else {
                ("pending", BadgeTier::Warning)
            };
            Cell::Badge {
                text: text.to_owned(),
                tier,
            }
        }
        "status" => {
            let raw = match value {
                CellValue::Missing => String::new(),
                other => other.to_string(),
            };
            Cell::Badge {
                tier: classify_status(&raw),
                text: if raw.is_empty() {
                    MISSING_TEXT.to_owned()
                } else {
                    status_label(&raw)
                },
            }
        }
        _ => Cell::Text(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::RowKey;

    fn row() -> Row {
        Row::new(RowKey::new("r1"))
    }

    #[test]
    fn test_missing_currency_is_zero() {
        for label in ["Amount", "Revenue", "Price"] {
            assert_eq!(
                format_cell(&Column::new(label), &row()),
                Cell::Text("₹0.00".to_owned()),
                "{label} should default to zero"
            );
        }
    }

    #[test]
    fn test_currency_two_decimals() {
        let row = row().with("amount", 249.5).with("revenue", "1200");
        assert_eq!(format_cell(&Column::new("Amount"), &row).text(), "₹249.50");
        assert_eq!(format_cell(&Column::new("Revenue"), &row).text(), "₹1200.00");
        assert_eq!(format_currency(Some(f64::INFINITY)), "₹0.00");
    }

    #[test]
    fn test_non_numeric_currency_is_zero() {
        let row = row().with("amount", "free");
        assert_eq!(format_cell(&Column::new("Amount"), &row).text(), "₹0.00");
    }

    #[test]
    fn test_approval_badge() {
        let approved = row().with("approval", true);
        assert_eq!(
            format_cell(&Column::new("Approval"), &approved),
            Cell::Badge {
                text: "approved".to_owned(),
                tier: BadgeTier::Positive
            }
        );

        for pending in [row(), row().with("approval", false)] {
            assert_eq!(
                format_cell(&Column::new("Approval"), &pending),
                Cell::Badge {
                    text: "pending".to_owned(),
                    tier: BadgeTier::Warning
                }
            );
        }
    }

    #[test]
    fn test_status_tiers() {
        let cases = [
            ("delivered", BadgeTier::Positive),
            ("ACTIVE", BadgeTier::Positive),
            ("approved", BadgeTier::Positive),
            ("PLACED", BadgeTier::Warning),
            ("pending", BadgeTier::Warning),
            ("Preparing", BadgeTier::Informational),
            ("inactive", BadgeTier::Informational),
            ("cancelled", BadgeTier::Negative),
            ("", BadgeTier::Negative),
            ("🍛", BadgeTier::Negative),
        ];
        for (status, tier) in cases {
            assert_eq!(classify_status(status), tier, "status {status:?}");
        }
    }

    #[test]
    fn test_out_for_delivery_badge() {
        let row = row().with("status", "OUT_FOR_DELIVERY");
        let cell = format_cell(&Column::new("Status"), &row);
        assert_eq!(
            cell,
            Cell::Badge {
                text: "OUT FOR DELIVERY".to_owned(),
                tier: BadgeTier::Informational
            }
        );
    }

    #[test]
    fn test_missing_status_is_negative_placeholder() {
        let cell = format_cell(&Column::new("Status"), &row());
        assert_eq!(
            cell,
            Cell::Badge {
                text: MISSING_TEXT.to_owned(),
                tier: BadgeTier::Negative
            }
        );
    }

    #[test]
    fn test_plain_columns_fall_back_to_placeholder() {
        let row = row().with("customer", "Asha").with("items", 3_u32);
        assert_eq!(format_cell(&Column::new("Customer"), &row).text(), "Asha");
        assert_eq!(format_cell(&Column::new("Items"), &row).text(), "3");
        assert_eq!(format_cell(&Column::new("Phone"), &row).text(), MISSING_TEXT);
    }
}
