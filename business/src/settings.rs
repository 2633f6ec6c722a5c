use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Platform-wide settings edited on the Settings tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformSettings {
    pub delivery_fee: f64,
    pub tax_percent: f64,
    pub min_order_amount: f64,
    pub support_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("{0} must be a non-negative number")]
    InvalidNumber(&'static str),
    #[error("Support email must contain '@'")]
    InvalidEmail,
}

/// Text-field draft of [`PlatformSettings`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsDraft {
    pub delivery_fee: String,
    pub tax_percent: String,
    pub min_order_amount: String,
    pub support_email: String,
}

fn parse_amount(raw: &str, field: &'static str) -> Result<f64, SettingsError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or(SettingsError::InvalidNumber(field))
}

impl SettingsDraft {
    pub fn validate(&self) -> Result<PlatformSettings, SettingsError> {
        let delivery_fee = parse_amount(&self.delivery_fee, "Delivery fee")?;
        let tax_percent = parse_amount(&self.tax_percent, "Tax percent")?;
        let min_order_amount = parse_amount(&self.min_order_amount, "Minimum order amount")?;

        let support_email = self.support_email.trim();
        if !support_email.contains('@') {
            return Err(SettingsError::InvalidEmail);
        }

        Ok(PlatformSettings {
            delivery_fee,
            tax_percent,
            min_order_amount,
            support_email: support_email.to_owned(),
        })
    }
}

impl From<&PlatformSettings> for SettingsDraft {
    fn from(settings: &PlatformSettings) -> Self {
        Self {
            delivery_fee: settings.delivery_fee.to_string(),
            tax_percent: settings.tax_percent.to_string(),
            min_order_amount: settings.min_order_amount.to_string(),
            support_email: settings.support_email.clone(),
        }
    }
}
