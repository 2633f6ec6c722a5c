use egui::{Response, Ui};
use tiffin_business::BadgeTier;
use tiffin_utils::version_info;

use crate::widgets::badge::badge;

fn env_tier(env_name: &str) -> BadgeTier {
    match env_name {
        "stable" => BadgeTier::Positive,
        "nightly" => BadgeTier::Warning,
        _ => BadgeTier::Informational,
    }
}

/// Build label in the top bar, e.g. `stable:0.1.0` or `staging:1a2b3c4`.
pub fn env_version(ui: &mut Ui) -> Response {
    let (env_name, _) = version_info::env_version_info();
    badge(ui, &version_info::format_env_version(), env_tier(env_name))
        .on_hover_text(format!("Built {}", version_info::build_date()))
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::*;

    #[test]
    fn test_env_version_shows_env_and_info() {
        let mut harness = Harness::new_ui(|ui| {
            env_version(ui);
        });
        harness.step();

        let (env_name, _) = version_info::env_version_info();
        assert!(harness.query_by_label_contains(env_name).is_some());
    }

    #[test]
    fn test_env_tiers() {
        assert_eq!(env_tier("stable"), BadgeTier::Positive);
        assert_eq!(env_tier("nightly"), BadgeTier::Warning);
        assert_eq!(env_tier("staging"), BadgeTier::Informational);
    }
}
