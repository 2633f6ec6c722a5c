//! Settings tab: draft seeding, validation and save.

mod common;

use common::{TestApp, fixture_fetcher};
use kittest::Queryable;
use tiffin_business::{DashboardCommand, MockFetcher, PlatformSettings, SettingsDraft};
use tiffin_ui::pages::{Page, Tab};

#[test]
fn test_save_sends_loaded_settings() {
    let mut app = TestApp::new(fixture_fetcher());
    app.harness.state_mut().select(Tab::Settings);
    app.harness.step();

    app.harness.get_by_label("Save").click();
    app.harness.step();
    app.harness.step();

    assert_eq!(
        app.dispatcher.sent(),
        vec![DashboardCommand::SaveSettings(PlatformSettings {
            delivery_fee: 30.0,
            tax_percent: 5.0,
            min_order_amount: 99.0,
            support_email: "help@tiffin.in".to_owned(),
        })]
    );
}

#[test]
fn test_invalid_draft_blocks_save() {
    let mut app = TestApp::new(fixture_fetcher());
    app.harness.state_mut().select(Tab::Settings);
    if let Page::Settings(page) = app.harness.state_mut().navigation_mut().page_mut() {
        page.draft = Some(SettingsDraft {
            delivery_fee: "30".to_owned(),
            tax_percent: "5".to_owned(),
            min_order_amount: "99".to_owned(),
            support_email: "support".to_owned(),
        });
    }
    app.harness.step();

    assert!(
        app.harness
            .query_by_label("Support email must contain '@'")
            .is_some()
    );
    app.harness.get_by_label("Save").click();
    app.harness.step();
    app.harness.step();

    assert!(app.dispatcher.sent().is_empty());
}

#[test]
fn test_negative_fee_is_rejected() {
    let mut app = TestApp::new(fixture_fetcher());
    app.harness.state_mut().select(Tab::Settings);
    if let Page::Settings(page) = app.harness.state_mut().navigation_mut().page_mut() {
        page.draft = Some(SettingsDraft {
            delivery_fee: "-5".to_owned(),
            tax_percent: "5".to_owned(),
            min_order_amount: "99".to_owned(),
            support_email: "help@tiffin.in".to_owned(),
        });
    }
    app.harness.step();

    assert!(
        app.harness
            .query_by_label("Delivery fee must be a non-negative number")
            .is_some()
    );
}

#[test]
fn test_settings_wait_for_first_load() {
    let mut app = TestApp::new(MockFetcher::new().hold_unmatched());
    app.harness.state_mut().select(Tab::Settings);
    app.harness.step();

    assert!(app.harness.query_by_label("Loading...").is_some());
    assert!(app.harness.query_by_label("Save").is_none());
}
