use paypal_recurring::{AuthMode, Configuration, Environment, Error};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn load_toml_file() {
    let config = Configuration::load(fixture("paypal.toml")).unwrap();

    assert_eq!(config.environment(), Environment::Sandbox);
    assert_eq!(config.auth_mode(), AuthMode::Signature);
    assert_eq!(config.seller_id.as_deref(), Some("SELLERID"));
    assert_eq!(config.email.as_deref(), Some("seller@example.com"));
    assert_eq!(
        config.password.as_ref().map(|p| p.expose_secret()),
        Some("1234567890")
    );
    assert_eq!(
        config.api_endpoint().unwrap().as_str(),
        "https://api-3t.sandbox.paypal.com/nvp"
    );
}

#[test]
fn truthy_sandbox_value_selects_production() {
    let config = Configuration::load(fixture("paypal_loose_sandbox.json")).unwrap();

    assert!(!config.is_sandbox());
    assert_eq!(config.auth_mode(), AuthMode::Certificate);
    assert_eq!(
        config.api_endpoint().unwrap().as_str(),
        "https://api.paypal.com/nvp"
    );
    assert_eq!(
        config.site_endpoint().unwrap().as_str(),
        "https://www.paypal.com/cgi-bin/webscr"
    );
}

#[test]
fn missing_file() {
    let res = Configuration::load(fixture("does_not_exist.toml"));

    assert!(matches!(res, Err(Error::LoadError(_))));
}
