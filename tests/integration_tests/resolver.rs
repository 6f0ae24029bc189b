use crate::common::{certificate_credentials, local_mock_table, signature_credentials};
use paypal_recurring::{
    AuthMode, Configuration, EndpointTable, Environment, Error, API_VERSION,
};
use test_case::test_case;

#[test_case(false, false, "https://api.paypal.com/nvp" ; "production with certificate")]
#[test_case(false, true, "https://api-3t.paypal.com/nvp" ; "production with signature")]
#[test_case(true, false, "https://api.sandbox.paypal.com/nvp" ; "sandbox with certificate")]
#[test_case(true, true, "https://api-3t.sandbox.paypal.com/nvp" ; "sandbox with signature")]
fn api_endpoint_depends_on_environment_and_credentials(
    sandbox: bool,
    with_signature: bool,
    expected: &str,
) {
    let config = if with_signature {
        signature_credentials(sandbox)
    } else {
        certificate_credentials(sandbox)
    };

    assert_eq!(config.api_endpoint().unwrap().as_str(), expected);
    assert_eq!(config.api_version(), API_VERSION);
}

#[test_case(true, Environment::Sandbox, "https://www.sandbox.paypal.com/cgi-bin/webscr" ; "sandbox")]
#[test_case(false, Environment::Production, "https://www.paypal.com/cgi-bin/webscr" ; "production")]
fn site_endpoint_ignores_credentials(sandbox: bool, environment: Environment, expected: &str) {
    for config in [signature_credentials(sandbox), certificate_credentials(sandbox)] {
        assert_eq!(config.environment(), environment);
        assert_eq!(config.site_endpoint().unwrap().as_str(), expected);
    }
}

#[test]
fn reconfiguring_switches_endpoints() {
    let mut config = certificate_credentials(false);
    assert_eq!(config.auth_mode(), AuthMode::Certificate);

    let calls = config.configure(|config| {
        config.sandbox = true;
        config.signature = Some("late-signature".into());
        1
    });

    assert_eq!(calls, 1);
    assert_eq!(config.auth_mode(), AuthMode::Signature);
    assert_eq!(
        config.api_endpoint().unwrap().as_str(),
        "https://api-3t.sandbox.paypal.com/nvp"
    );

    // Last write wins
    config.configure(|config| {
        config.sandbox = false;
        config.signature = None;
    });
    assert_eq!(
        config.api_endpoint().unwrap().as_str(),
        "https://api.paypal.com/nvp"
    );
}

#[test]
fn explicit_auth_mode_is_honoured() {
    let config = Configuration::builder()
        .signature("signature")
        .auth_mode(AuthMode::Certificate)
        .build()
        .unwrap();

    assert_eq!(
        config.api_endpoint().unwrap().as_str(),
        "https://api.paypal.com/nvp"
    );
}

#[test]
fn local_mock_endpoints() {
    let (table, sandbox_url, production_url) = local_mock_table();

    let mut config = signature_credentials(true);
    config.set_endpoint_table(table);

    assert_eq!(config.api_endpoint().unwrap(), &sandbox_url);

    config.sandbox = false;
    assert_eq!(config.api_endpoint().unwrap(), &production_url);
    assert_eq!(
        config.checkout_url("EC-1").unwrap().as_str(),
        "http://127.0.0.1:9002/nvp?cmd=_express-checkout&token=EC-1"
    );
}

#[test]
fn empty_table_never_resolves_to_an_empty_address() {
    let mut config = signature_credentials(false);
    config.set_endpoint_table(EndpointTable::empty());

    let err = config.api_endpoint().unwrap_err();

    assert!(matches!(err, Error::ConfigurationError(Environment::Production)));
    assert!(err.to_string().contains("missing endpoint entry"));
}
