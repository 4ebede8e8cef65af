// ABOUTME: Construction tests for the REST collaborator clients
// ABOUTME: Each client builds its own HTTP client from the configured timeouts

#![allow(clippy::unwrap_used)]

use nutrio_providers::lookup::LookupConfig;
use nutrio_providers::rest::{RestConfig, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use nutrio_providers::{RestLookup, RestStore};

#[test]
fn default_configs_carry_the_documented_timeouts() {
    let rest = RestConfig::default();
    assert_eq!(rest.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert_eq!(rest.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS);

    let lookup = LookupConfig::default();
    assert_eq!(lookup.timeout_secs, 30);
    assert_eq!(lookup.connect_timeout_secs, 10);
}

#[test]
fn clients_build_from_custom_timeouts() {
    let store = RestStore::new(RestConfig {
        base_url: "http://localhost:5066/api".to_owned(),
        timeout_secs: 5,
        connect_timeout_secs: 2,
    });
    assert!(store.is_ok());

    let lookup = RestLookup::new(LookupConfig::default());
    assert!(lookup.is_ok());
}
