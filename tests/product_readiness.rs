#[test]
fn manager_api_key_has_a_default() {
    let cfg = payment_gateways_api::config::AppConfig::from_env().unwrap();
    assert!(!cfg.manager_api_key.is_empty());
}

#[test]
fn documented_endpoints_exist_in_readme() {
    let readme = std::fs::read_to_string("README.md").unwrap_or_default();
    assert!(readme.contains("/ops/readiness"));
    assert!(readme.contains("/ops/liveness"));
    assert!(readme.contains("/payment_gateways/:id"));
}
