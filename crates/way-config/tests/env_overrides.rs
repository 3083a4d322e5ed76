use figment::Jail;
use way_config::{ConfigError, WayConfig};

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("WAYFINDER_ASSETS__BASE_URL", "http://localhost:5173/");
        jail.set_env("WAYFINDER_LOOKUP__URL", "https://demo.supabase.co");
        jail.set_env("WAYFINDER_LOOKUP__API_KEY", "anon");

        let config = WayConfig::load().expect("config loads");
        assert_eq!(config.assets.base_url, "http://localhost:5173/");
        assert!(config.lookup.is_configured());
        Ok(())
    });
}

#[test]
fn zero_probe_ceiling_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("WAYFINDER_NAVIGATION__PROBE_CEILING", "0");

        let err = WayConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_number_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("WAYFINDER_NAVIGATION__PROBE_CEILING", "many");

        let err = WayConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
